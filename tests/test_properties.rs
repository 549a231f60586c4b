//! Property-based tests for scoring, the recurrence, and forced-move replay.

use std::sync::{Mutex, OnceLock};

use proptest::prelude::*;

use dottri::constants::*;
use dottri::game_mechanics::{score_delta, score_for_edge, unclaimed_edges};
use dottri::memo_solver::MemoSolver;
use dottri::oracle::{GameOracle, TableOracle};
use dottri::replay::{replay_forced_moves, winner_from_table};
use dottri::state_computation::{compute_all_board_values, evaluate_board};
use dottri::topology::precompute_lookup_tables;
use dottri::types::{GameContext, Player, Topology};

static CTX: OnceLock<Box<GameContext>> = OnceLock::new();
static TOPOLOGY: OnceLock<Topology> = OnceLock::new();
static MEMO: OnceLock<Mutex<MemoSolver<'static>>> = OnceLock::new();

fn ctx() -> &'static GameContext {
    CTX.get_or_init(|| {
        let mut ctx = GameContext::new_boxed();
        precompute_lookup_tables(&mut ctx);
        compute_all_board_values(&mut ctx);
        ctx
    })
}

fn memo() -> &'static Mutex<MemoSolver<'static>> {
    MEMO.get_or_init(|| Mutex::new(MemoSolver::new(TOPOLOGY.get_or_init(Topology::build))))
}

/// Strategy: any board.
fn board_strategy() -> impl Strategy<Value = Board> {
    0..=FULL_BOARD
}

/// Strategy: every edge exactly once, in random order.
fn full_game_strategy() -> impl Strategy<Value = Vec<EdgeId>> {
    Just((0..EDGE_COUNT).collect::<Vec<_>>()).prop_shuffle()
}

/// Strategy: a random legal prefix of a game.
fn prefix_strategy() -> impl Strategy<Value = Vec<EdgeId>> {
    (full_game_strategy(), 0..=EDGE_COUNT).prop_map(|(mut order, len)| {
        order.truncate(len);
        order
    })
}

proptest! {
    // 1. Single-edge deltas are 0, 1 or 2, and the O(1) form matches the O(9) one.
    #[test]
    fn score_delta_bounded(board in board_strategy(), e in 0..EDGE_COUNT) {
        prop_assume!(!is_edge_claimed(board, e));
        let topology = &ctx().topology;
        let after = board | edge_bit(e);
        let s = score_delta(topology, board, after);
        prop_assert!(s <= 2, "s={s}");
        prop_assert_eq!(s, score_for_edge(topology, board, e));
        if s == 2 {
            prop_assert_eq!(topology.triangles_of_edge(e).len(), 2);
            for &m in topology.triangles_of_edge(e) {
                prop_assert!((board & m) != m && (after & m) == m);
            }
        }
    }

    // 2. Claiming edges never reopens a face: deltas along any game sum to 9.
    #[test]
    fn full_game_scores_every_face_once(order in full_game_strategy()) {
        let topology = &ctx().topology;
        let mut board = EMPTY_BOARD;
        let mut total = 0;
        for e in order {
            total += score_for_edge(topology, board, e);
            board |= edge_bit(e);
        }
        prop_assert_eq!(total as usize, TRIANGLE_COUNT);
        prop_assert_eq!(board, FULL_BOARD);
    }

    // 3. Table entries satisfy the recurrence and read back unchanged.
    #[test]
    fn table_satisfies_recurrence(board in board_strategy()) {
        let ctx = ctx();
        let stored = ctx.board_values()[board as usize];
        prop_assert_eq!(evaluate_board(&ctx.topology, ctx.board_values(), board), stored);
        prop_assert_eq!(ctx.board_value(board), Some(stored as i32));
        prop_assert_eq!(ctx.board_value(board), Some(stored as i32));
        prop_assert!((-(TRIANGLE_COUNT as i32)..=TRIANGLE_COUNT as i32).contains(&(stored as i32)));
    }

    // 4. Memoized search and the exhaustive table agree on free-play values.
    #[test]
    fn memo_matches_table(board in board_strategy()) {
        let v = memo().lock().unwrap().board_value(board);
        prop_assert_eq!(Some(v), ctx().board_value(board));
    }

    // 5. A game with every edge forced is decided by replay alone.
    #[test]
    fn fully_forced_game_needs_no_lookup(order in full_game_strategy()) {
        let ctx = ctx();
        let state = replay_forced_moves(&ctx.topology, &order);
        prop_assert_eq!(state.board, FULL_BOARD);
        prop_assert_eq!(ctx.board_value(state.board), Some(0));

        let final_margin = state.score_for_first_mover();
        prop_assert!(final_margin != 0);
        let expected = Player::from_first_mover_value(final_margin);
        prop_assert_eq!(winner_from_table(ctx, &order).unwrap(), expected);

        let mut table = TableOracle::new(ctx).unwrap();
        prop_assert_eq!(table.game_value(&order), final_margin);
        prop_assert_eq!(memo().lock().unwrap().solve(&order), final_margin);
    }

    // 6. Incremental replay, table recurrence, and memoized search pick the same winner.
    #[test]
    fn strategies_agree_on_prefixes(prefix in prefix_strategy()) {
        let ctx = ctx();
        let mut table = TableOracle::new(ctx).unwrap();
        let value = table.game_value(&prefix);
        prop_assert_eq!(memo().lock().unwrap().solve(&prefix), value);
        prop_assert_eq!(winner_from_table(ctx, &prefix).unwrap(), Player::from_first_mover_value(value));
        prop_assert_eq!(table.winner(&prefix), Player::from_first_mover_value(value));
    }

    // 7. Scoring moves keep the turn; quiet moves pass it.
    #[test]
    fn turn_retention(prefix in prefix_strategy()) {
        let topology = &ctx().topology;
        let mut board = EMPTY_BOARD;
        let mut player = Player::A;
        for (i, &e) in prefix.iter().enumerate() {
            let scored = score_for_edge(topology, board, e);
            board |= edge_bit(e);
            if scored == 0 {
                player = player.other();
            }
            let state = replay_forced_moves(topology, &prefix[..=i]);
            prop_assert_eq!(state.player, player);
            prop_assert_eq!(state.board, board);
        }
    }

    // 8. Forced lists with repeated edges stop at the repeat, the same way in every strategy.
    #[test]
    fn repeated_forced_edges_agree(forced in prop::collection::vec(0..EDGE_COUNT, 0..=20)) {
        let ctx = ctx();
        let mut table = TableOracle::new(ctx).unwrap();
        let value = table.game_value(&forced);
        prop_assert_eq!(memo().lock().unwrap().solve(&forced), value);
        prop_assert_eq!(table.winner(&forced), Player::from_first_mover_value(value));
        prop_assert_eq!(winner_from_table(ctx, &forced).unwrap(), Player::from_first_mover_value(value));
    }

    // 9. Open edges are exactly the clear bits.
    #[test]
    fn unclaimed_edges_are_clear_bits(board in board_strategy()) {
        let open: Vec<EdgeId> = unclaimed_edges(board).collect();
        prop_assert_eq!(open.len(), EDGE_COUNT - claimed_count(board));
        for e in open {
            prop_assert!(!is_edge_claimed(board, e));
        }
    }
}
