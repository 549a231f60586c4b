//! Golden values and cross-checks between the memoized search and the table.
//!
//! The table is computed once per test binary; the memoized search is rerun
//! where a test needs a fresh cache.

use std::sync::OnceLock;

use dottri::constants::*;
use dottri::error::DotsError;
use dottri::memo_solver::MemoSolver;
use dottri::oracle::{build_oracle, prepare_context, GameOracle, OracleKind};
use dottri::replay::{analyze_moves, replay_forced_moves, winner_from_table, ReplayState};
use dottri::types::{GameContext, Player};

static CTX: OnceLock<Box<GameContext>> = OnceLock::new();

fn ctx() -> &'static GameContext {
    CTX.get_or_init(|| prepare_context(OracleKind::Table))
}

/// Resolve vertex pairs the way the input layer does.
fn edges(pairs: &[(i64, i64)]) -> Vec<EdgeId> {
    pairs
        .iter()
        .map(|&(a, b)| ctx().topology.edge_id(a, b).unwrap())
        .collect()
}

/// All 18 edges in the order the edge table lists them.
fn table_order() -> Vec<EdgeId> {
    EDGE_TABLE.iter().map(|&(_, _, e)| e as EdgeId).collect()
}

#[test]
fn test_empty_board_value() {
    assert_eq!(ctx().board_value(EMPTY_BOARD), Some(-3));
    assert_eq!(winner_from_table(ctx(), &[]).unwrap(), Player::B);
}

#[test]
fn test_table_guard_without_dp_pass() {
    let bare = prepare_context(OracleKind::Memo);
    assert!(!bare.values_computed());
    assert_eq!(bare.board_value(EMPTY_BOARD), None);
    assert!(matches!(
        build_oracle(OracleKind::Table, &bare),
        Err(DotsError::TableNotComputed)
    ));
    assert!(matches!(
        winner_from_table(&bare, &[]),
        Err(DotsError::TableNotComputed)
    ));
    assert!(ctx().values_computed());
}

#[test]
fn test_full_board_value() {
    assert_eq!(ctx().board_value(FULL_BOARD), Some(0));
    let mut memo = MemoSolver::new(&ctx().topology);
    assert_eq!(memo.board_value(FULL_BOARD), 0);
}

#[test]
fn test_memo_matches_table_everywhere() {
    let ctx = ctx();
    let mut memo = MemoSolver::new(&ctx.topology);
    assert_eq!(memo.solve(&[]), -3);
    assert_eq!(memo.cached_boards(), NUM_BOARDS);
    for board in 0..NUM_BOARDS as Board {
        assert_eq!(
            memo.cached_value(board),
            ctx.board_value(board),
            "board {board:#07x}"
        );
    }
}

#[test]
fn test_parallel_table_matches() {
    let par = prepare_context(OracleKind::TableParallel);
    assert_eq!(par.board_values(), ctx().board_values());
}

#[test]
fn test_opening_move_values() {
    let moves = analyze_moves(&ctx().topology, &ReplayState::start(), |b| {
        ctx().board_values()[b as usize] as i32
    });
    for m in &moves {
        let expected = if [2, 4, 6, 8, 13, 16].contains(&m.edge) { -5 } else { -3 };
        assert_eq!(m.value, expected, "edge {} ({:?})", m.edge, m.endpoints);
    }
    // Best opening equals the empty-board value.
    assert_eq!(moves[0].value, ctx().board_value(EMPTY_BOARD).unwrap());
}

#[test]
fn test_known_prefixes() {
    let cases: [(&[(i64, i64)], i32); 5] = [
        (&[(1, 2)], -3),
        (&[(1, 2), (1, 3)], -1),
        (&[(1, 2), (1, 3), (2, 3)], -1),
        (&[(2, 5), (3, 5), (4, 5), (5, 8)], 1),
        (&[(2, 1)], -3),
    ];
    let mut memo = MemoSolver::new(&ctx().topology);
    let mut table = build_oracle(OracleKind::Table, ctx()).unwrap();
    for (pairs, value) in cases {
        let forced = edges(pairs);
        assert_eq!(memo.solve(&forced), value, "{pairs:?}");
        assert_eq!(table.game_value(&forced), value, "{pairs:?}");
        assert_eq!(
            winner_from_table(ctx(), &forced).unwrap(),
            Player::from_first_mover_value(value),
            "{pairs:?}"
        );
    }
}

#[test]
fn test_scoring_prefix_keeps_turn() {
    // A: (1,2), B: (1,3), A: (2,3) closes the top face and moves again.
    let state = replay_forced_moves(&ctx().topology, &edges(&[(1, 2), (1, 3), (2, 3)]));
    assert_eq!(state.player, Player::A);
    assert_eq!(state.score, 1);
    assert_eq!(ctx().board_value(state.board), Some(-2));
}

#[test]
fn test_fully_forced_games() {
    let ascending: Vec<EdgeId> = (0..EDGE_COUNT).collect();
    let descending: Vec<EdgeId> = (0..EDGE_COUNT).rev().collect();
    let cases = [(ascending, -1), (descending, 1), (table_order(), -3)];

    let mut memo = MemoSolver::new(&ctx().topology);
    for (order, margin) in cases {
        let state = replay_forced_moves(&ctx().topology, &order);
        assert_eq!(state.board, FULL_BOARD);
        assert_eq!(state.score_for_first_mover(), margin, "{order:?}");
        assert_eq!(memo.solve(&order), margin, "{order:?}");
        assert_eq!(
            winner_from_table(ctx(), &order).unwrap(),
            Player::from_first_mover_value(margin)
        );
    }
}

#[test]
fn test_table_lookups_idempotent() {
    let ctx = ctx();
    let mut table = build_oracle(OracleKind::Table, ctx).unwrap();
    for board in [EMPTY_BOARD, 0b11, 0x1_2345, FULL_BOARD & !edge_bit(4)] {
        let first = table.board_value(board);
        assert_eq!(table.board_value(board), first);
        assert_eq!(ctx.board_value(board), Some(first));
    }
}
