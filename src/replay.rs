//! Query-time replay of a forced prefix against the precomputed table.
//!
//! The forced moves are applied to a running board while tracking the net
//! score of the player to move. A scoring move adds to that score and keeps
//! the turn. A non-scoring move passes the turn, so the score is negated to
//! stay relative to the new mover. The game's outcome is then
//! `score + V[board]`, still relative to the player to move.
//!
//! A forced move onto an already-claimed edge leaves no candidate move, so the
//! game stops there with the running score as its final margin.

use crate::constants::*;
use crate::error::DotsError;
use crate::game_mechanics::{apply_move, continuation_value, unclaimed_edges};
use crate::types::{GameContext, Player, Topology};

/// Position after a forced prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayState {
    pub board: Board,
    /// Net score so far, from `player`'s perspective.
    pub score: i32,
    /// Player to move at `board`.
    pub player: Player,
    /// A forced move named a claimed edge; nothing after it was applied.
    pub stalled: bool,
}

impl ReplayState {
    pub fn start() -> Self {
        Self {
            board: EMPTY_BOARD,
            score: 0,
            player: Player::A,
            stalled: false,
        }
    }

    /// Claim edge `e`. Returns false, and marks the state stalled, if `e` is
    /// already claimed.
    pub fn play(&mut self, topology: &Topology, e: EdgeId) -> bool {
        if is_edge_claimed(self.board, e) {
            self.stalled = true;
            return false;
        }
        let outcome = apply_move(topology, self.board, e);
        if outcome.keeps_turn() {
            self.score += outcome.scored as i32;
        } else {
            self.score = -self.score;
            self.player = self.player.other();
        }
        self.board = outcome.board;
        true
    }

    /// Net score so far from A's perspective.
    pub fn score_for_first_mover(&self) -> i32 {
        match self.player {
            Player::A => self.score,
            Player::B => -self.score,
        }
    }
}

/// Replay `forced` from the empty board, stopping at the first claimed edge.
pub fn replay_forced_moves(topology: &Topology, forced: &[EdgeId]) -> ReplayState {
    let mut state = ReplayState::start();
    for &e in forced {
        if !state.play(topology, e) {
            break;
        }
    }
    state
}

/// Winner under optimal play after `forced`, from the precomputed table.
pub fn winner_from_table(ctx: &GameContext, forced: &[EdgeId]) -> Result<Player, DotsError> {
    if !ctx.values_computed {
        return Err(DotsError::TableNotComputed);
    }
    Ok(replay_winner(&ctx.topology, &ctx.board_values, forced))
}

/// Replay `forced`, add the table value of the final board, and flip the
/// player once if the total is negative.
///
/// A stalled replay ends the game on the spot; its margin can be 0, which
/// counts for A like any non-negative first-mover value.
///
/// `values` must be fully computed.
pub fn replay_winner(topology: &Topology, values: &[i8], forced: &[EdgeId]) -> Player {
    let state = replay_forced_moves(topology, forced);
    if state.stalled {
        return Player::from_first_mover_value(state.score_for_first_mover());
    }
    let total = state.score + values[state.board as usize] as i32;
    if total < 0 {
        state.player.other()
    } else {
        state.player
    }
}

/// One legal move and what it is worth to the player making it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveValue {
    pub edge: EdgeId,
    pub endpoints: (u8, u8),
    pub scored: u32,
    /// Continuation value for the mover from this position onward.
    pub value: i32,
}

/// Value every legal move at `state.board` for the player to move.
///
/// `value_of(b)` must return the free-play value of board `b` for whoever
/// moves there. Sorted best first, ties by edge id.
pub fn analyze_moves<F>(topology: &Topology, state: &ReplayState, mut value_of: F) -> Vec<MoveValue>
where
    F: FnMut(Board) -> i32,
{
    let mut moves: Vec<MoveValue> = unclaimed_edges(state.board)
        .map(|e| {
            let outcome = apply_move(topology, state.board, e);
            MoveValue {
                edge: e,
                endpoints: topology.edge_endpoints(e),
                scored: outcome.scored,
                value: continuation_value(outcome.scored, value_of(outcome.board)),
            }
        })
        .collect();
    moves.sort_by(|a, b| b.value.cmp(&a.value).then(a.edge.cmp(&b.edge)));
    moves
}
