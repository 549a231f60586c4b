//! Scoring rule and the shared move recurrence.
//!
//! Claiming the last open edge of a face scores that face for the mover, and
//! any scoring move grants another turn. Game values are always taken from the
//! perspective of the player about to move, so the recurrence is:
//!
//! - scored > 0: mover keeps the turn, continuation = scored + V(next)
//! - scored = 0: turn passes, continuation = -V(next)

use crate::constants::*;
use crate::types::Topology;

/// Count faces completed by going from `before` to `after`.
///
/// A face counts when it was open in `before` and closed in `after`. For a
/// single-edge move the result is 0, 1, or 2.
pub fn score_delta(topology: &Topology, before: Board, after: Board) -> u32 {
    topology
        .triangle_masks
        .iter()
        .filter(|&&m| (before & m) != m && (after & m) == m)
        .count() as u32
}

/// Faces completed by claiming unclaimed edge `e` on `board`.
///
/// Same result as `score_delta(board, board | edge_bit(e))`, but only checks
/// the faces `e` borders.
#[inline(always)]
pub fn score_for_edge(topology: &Topology, board: Board, e: EdgeId) -> u32 {
    debug_assert!(!is_edge_claimed(board, e), "edge {e} already claimed");
    let after = board | edge_bit(e);
    topology
        .triangles_of_edge(e)
        .iter()
        .filter(|&&m| (after & m) == m)
        .count() as u32
}

/// Value of a move for the mover, given the successor's value for whoever moves next.
#[inline(always)]
pub fn continuation_value(scored: u32, successor_value: i32) -> i32 {
    if scored > 0 {
        scored as i32 + successor_value
    } else {
        -successor_value
    }
}

/// Iterate unclaimed edge ids in ascending order.
#[inline]
pub fn unclaimed_edges(board: Board) -> impl Iterator<Item = EdgeId> {
    let mut free = !board & FULL_BOARD;
    std::iter::from_fn(move || {
        if free == 0 {
            None
        } else {
            let e = free.trailing_zeros() as EdgeId;
            free &= free - 1;
            Some(e)
        }
    })
}

/// Result of claiming one edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub scored: u32,
}

impl MoveOutcome {
    /// A scoring move keeps the turn with the mover.
    pub fn keeps_turn(&self) -> bool {
        self.scored > 0
    }
}

/// Claim edge `e` on `board`.
pub fn apply_move(topology: &Topology, board: Board, e: EdgeId) -> MoveOutcome {
    MoveOutcome {
        board: board | edge_bit(e),
        scored: score_for_edge(topology, board, e),
    }
}
