//! Memoized recursive oracle: explore only boards reachable after a forced prefix.
//!
//! `recur(move_index, board)` walks every unclaimed edge. While `move_index`
//! is inside the forced list, the only candidate is the forced edge at that
//! index, so the prefix is replayed without search. Past the prefix the value
//! depends on `board` alone and is memoized.
//!
//! ## Cache boundary
//!
//! Two different forced prefixes can reach the same board with different
//! remaining obligations, so an entry is only read or written when
//! `move_index >= forced.len()`. The cache outlives a single query: free-play
//! values are context-free, so later games reuse them.

use crate::constants::*;
use crate::game_mechanics::{continuation_value, score_for_edge, unclaimed_edges};
use crate::types::Topology;

/// On-demand minimax with a per-board cache of free-play values.
pub struct MemoSolver<'a> {
    topology: &'a Topology,
    cache: Vec<i8>,
    cached: usize,
}

impl<'a> MemoSolver<'a> {
    pub fn new(topology: &'a Topology) -> Self {
        Self {
            topology,
            cache: vec![SENTINEL; NUM_BOARDS],
            cached: 0,
        }
    }

    /// Value of the whole game for the first mover, with `forced` replayed
    /// from the empty board.
    pub fn solve(&mut self, forced: &[EdgeId]) -> i32 {
        self.recur(forced, 0, EMPTY_BOARD)
    }

    /// Free-play value of `board` for the player to move.
    pub fn board_value(&mut self, board: Board) -> i32 {
        self.recur(&[], 0, board)
    }

    /// Memoized value of `board`, if it has been computed.
    pub fn cached_value(&self, board: Board) -> Option<i32> {
        match self.cache[board as usize] {
            SENTINEL => None,
            v => Some(v as i32),
        }
    }

    /// Number of boards with a memoized value.
    pub fn cached_boards(&self) -> usize {
        self.cached
    }

    /// Forget every memoized value.
    pub fn reset(&mut self) {
        self.cache.fill(SENTINEL);
        self.cached = 0;
    }

    fn recur(&mut self, forced: &[EdgeId], move_index: usize, board: Board) -> i32 {
        let free_play = move_index >= forced.len();
        if free_play {
            if let Some(v) = self.cached_value(board) {
                return v;
            }
        }

        let mut best = SENTINEL as i32;
        for e in unclaimed_edges(board) {
            if !free_play && e != forced[move_index] {
                continue;
            }
            let scored = score_for_edge(self.topology, board, e);
            let next = self.recur(forced, move_index + 1, board | edge_bit(e));
            best = best.max(continuation_value(scored, next));
        }
        // No legal move: game over, nothing left to win.
        if best == SENTINEL as i32 {
            best = 0;
        }

        if free_play {
            self.cache[board as usize] = best as i8;
            self.cached += 1;
        }
        best
    }
}
