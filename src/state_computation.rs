//! Phase 1: exhaustive DP — compute V[board] for all 2^18 boards.
//!
//! Two evaluation orders, same recurrence ([`evaluate_board`]):
//!
//! - [`compute_all_board_values`] sweeps boards from `FULL_BOARD` down to 0.
//! - [`compute_all_board_values_parallel`] sweeps popcount levels from 17 down
//!   to 0 and solves each level with rayon `par_iter`.
//!
//! ## Ordering precondition
//!
//! Every successor `board | edge_bit(e)` of a board is numerically larger and
//! has exactly one more claimed edge. Descending numeric order therefore
//! finalizes every successor before its predecessor, and so does descending
//! popcount order. Any other order reads sentinel or stale entries with no
//! visible error.
//!
//! Level 18 (the full board) is initialized by
//! [`crate::topology::initialize_final_board`].

use std::time::Instant;

use rayon::prelude::*;

use crate::constants::*;
use crate::game_mechanics::{continuation_value, score_for_edge, unclaimed_edges};
use crate::types::{GameContext, Topology};

/// Progress tracker for the level loop.
struct ComputeProgress {
    total_boards: usize,
    completed_boards: usize,
    start_time: Instant,
    boards_per_level: [usize; EDGE_COUNT + 1],
    time_per_level: [f64; EDGE_COUNT + 1],
}

impl ComputeProgress {
    fn new() -> Self {
        let mut boards_per_level = [0; EDGE_COUNT + 1];
        for board in 0..NUM_BOARDS as Board {
            boards_per_level[claimed_count(board)] += 1;
        }
        ComputeProgress {
            total_boards: NUM_BOARDS,
            completed_boards: 0,
            start_time: Instant::now(),
            boards_per_level,
            time_per_level: [0.0; EDGE_COUNT + 1],
        }
    }

    fn record_level(&mut self, level: usize, seconds: f64) {
        self.completed_boards += self.boards_per_level[level];
        self.time_per_level[level] = seconds;
    }

    fn print_summary(&self) {
        let total_time = self.start_time.elapsed().as_secs_f64();
        eprintln!("\nTotal computation time: {:.3} seconds", total_time);
        eprintln!(
            "Average processing rate: {:.0} boards/second",
            self.completed_boards as f64 / total_time
        );
        eprintln!("\nLevel | Boards  | Time (ms) | Rate (boards/s)");
        eprintln!("------|---------|-----------|----------------");
        for level in (0..=EDGE_COUNT).rev() {
            let level_time = self.time_per_level[level];
            if level_time > 0.0 {
                eprintln!(
                    "  {:2}  | {:6}  | {:8.3}  | {:6.0}",
                    level,
                    self.boards_per_level[level],
                    level_time * 1000.0,
                    self.boards_per_level[level] as f64 / level_time
                );
            }
        }
    }
}

/// Best continuation over every unclaimed edge, read from successor entries.
///
/// `values` must already hold final entries for every successor of `board`.
/// Returns 0 when no edge is open.
#[inline]
pub fn evaluate_board(topology: &Topology, values: &[i8], board: Board) -> i8 {
    let mut best = SENTINEL as i32;
    for e in unclaimed_edges(board) {
        let next = values[(board | edge_bit(e)) as usize];
        debug_assert!(next != SENTINEL, "successor of {board:#07x} not finalized");
        let scored = score_for_edge(topology, board, e);
        best = best.max(continuation_value(scored, next as i32));
    }
    if best == SENTINEL as i32 {
        0
    } else {
        best as i8
    }
}

/// Fill V[board] for every board in descending numeric order.
///
/// Single-threaded. See the module docs for why the order is required.
pub fn compute_all_board_values(ctx: &mut GameContext) {
    eprintln!("=== Starting Board Value Computation (sequential) ===");
    eprintln!("Total boards to compute: {}", NUM_BOARDS);
    let start = Instant::now();

    for board in (0..NUM_BOARDS as Board).rev() {
        let v = evaluate_board(&ctx.topology, &ctx.board_values, board);
        ctx.board_values[board as usize] = v;
    }
    ctx.values_computed = true;

    let elapsed = start.elapsed().as_secs_f64();
    eprintln!(
        "Computed {} boards in {:.3} seconds ({:.0} boards/sec)",
        NUM_BOARDS,
        elapsed,
        NUM_BOARDS as f64 / elapsed
    );
    eprintln!("V(empty) = {}", ctx.board_values[EMPTY_BOARD as usize]);
}

/// Fill V[board] level by level, parallel within each level.
///
/// Boards with the same number of claimed edges never reach each other, and
/// all their successors live one level up. Each level is solved from a
/// read-only view of the table, then scattered back.
pub fn compute_all_board_values_parallel(ctx: &mut GameContext) {
    let mut progress = ComputeProgress::new();

    eprintln!("=== Starting Board Value Computation (level-parallel) ===");
    eprintln!("Total boards to compute: {}", progress.total_boards);
    eprintln!("Boards per level:");
    for level in 0..=EDGE_COUNT {
        eprintln!("  Level {:2}: {:6} boards", level, progress.boards_per_level[level]);
    }
    eprintln!();

    let mut levels: Vec<Vec<Board>> = vec![Vec::new(); EDGE_COUNT + 1];
    for board in 0..NUM_BOARDS as Board {
        levels[claimed_count(board)].push(board);
    }

    // Level 18 is the terminal board, set in Phase 0.
    ctx.board_values[FULL_BOARD as usize] = 0;
    progress.record_level(EDGE_COUNT, 0.0);

    for level in (0..EDGE_COUNT).rev() {
        let level_start = Instant::now();

        let ctx_ref = &*ctx;
        let results: Vec<(Board, i8)> = levels[level]
            .par_iter()
            .map(|&board| {
                (
                    board,
                    evaluate_board(&ctx_ref.topology, &ctx_ref.board_values, board),
                )
            })
            .collect();

        for (board, v) in results {
            ctx.board_values[board as usize] = v;
        }

        progress.record_level(level, level_start.elapsed().as_secs_f64());
    }
    ctx.values_computed = true;

    eprintln!("=== Computation Complete ===");
    progress.print_summary();
    eprintln!("V(empty) = {}", ctx.board_values[EMPTY_BOARD as usize]);
}
