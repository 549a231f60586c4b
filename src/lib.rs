//! # dottri — exact solver for dots-and-triangles
//!
//! Two players alternately claim edges of the side-3 triangular board
//! (10 points, 18 edges, 9 unit faces). Claiming the last edge of a face scores
//! it and grants another turn. Given the moves already played, the solver
//! reports who wins under optimal play.
//!
//! ## Phases
//!
//! | Phase | Module | Description |
//! |-------|--------|-------------|
//! | 0 | [`topology`] | Compile edge lookup, face masks, per-edge face membership |
//! | 1 | [`state_computation`] | Exhaustive DP over all 2^18 boards (sequential or level-parallel) |
//! | — | [`memo_solver`] | Alternative: memoized search over reachable boards only |
//! | 2 | [`replay`], [`oracle`], [`driver`] | Replay forced moves, look up or search the rest, report winner |
//!
//! ## Game value
//!
//! V(board) is the net number of faces the player to move can still secure
//! over the opponent. A scoring move adds its faces and keeps the turn; a
//! quiet move hands the opponent the board, negating their value:
//!
//! ```text
//! V(b) = max over open e of  { s + V(b|e)   if s > 0
//!                             { -V(b|e)      if s = 0
//! V(FULL_BOARD) = 0
//! ```
//!
//! The empty board is worth -3 to the first mover, so the second player wins.

#![allow(clippy::needless_range_loop)]

pub mod constants;
pub mod driver;
pub mod env_config;
pub mod error;
pub mod game_mechanics;
pub mod input;
pub mod memo_solver;
pub mod oracle;
pub mod replay;
pub mod state_computation;
pub mod topology;
pub mod types;
