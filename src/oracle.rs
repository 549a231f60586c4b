//! One interface over both evaluation strategies.
//!
//! [`MemoSolver`] searches on demand; [`TableOracle`] answers from the
//! exhaustive table. Both report game values from the first mover's (A's)
//! perspective for a game whose first moves are `forced`.

use clap::ValueEnum;

use crate::constants::*;
use crate::error::DotsError;
use crate::game_mechanics::{apply_move, continuation_value};
use crate::memo_solver::MemoSolver;
use crate::replay::replay_winner;
use crate::state_computation::{compute_all_board_values, compute_all_board_values_parallel};
use crate::topology::precompute_lookup_tables;
use crate::types::{GameContext, Player};

/// Evaluation strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OracleKind {
    /// Recursive search with a per-board cache, only over reachable boards.
    Memo,
    /// Exhaustive table, filled in descending board order.
    Table,
    /// Exhaustive table, filled level by level with rayon.
    TableParallel,
}

pub trait GameOracle {
    /// Value for A under optimal play, with `forced` played first.
    fn game_value(&mut self, forced: &[EdgeId]) -> i32;

    /// Free-play value of `board` for the player to move.
    fn board_value(&mut self, board: Board) -> i32;

    fn winner(&mut self, forced: &[EdgeId]) -> Player {
        Player::from_first_mover_value(self.game_value(forced))
    }
}

impl GameOracle for MemoSolver<'_> {
    fn game_value(&mut self, forced: &[EdgeId]) -> i32 {
        self.solve(forced)
    }

    fn board_value(&mut self, board: Board) -> i32 {
        MemoSolver::board_value(self, board)
    }
}

/// Read-only view of a fully computed table.
pub struct TableOracle<'a> {
    ctx: &'a GameContext,
}

impl<'a> TableOracle<'a> {
    pub fn new(ctx: &'a GameContext) -> Result<Self, DotsError> {
        if !ctx.values_computed {
            return Err(DotsError::TableNotComputed);
        }
        Ok(Self { ctx })
    }

    /// Same recurrence as the memoized search, but the forced prefix has a
    /// single candidate per step and free play is a table lookup.
    fn forced_value(&self, forced: &[EdgeId], move_index: usize, board: Board) -> i32 {
        let Some(&e) = forced.get(move_index) else {
            return self.ctx.board_values[board as usize] as i32;
        };
        if is_edge_claimed(board, e) {
            return 0;
        }
        let outcome = apply_move(&self.ctx.topology, board, e);
        continuation_value(
            outcome.scored,
            self.forced_value(forced, move_index + 1, outcome.board),
        )
    }
}

impl GameOracle for TableOracle<'_> {
    fn game_value(&mut self, forced: &[EdgeId]) -> i32 {
        self.forced_value(forced, 0, EMPTY_BOARD)
    }

    fn board_value(&mut self, board: Board) -> i32 {
        self.ctx.board_values[board as usize] as i32
    }

    fn winner(&mut self, forced: &[EdgeId]) -> Player {
        replay_winner(&self.ctx.topology, &self.ctx.board_values, forced)
    }
}

/// Build the context `kind` needs: topology always, the full table unless memoized.
pub fn prepare_context(kind: OracleKind) -> Box<GameContext> {
    let mut ctx = GameContext::new_boxed();
    precompute_lookup_tables(&mut ctx);
    match kind {
        OracleKind::Memo => {}
        OracleKind::Table => compute_all_board_values(&mut ctx),
        OracleKind::TableParallel => compute_all_board_values_parallel(&mut ctx),
    }
    ctx
}

/// Oracle of the requested kind over a context from [`prepare_context`].
pub fn build_oracle(
    kind: OracleKind,
    ctx: &GameContext,
) -> Result<Box<dyn GameOracle + '_>, DotsError> {
    let oracle: Box<dyn GameOracle + '_> = match kind {
        OracleKind::Memo => Box::new(MemoSolver::new(&ctx.topology)),
        OracleKind::Table | OracleKind::TableParallel => Box::new(TableOracle::new(ctx)?),
    };
    Ok(oracle)
}
