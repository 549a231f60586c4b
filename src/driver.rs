//! Query driver: parse games, answer each with the chosen oracle, write results.

use std::io::Write;
use std::time::Instant;

use crate::error::DotsError;
use crate::input::{format_result, parse_games, GameRecord};
use crate::oracle::{build_oracle, prepare_context, GameOracle, OracleKind};
use crate::replay::{analyze_moves, replay_forced_moves};
use crate::types::Topology;

/// Answer every game in `input`, one line per game on `out`.
///
/// With `explain`, the value of each legal move after the forced prefix is
/// written to stderr. Returns the number of games answered.
pub fn run_games<W: Write>(
    input: &str,
    kind: OracleKind,
    explain: bool,
    out: &mut W,
) -> Result<usize, DotsError> {
    let ctx = prepare_context(kind);
    let games = parse_games(input, &ctx.topology)?;
    let mut oracle = build_oracle(kind, &ctx)?;

    let start = Instant::now();
    for game in &games {
        if explain {
            explain_game(&ctx.topology, oracle.as_mut(), game);
        }
        let winner = oracle.winner(&game.forced);
        writeln!(out, "{}", format_result(game.number, winner))
            .map_err(|e| DotsError::io("write game result", e))?;
    }
    out.flush()
        .map_err(|e| DotsError::io("flush game results", e))?;

    eprintln!(
        "Answered {} games with {:?} oracle in {:.3} ms",
        games.len(),
        kind,
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(games.len())
}

fn explain_game(topology: &Topology, oracle: &mut dyn GameOracle, game: &GameRecord) {
    let state = replay_forced_moves(topology, &game.forced);
    eprintln!(
        "Game {}: {} forced moves, {} to move, score {:+} for A",
        game.number,
        game.forced.len(),
        state.player,
        state.score_for_first_mover()
    );
    for m in analyze_moves(topology, &state, |b| oracle.board_value(b)) {
        eprintln!(
            "  First move {},{} gives {}{}",
            m.endpoints.0,
            m.endpoints.1,
            m.value,
            if m.scored > 0 { " (scores)" } else { "" }
        );
    }
}
