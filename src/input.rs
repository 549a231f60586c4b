//! Whitespace-separated game records.
//!
//! ```text
//! T
//! M  v1 v2  v1 v2 ...     (repeated T times)
//! ```
//!
//! Each `v1 v2` pair names an edge by its endpoints, in either order.

use crate::constants::*;
use crate::error::DotsError;
use crate::types::{Player, Topology};

/// One query: the moves already played in a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number.
    pub number: usize,
    pub forced: Vec<EdgeId>,
}

struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_int(&mut self, expected: &'static str, game: usize) -> Result<i64, DotsError> {
        let token = self
            .inner
            .next()
            .ok_or(DotsError::MissingToken { expected, game })?;
        token.parse().map_err(|_| DotsError::InvalidInteger {
            token: token.to_string(),
        })
    }

    fn next_count(&mut self, expected: &'static str, game: usize) -> Result<usize, DotsError> {
        let n = self.next_int(expected, game)?;
        usize::try_from(n).map_err(|_| DotsError::InvalidInteger {
            token: n.to_string(),
        })
    }
}

/// Parse every game in `input`, resolving vertex pairs to edge ids.
///
/// Fails on the first malformed token, unknown edge, or repeated edge.
/// Tokens after the last game are ignored.
pub fn parse_games(input: &str, topology: &Topology) -> Result<Vec<GameRecord>, DotsError> {
    let mut tokens = Tokens {
        inner: input.split_ascii_whitespace(),
    };
    let count = tokens.next_count("game count", 0)?;

    let mut games = Vec::with_capacity(count.min(1 << 16));
    for number in 1..=count {
        let moves = tokens.next_count("move count", number)?;
        let mut forced = Vec::with_capacity(moves.min(EDGE_COUNT));
        let mut used: Board = 0;
        for _ in 0..moves {
            let v1 = tokens.next_int("vertex", number)?;
            let v2 = tokens.next_int("vertex", number)?;
            let e = topology
                .edge_id(v1, v2)
                .ok_or(DotsError::UnknownEdge { v1, v2 })?;
            if is_edge_claimed(used, e) {
                return Err(DotsError::DuplicateMove { v1, v2, game: number });
            }
            used |= edge_bit(e);
            forced.push(e);
        }
        games.push(GameRecord { number, forced });
    }
    Ok(games)
}

/// Result line for one game.
pub fn format_result(number: usize, winner: Player) -> String {
    format!("Game {}: {} wins.", number, winner)
}
