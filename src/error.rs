//! Error types for the dots-and-triangles solver.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DotsError {
    #[error("unexpected end of input: expected {expected} (game {game})")]
    MissingToken { expected: &'static str, game: usize },

    #[error("invalid integer '{token}'")]
    InvalidInteger { token: String },

    #[error("vertices {v1} and {v2} are not joined by an edge")]
    UnknownEdge { v1: i64, v2: i64 },

    #[error("edge {v1},{v2} played twice in game {game}")]
    DuplicateMove { v1: i64, v2: i64, game: usize },

    #[error("board value table has not been computed")]
    TableNotComputed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl DotsError {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}
