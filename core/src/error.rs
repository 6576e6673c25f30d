//! Error types for maze construction, generation and solving.
//!
//! Boundary checks during neighbour lookups are routine and return `Option`;
//! the variants here are only for requests that cannot be honoured.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Rejected at grid construction. No grid is created or modified.
    #[error("invalid maze configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// The generator has not reached `Completed` yet.
    #[error("maze generation has not completed")]
    NotCompleted,

    #[error("no path between ({from_row}, {from_col}) and ({to_row}, {to_col})")]
    NoPath {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },
}

pub type Result<T> = std::result::Result<T, MazeError>;
