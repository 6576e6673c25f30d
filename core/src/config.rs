//! Maze configuration.
//!
//! Every parameter is required; there are no defaults at this level. The
//! host CLI fills in its own defaults before building a `MazeConfig`.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// A (row, col) cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Number of cell rows (rings in the circular projection)
    pub rows: usize,
    /// Number of cell columns (sectors in the circular projection)
    pub cols: usize,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub start: CellPos,
    pub end: CellPos,
}

impl MazeConfig {
    /// Check the configuration before any grid is built.
    ///
    /// `start == end` is allowed; the cell is flagged as the start and the
    /// solution is that single cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidConfiguration(format!(
                "grid must have at least one row and one column, got {}x{}",
                self.rows, self.cols
            )));
        }

        // `!(x > 0.0)` also catches NaN
        if !(self.canvas_width > 0.0 && self.canvas_width.is_finite())
            || !(self.canvas_height > 0.0 && self.canvas_height.is_finite())
        {
            return Err(MazeError::InvalidConfiguration(format!(
                "canvas extents must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        for (name, pos) in [("start", self.start), ("end", self.end)] {
            if !self.contains(pos) {
                return Err(MazeError::InvalidConfiguration(format!(
                    "{} cell {} is outside the {}x{} grid",
                    name, pos, self.rows, self.cols
                )));
            }
        }

        Ok(())
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
