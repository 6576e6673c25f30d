//! Maze topology engine
//!
//! This crate generates perfect mazes with a randomized depth-first
//! backtracker, derives the geometry of every cell in two projections
//! (rectangular grid and concentric rings), reconstructs the start-to-end
//! solution, and paints the result onto any [`Canvas`].
//!
//! ```
//! use ringmaze_core::{CellPos, Maze, MazeConfig};
//!
//! let config = MazeConfig {
//!     rows: 8,
//!     cols: 12,
//!     canvas_width: 600.0,
//!     canvas_height: 600.0,
//!     start: CellPos::new(0, 0),
//!     end: CellPos::new(7, 11),
//! };
//! let mut maze = Maze::generate(&config, 2918957128).unwrap();
//! let path = maze.solve().unwrap();
//! assert_eq!(maze.result().passages, 8 * 12 - 1);
//! assert_eq!(path.first(), Some(&maze.grid().start()));
//! ```

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod maze_gen;
pub mod render;
pub mod solution;

// Re-export commonly used types for convenience
pub use cell::{Cell, CellRole, SolutionEdge};
pub use config::{CellPos, MazeConfig};
pub use direction::{Direction, Walls};
pub use error::MazeError;
pub use geometry::{Arc, Corners, Layout, Point, Projection, Segment};
pub use grid::Grid;
pub use maze_gen::{GenerationResult, Generator, GeneratorState, Maze};
pub use render::{render, render_frame, Canvas, Color, RenderOptions, Stroke};
