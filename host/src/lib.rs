use ringmaze_core::{
    render, CellPos, Color, Direction, Grid, Maze, MazeConfig, Projection, RenderOptions,
};

use serde::{Deserialize, Serialize};

pub mod svg;

pub use svg::SvgCanvas;

/// Grid size used when no config file is given
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
/// Canvas extent (pixels) used when no config file is given
pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;

/// Config files larger than this are rejected before parsing
pub const MAX_CONFIG_BYTES: usize = 1_000_000;

/// How the maze is laid out in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Rectangular cells
    #[default]
    Grid,
    /// Concentric rings, row 0 at the centre
    #[serde(alias = "polar")]
    Circular,
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(RenderMode::Grid),
            "circular" | "polar" => Ok(RenderMode::Circular),
            _ => Err(format!("Invalid render mode: '{}'. Must be 'grid' or 'circular'", s)),
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Grid => write!(f, "grid"),
            RenderMode::Circular => write!(f, "circular"),
        }
    }
}

impl From<RenderMode> for Projection {
    fn from(mode: RenderMode) -> Self {
        match mode {
            RenderMode::Grid => Projection::Grid,
            RenderMode::Circular => Projection::Circular,
        }
    }
}

/// Default configuration for a `rows x cols` maze: square canvas, start in
/// the top-left cell, end in the bottom-right one.
pub fn default_config(rows: usize, cols: usize) -> MazeConfig {
    MazeConfig {
        rows,
        cols,
        canvas_width: DEFAULT_CANVAS_SIZE,
        canvas_height: DEFAULT_CANVAS_SIZE,
        start: CellPos::new(0, 0),
        end: CellPos::new(rows.saturating_sub(1), cols.saturating_sub(1)),
    }
}

/// Parse and validate a JSON maze configuration.
///
/// # Example
/// ```
/// let config = ringmaze::parse_config(r#"{
///     "rows": 3, "cols": 4,
///     "canvas_width": 400.0, "canvas_height": 300.0,
///     "start": { "row": 0, "col": 0 },
///     "end": { "row": 2, "col": 3 }
/// }"#).unwrap();
/// assert_eq!(config.cols, 4);
/// ```
pub fn parse_config(json: &str) -> Result<MazeConfig, Box<dyn std::error::Error>> {
    // Validate size (prevent parsing huge files)
    if json.len() > MAX_CONFIG_BYTES {
        return Err(format!(
            "Config is too large: {} bytes (max {})",
            json.len(),
            MAX_CONFIG_BYTES
        )
        .into());
    }

    let config: MazeConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Generate a complete maze from a configuration and seed.
///
/// # Arguments
/// * `config` - Grid size, canvas extents, start and end cells
/// * `seed` - RNG seed; the same seed always gives the same maze
///
/// # Returns
/// * `Ok(Maze)` - The carved maze with its generation statistics
/// * `Err` - If the configuration is invalid
pub fn generate_maze(config: &MazeConfig, seed: u64) -> Result<Maze, Box<dyn std::error::Error>> {
    tracing::info!(
        "Generating {}x{} maze with seed {} (start {}, end {})",
        config.rows,
        config.cols,
        seed,
        config.start,
        config.end
    );

    let maze = Maze::generate(config, seed)?;

    tracing::info!(
        "Maze generated: {} passages, max depth {} at {}",
        maze.result().passages,
        maze.result().max_depth,
        maze.result().max_depth_cell
    );
    Ok(maze)
}

/// Paint a grid as an SVG document.
///
/// Colour mode paints on black, black-and-white mode on white.
pub fn render_svg(grid: &Grid, options: &RenderOptions) -> String {
    let layout = grid.layout();
    let background = if options.black_and_white {
        Color::White
    } else {
        Color::Black
    };

    let mut canvas =
        SvgCanvas::new(layout.canvas_width, layout.canvas_height).with_background(background);
    render(grid, &mut canvas, options);
    tracing::debug!("Rendered {} SVG elements", canvas.element_count());
    canvas.finish()
}

/// Text view of the maze, two characters per block.
///
/// Walls are `##`. With `show_solution` the solution path is drawn with
/// `..` and the start/end cells as `S`/`E`.
pub fn render_ascii(grid: &Grid, show_solution: bool) -> String {
    let blocks = grid.to_binary_grid();
    let mut marks = vec![vec![None; blocks[0].len()]; blocks.len()];

    if show_solution {
        for cell in grid.cells().iter().filter(|c| c.is_part_of_solution()) {
            let gr = cell.row() * 2 + 1;
            let gc = cell.col() * 2 + 1;
            marks[gr][gc] = Some(if cell.is_start_cell() {
                "S "
            } else if cell.is_end_cell() {
                "E "
            } else {
                ".."
            });

            for edge in cell.solution_edges() {
                let (br, bc) = match edge.direction {
                    Direction::Top => (gr - 1, gc),
                    Direction::Right => (gr, gc + 1),
                    Direction::Bottom => (gr + 1, gc),
                    Direction::Left => (gr, gc - 1),
                };
                marks[br][bc] = Some("..");
            }
        }
    }

    let mut out = String::with_capacity(blocks.len() * (blocks[0].len() * 2 + 1));
    for (row, line) in blocks.iter().enumerate() {
        for (col, &block) in line.iter().enumerate() {
            let glyph = match (block, marks[row][col]) {
                (0, _) => "##",
                (_, Some(mark)) => mark,
                _ => "  ",
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}
