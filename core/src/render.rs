//! Painting a grid onto an abstract canvas.
//!
//! The core does not draw anything itself. A drawing backend implements
//! [`Canvas`] and [`render`] walks the cells and issues the draw calls for
//! the chosen projection and options.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::geometry::{Arc, Layout, Point, Projection, Segment};
use crate::grid::Grid;

pub const WALL_WIDTH: f64 = 2.0;
pub const SOLUTION_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 5.0;
pub const DEPTH_FONT_SIZE: f64 = 16.0;
/// On/off lengths for dashed strokes in black-and-white mode
pub const DASH_PATTERN: [f64; 2] = [5.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    pub fn css_name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }
}

/// Drawing backend.
pub trait Canvas {
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    fn arc(&mut self, arc: &Arc, stroke: &Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    fn text(&mut self, at: Point, text: &str, size: f64, color: Color);

    fn segment(&mut self, segment: &Segment, stroke: &Stroke) {
        match segment {
            Segment::Line(from, to) => self.line(*from, *to, stroke),
            Segment::Arc(arc) => self.arc(arc, stroke),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub projection: Projection,
    pub black_and_white: bool,
    pub show_solution: bool,
    pub show_depths: bool,
}

impl RenderOptions {
    fn wall_stroke(&self) -> Stroke {
        let color = match (self.black_and_white, self.projection) {
            (true, _) => Color::Black,
            (false, Projection::Grid) => Color::Red,
            (false, Projection::Circular) => Color::Green,
        };
        Stroke::solid(color, WALL_WIDTH)
    }

    fn solution_stroke(&self) -> Stroke {
        if self.black_and_white {
            Stroke {
                color: Color::Black,
                width: SOLUTION_WIDTH,
                dash: Some(DASH_PATTERN),
            }
        } else {
            Stroke::solid(Color::Yellow, SOLUTION_WIDTH)
        }
    }

    fn marker_color(&self, cell: &Cell) -> Color {
        if self.black_and_white {
            Color::Black
        } else if cell.is_start_cell() {
            Color::Blue
        } else {
            Color::Red
        }
    }

    fn text_color(&self) -> Color {
        if self.black_and_white {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// Paint every cell of `grid`.
pub fn render<C: Canvas + ?Sized>(grid: &Grid, canvas: &mut C, options: &RenderOptions) {
    let layout = grid.layout();
    for cell in grid.cells() {
        render_cell(cell, layout, canvas, options);
    }
}

/// Paint a frame of an in-progress generation, marking the cell currently
/// on top of the stack.
pub fn render_frame<C: Canvas + ?Sized>(
    grid: &Grid,
    current: Option<usize>,
    canvas: &mut C,
    options: &RenderOptions,
) {
    render(grid, canvas, options);

    if let Some(cell) = current.and_then(|index| grid.get(index)) {
        let color = if options.black_and_white {
            Color::Black
        } else {
            Color::Magenta
        };
        canvas.fill_circle(
            cell.center(grid.layout(), options.projection),
            MARKER_RADIUS,
            color,
        );
    }
}

fn render_cell<C: Canvas + ?Sized>(
    cell: &Cell,
    layout: &Layout,
    canvas: &mut C,
    options: &RenderOptions,
) {
    let wall_stroke = options.wall_stroke();
    for dir in Direction::ALL {
        if !cell.walls().is_open(dir) {
            canvas.segment(&cell.wall_segment(layout, dir, options.projection), &wall_stroke);
        }
    }

    if options.show_solution {
        if cell.is_part_of_solution() {
            let stroke = options.solution_stroke();
            for edge in cell.solution_edges() {
                canvas.segment(&edge.segment(options.projection), &stroke);
            }
        }

        if cell.is_start_cell() || cell.is_end_cell() {
            canvas.fill_circle(
                cell.center(layout, options.projection),
                MARKER_RADIUS,
                options.marker_color(cell),
            );
        }
    }

    if options.show_depths && cell.visited() {
        canvas.text(
            cell.center(layout, options.projection),
            &cell.stack_depth_at_visit().to_string(),
            DEPTH_FONT_SIZE,
            options.text_color(),
        );
    }
}
