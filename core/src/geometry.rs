//! Cell geometry in the two projections.
//!
//! Everything here is a pure function of the cell position and the
//! [`Layout`]; nothing is cached on the cells.
//!
//! Grid projection: cell (row, col) is the rectangle whose top-left corner
//! is `(col * cell_width, row * cell_height)`.
//!
//! Circular projection: row `r` is the ring between radii
//! `r * s` and `(r + 1) * s` where `s = min(cell_width, cell_height) / 2`,
//! and column `c` is the sector starting at angle `c * 2π / cols`. Points
//! are translated to the canvas centre. Corners are wound clockwise
//! TL -> TR -> BR -> BL with TL/TR on the inner radius, so the TOP wall is
//! the inner arc and the BOTTOM wall the outer arc.

use std::f64::consts::TAU;

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The four corners of a cell, wound clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Corners {
    pub fn as_array(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// A circular arc in canvas coordinates.
///
/// Angles follow the canvas convention: with y pointing down, increasing
/// angle moves clockwise on screen. `counterclockwise == false` sweeps from
/// `start_angle` towards increasing angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub counterclockwise: bool,
}

impl Arc {
    pub fn point_at(&self, angle: f64) -> Point {
        self.center
            .translate(self.radius * angle.cos(), self.radius * angle.sin())
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// Swept angle in `[0, 2π)`, measured in the arc's own direction.
    pub fn sweep(&self) -> f64 {
        let raw = if self.counterclockwise {
            self.start_angle - self.end_angle
        } else {
            self.end_angle - self.start_angle
        };
        raw.rem_euclid(TAU)
    }
}

/// How one wall of a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point, Point),
    Arc(Arc),
}

/// The two ways a maze can be laid out on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Grid,
    Circular,
}

/// Grid dimensions and canvas extents shared by every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Layout {
    /// Cells stretch to cover the whole canvas.
    pub fn new(rows: usize, cols: usize, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            rows,
            cols,
            canvas_width,
            canvas_height,
            cell_width: canvas_width / cols as f64,
            cell_height: canvas_height / rows as f64,
        }
    }

    pub fn with_cell_size(
        rows: usize,
        cols: usize,
        cell_width: f64,
        cell_height: f64,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Self {
        Self {
            rows,
            cols,
            canvas_width,
            canvas_height,
            cell_width,
            cell_height,
        }
    }

    /// Angular width of one sector.
    pub fn angle_sweep(&self) -> f64 {
        TAU / self.cols as f64
    }

    /// Radial thickness of one ring. Clamped to the smaller cell side so
    /// the rings stay on a non-square canvas.
    pub fn radial_scaling(&self) -> f64 {
        self.cell_width.min(self.cell_height) / 2.0
    }

    pub fn canvas_center(&self) -> Point {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    pub fn inner_radius(&self, row: usize) -> f64 {
        self.radial_scaling() * row as f64
    }

    pub fn outer_radius(&self, row: usize) -> f64 {
        self.inner_radius(row) + self.radial_scaling()
    }

    pub fn mid_radius(&self, row: usize) -> f64 {
        self.inner_radius(row) + self.radial_scaling() / 2.0
    }

    pub fn start_angle(&self, col: usize) -> f64 {
        self.angle_sweep() * col as f64
    }

    pub fn end_angle(&self, col: usize) -> f64 {
        self.start_angle(col) + self.angle_sweep()
    }

    pub fn mid_angle(&self, col: usize) -> f64 {
        self.start_angle(col) + self.angle_sweep() / 2.0
    }

    /// Polar (radius, angle) to canvas coordinates.
    pub fn polar_point(&self, radius: f64, angle: f64) -> Point {
        let c = self.canvas_center();
        Point::new(c.x + radius * angle.cos(), c.y + radius * angle.sin())
    }

    /// Arc around the canvas centre.
    pub fn ring_arc(
        &self,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) -> Arc {
        Arc {
            center: self.canvas_center(),
            radius,
            start_angle,
            end_angle,
            counterclockwise,
        }
    }
}

pub fn cartesian_corners(layout: &Layout, row: usize, col: usize) -> Corners {
    let top_left = Point::new(
        col as f64 * layout.cell_width,
        row as f64 * layout.cell_height,
    );
    let top_right = top_left.translate(layout.cell_width, 0.0);
    let bottom_right = top_right.translate(0.0, layout.cell_height);
    let bottom_left = top_left.translate(0.0, layout.cell_height);

    Corners {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    }
}

pub fn cartesian_center(layout: &Layout, row: usize, col: usize) -> Point {
    cartesian_corners(layout, row, col)
        .top_left
        .translate(layout.cell_width / 2.0, layout.cell_height / 2.0)
}

pub fn polar_corners(layout: &Layout, row: usize, col: usize) -> Corners {
    let inner = layout.inner_radius(row);
    let outer = layout.outer_radius(row);
    let start = layout.start_angle(col);
    let end = layout.end_angle(col);

    Corners {
        top_left: layout.polar_point(inner, start),
        top_right: layout.polar_point(inner, end),
        bottom_right: layout.polar_point(outer, end),
        bottom_left: layout.polar_point(outer, start),
    }
}

pub fn polar_center(layout: &Layout, row: usize, col: usize) -> Point {
    layout.polar_point(layout.mid_radius(row), layout.mid_angle(col))
}

pub fn center(layout: &Layout, row: usize, col: usize, projection: Projection) -> Point {
    match projection {
        Projection::Grid => cartesian_center(layout, row, col),
        Projection::Circular => polar_center(layout, row, col),
    }
}

/// The drawable shape of one wall.
pub fn wall_segment(
    layout: &Layout,
    row: usize,
    col: usize,
    dir: Direction,
    projection: Projection,
) -> Segment {
    match projection {
        Projection::Grid => {
            let c = cartesian_corners(layout, row, col);
            match dir {
                Direction::Top => Segment::Line(c.top_left, c.top_right),
                Direction::Right => Segment::Line(c.top_right, c.bottom_right),
                Direction::Bottom => Segment::Line(c.bottom_right, c.bottom_left),
                Direction::Left => Segment::Line(c.bottom_left, c.top_left),
            }
        }
        Projection::Circular => {
            let start = layout.start_angle(col);
            let end = layout.end_angle(col);
            match dir {
                Direction::Top => {
                    Segment::Arc(layout.ring_arc(layout.inner_radius(row), start, end, false))
                }
                Direction::Bottom => {
                    Segment::Arc(layout.ring_arc(layout.outer_radius(row), start, end, false))
                }
                Direction::Right => {
                    let c = polar_corners(layout, row, col);
                    Segment::Line(c.top_right, c.bottom_right)
                }
                Direction::Left => {
                    let c = polar_corners(layout, row, col);
                    Segment::Line(c.bottom_left, c.top_left)
                }
            }
        }
    }
}
