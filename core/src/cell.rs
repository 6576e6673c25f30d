//! A single maze cell.
//!
//! A cell tracks its walls, whether the generator has visited it, the stack
//! depth at that first visit, and whether it lies on the solution path. Its
//! geometry is derived from the grid [`Layout`] on demand.

use crate::direction::{Direction, Walls};
use crate::geometry::{self, Corners, Layout, Point, Projection, Segment};
use crate::grid::Grid;

/// Start and end are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellRole {
    #[default]
    Plain,
    Start,
    End,
}

/// Renderable piece of the solution line inside one cell: from the cell
/// centre to the boundary shared with a solution neighbour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionEdge {
    /// Side of this cell the neighbour lies on
    pub direction: Direction,
    /// Straight line from the cell centre to the wall midpoint
    pub cartesian: Segment,
    /// Radial line for TOP/BOTTOM, arc along the mid radius for RIGHT/LEFT
    pub polar: Segment,
}

impl SolutionEdge {
    pub fn segment(&self, projection: Projection) -> Segment {
        match projection {
            Projection::Grid => self.cartesian,
            Projection::Circular => self.polar,
        }
    }

    /// The end of the edge on the shared boundary.
    pub fn endpoint(&self, projection: Projection) -> Point {
        match self.segment(projection) {
            Segment::Line(_, to) => to,
            // Arcs start on the sector boundary and sweep back to the centre angle
            Segment::Arc(arc) => arc.start_point(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) walls: Walls,
    pub(crate) visited: bool,
    role: CellRole,
    pub(crate) is_part_of_solution: bool,
    pub(crate) stack_depth_at_visit: usize,
    pub(crate) solution_edges: Vec<SolutionEdge>,
}

impl Cell {
    pub fn new(row: usize, col: usize, role: CellRole) -> Self {
        Self {
            row,
            col,
            walls: Walls::closed(),
            visited: false,
            role,
            is_part_of_solution: false,
            stack_depth_at_visit: 0,
            solution_edges: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn role(&self) -> CellRole {
        self.role
    }

    pub fn is_start_cell(&self) -> bool {
        self.role == CellRole::Start
    }

    pub fn is_end_cell(&self) -> bool {
        self.role == CellRole::End
    }

    pub fn is_part_of_solution(&self) -> bool {
        self.is_part_of_solution
    }

    pub fn stack_depth_at_visit(&self) -> usize {
        self.stack_depth_at_visit
    }

    pub fn solution_edges(&self) -> &[SolutionEdge] {
        &self.solution_edges
    }

    /// Unvisited in-bounds neighbours, evaluated TOP, RIGHT, BOTTOM, LEFT.
    ///
    /// Returns `(direction, linear index)` pairs. Picking one is left to the
    /// caller.
    pub fn neighbors(&self, grid: &Grid) -> Vec<(Direction, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                grid.neighbor_index(self.row, self.col, dir)
                    .map(|index| (dir, index))
            })
            .filter(|&(_, index)| !grid.cells()[index].visited)
            .collect()
    }

    /// Record the first visit. Later calls leave the cell untouched and
    /// return `false`.
    pub fn mark_visited(&mut self, depth: usize) -> bool {
        if self.visited {
            return false;
        }
        self.visited = true;
        self.stack_depth_at_visit = depth;
        true
    }

    /// Clears only this side. Use [`Grid::carve`] to keep both cells in sync.
    pub(crate) fn clear_wall(&mut self, dir: Direction) {
        self.walls.clear(dir);
    }

    pub fn cartesian_corners(&self, layout: &Layout) -> Corners {
        geometry::cartesian_corners(layout, self.row, self.col)
    }

    pub fn polar_corners(&self, layout: &Layout) -> Corners {
        geometry::polar_corners(layout, self.row, self.col)
    }

    pub fn cartesian_center(&self, layout: &Layout) -> Point {
        geometry::cartesian_center(layout, self.row, self.col)
    }

    pub fn polar_center(&self, layout: &Layout) -> Point {
        geometry::polar_center(layout, self.row, self.col)
    }

    pub fn center(&self, layout: &Layout, projection: Projection) -> Point {
        geometry::center(layout, self.row, self.col, projection)
    }

    pub fn wall_segment(&self, layout: &Layout, dir: Direction, projection: Projection) -> Segment {
        geometry::wall_segment(layout, self.row, self.col, dir, projection)
    }

    /// Solution edges for this cell given the current solution flags of its
    /// neighbours. One edge per open side whose neighbour is on the path.
    pub fn compute_solution_edges(&self, grid: &Grid) -> Vec<SolutionEdge> {
        let layout = grid.layout();
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.walls.is_open(dir))
            .filter(|&dir| {
                grid.neighbor_index(self.row, self.col, dir)
                    .is_some_and(|index| grid.cells()[index].is_part_of_solution)
            })
            .map(|dir| self.solution_edge(layout, dir))
            .collect()
    }

    fn solution_edge(&self, layout: &Layout, dir: Direction) -> SolutionEdge {
        let corners = self.cartesian_corners(layout);
        let half_w = layout.cell_width / 2.0;
        let half_h = layout.cell_height / 2.0;
        let cartesian_end = match dir {
            Direction::Top => corners.top_left.translate(half_w, 0.0),
            Direction::Right => corners.top_right.translate(0.0, half_h),
            Direction::Bottom => corners.bottom_left.translate(half_w, 0.0),
            Direction::Left => corners.bottom_left.translate(0.0, -half_h),
        };

        let polar_center = self.polar_center(layout);
        let mid_angle = layout.mid_angle(self.col);
        let polar = match dir {
            Direction::Top => Segment::Line(
                polar_center,
                layout.polar_point(layout.inner_radius(self.row), mid_angle),
            ),
            Direction::Bottom => Segment::Line(
                polar_center,
                layout.polar_point(layout.outer_radius(self.row), mid_angle),
            ),
            // The right neighbour sits at larger angles: sweep back from the
            // sector end to the centre angle.
            Direction::Right => Segment::Arc(layout.ring_arc(
                layout.mid_radius(self.row),
                layout.end_angle(self.col),
                mid_angle,
                true,
            )),
            Direction::Left => Segment::Arc(layout.ring_arc(
                layout.mid_radius(self.row),
                layout.start_angle(self.col),
                mid_angle,
                false,
            )),
        };

        SolutionEdge {
            direction: dir,
            cartesian: Segment::Line(self.cartesian_center(layout), cartesian_end),
            polar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellPos, MazeConfig};

    fn grid(rows: usize, cols: usize) -> Grid {
        Grid::new(&MazeConfig {
            rows,
            cols,
            canvas_width: cols as f64 * 100.0,
            canvas_height: rows as f64 * 100.0,
            start: CellPos::new(0, 0),
            end: CellPos::new(rows - 1, cols - 1),
        })
        .unwrap()
    }

    #[test]
    fn test_mark_visited_only_once() {
        let mut cell = Cell::new(0, 0, CellRole::Plain);
        assert!(cell.mark_visited(3));
        assert!(!cell.mark_visited(7));
        assert!(cell.visited());
        assert_eq!(cell.stack_depth_at_visit(), 3);
    }

    #[test]
    fn test_neighbors_order_and_bounds() {
        let g = grid(3, 3);
        let centre = &g.cells()[g.linear_index(1, 1)];
        let dirs: Vec<Direction> = centre.neighbors(&g).into_iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());

        let corner = &g.cells()[g.linear_index(0, 0)];
        let found = corner.neighbors(&g);
        assert_eq!(
            found,
            vec![
                (Direction::Right, g.linear_index(0, 1)),
                (Direction::Bottom, g.linear_index(1, 0)),
            ]
        );
    }

    #[test]
    fn test_neighbors_skip_visited() {
        let mut g = grid(2, 2);
        g.mark_visited(g.linear_index(0, 1), 1);
        let corner = &g.cells()[g.linear_index(0, 0)];
        assert_eq!(
            corner.neighbors(&g),
            vec![(Direction::Bottom, g.linear_index(1, 0))]
        );
    }

    #[test]
    fn test_no_wrap_between_first_and_last_column() {
        let g = grid(2, 4);
        let first = &g.cells()[g.linear_index(1, 0)];
        assert!(first
            .neighbors(&g)
            .iter()
            .all(|&(_, index)| index != g.linear_index(1, 3)));
    }

    #[test]
    fn test_solution_edges_need_open_wall_and_solution_neighbour() {
        let mut g = grid(1, 3);
        let left = g.linear_index(0, 0);
        let mid = g.linear_index(0, 1);
        let right = g.linear_index(0, 2);
        g.carve(left, Direction::Right);
        g.carve(mid, Direction::Right);

        g.set_part_of_solution(left, true);
        g.set_part_of_solution(mid, true);

        let edges = g.cells()[mid].compute_solution_edges(&g);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].direction, Direction::Left);

        g.set_part_of_solution(right, true);
        let edges = g.cells()[mid].compute_solution_edges(&g);
        let dirs: Vec<_> = edges.iter().map(|e| e.direction).collect();
        assert_eq!(dirs, vec![Direction::Right, Direction::Left]);
    }

    #[test]
    fn test_cartesian_solution_endpoints_are_wall_midpoints() {
        let mut g = grid(3, 3);
        let centre = g.linear_index(1, 1);
        for dir in Direction::ALL {
            g.carve(centre, dir);
        }
        for index in 0..g.len() {
            g.set_part_of_solution(index, true);
        }

        let edges = g.cells()[centre].compute_solution_edges(&g);
        let ends: Vec<Point> = edges.iter().map(|e| e.endpoint(Projection::Grid)).collect();
        assert_eq!(
            ends,
            vec![
                Point::new(150.0, 100.0),
                Point::new(200.0, 150.0),
                Point::new(150.0, 200.0),
                Point::new(100.0, 150.0),
            ]
        );
        for edge in &edges {
            match edge.cartesian {
                Segment::Line(from, _) => assert_eq!(from, Point::new(150.0, 150.0)),
                Segment::Arc(_) => panic!("grid solution edges are straight"),
            }
        }
    }

    #[test]
    fn test_polar_solution_arc_directions() {
        let mut g = grid(2, 4);
        let cell = g.linear_index(1, 1);
        g.carve(cell, Direction::Right);
        g.carve(cell, Direction::Left);
        g.carve(cell, Direction::Top);
        for index in 0..g.len() {
            g.set_part_of_solution(index, true);
        }

        let layout = *g.layout();
        let edges = g.cells()[cell].compute_solution_edges(&g);
        for edge in edges {
            match (edge.direction, edge.polar) {
                (Direction::Right, Segment::Arc(arc)) => {
                    assert!(arc.counterclockwise);
                    assert!((arc.start_angle - layout.end_angle(1)).abs() < 1e-9);
                    assert!((arc.end_angle - layout.mid_angle(1)).abs() < 1e-9);
                }
                (Direction::Left, Segment::Arc(arc)) => {
                    assert!(!arc.counterclockwise);
                    assert!((arc.start_angle - layout.start_angle(1)).abs() < 1e-9);
                    assert!((arc.end_angle - layout.mid_angle(1)).abs() < 1e-9);
                }
                (Direction::Top, Segment::Line(from, to)) => {
                    let c = layout.canvas_center();
                    assert!(from.distance(c) > to.distance(c));
                    assert!((to.distance(c) - layout.inner_radius(1)).abs() < 1e-9);
                }
                other => panic!("unexpected polar edge {:?}", other),
            }
        }
    }
}
