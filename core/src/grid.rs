//! Fixed-size table of cells.
//!
//! Cells are stored row-major and addressed by the linear index
//! `row * cols + col`. Out-of-range lookups return `None`; hitting the
//! boundary is normal during neighbour searches.

use crate::cell::{Cell, CellRole};
use crate::config::{CellPos, MazeConfig};
use crate::direction::Direction;
use crate::error::Result;
use crate::geometry::Layout;

#[derive(Debug, Clone)]
pub struct Grid {
    layout: Layout,
    cells: Vec<Cell>,
    start: usize,
    end: usize,
}

impl Grid {
    /// Build a fresh grid with every wall standing and nothing visited.
    ///
    /// The configuration is validated first, so an invalid request never
    /// produces a partially initialised grid.
    pub fn new(config: &MazeConfig) -> Result<Self> {
        config.validate()?;

        let layout = Layout::new(
            config.rows,
            config.cols,
            config.canvas_width,
            config.canvas_height,
        );

        let mut cells = Vec::with_capacity(config.cell_count());
        for row in 0..config.rows {
            for col in 0..config.cols {
                let pos = CellPos::new(row, col);
                let role = if pos == config.start {
                    CellRole::Start
                } else if pos == config.end {
                    CellRole::End
                } else {
                    CellRole::Plain
                };
                cells.push(Cell::new(row, col, role));
            }
        }

        Ok(Self {
            layout,
            start: config.start.row * config.cols + config.start.col,
            end: config.end.row * config.cols + config.end.col,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Linear index of the start cell.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Linear index of the end cell.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn linear_index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    pub fn position(&self, index: usize) -> CellPos {
        CellPos::new(index / self.cols(), index % self.cols())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// The cell at (row, col), or `None` outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.contains(row, col) {
            self.cells.get(self.linear_index(row, col))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Linear index of the neighbour of (row, col) in `dir`, if it exists.
    pub fn neighbor_index(&self, row: usize, col: usize, dir: Direction) -> Option<usize> {
        let (dr, dc) = dir.offset();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        self.contains(nr, nc).then(|| self.linear_index(nr, nc))
    }

    pub fn neighbor(&self, index: usize, dir: Direction) -> Option<usize> {
        let pos = self.position(index);
        self.neighbor_index(pos.row, pos.col, dir)
    }

    pub(crate) fn unvisited_neighbors(&self, index: usize) -> Vec<(Direction, usize)> {
        self.cells[index].neighbors(self)
    }

    /// Neighbours reachable through a cleared wall.
    pub(crate) fn open_neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let walls = self.cells[index].walls();
        Direction::ALL
            .into_iter()
            .filter(move |&dir| walls.is_open(dir))
            .filter_map(move |dir| self.neighbor(index, dir))
    }

    /// Open a passage from `index` towards `dir`.
    ///
    /// Both this cell's wall and the neighbour's opposite wall are cleared,
    /// or neither is when `index` is outside the grid or there is no
    /// neighbour in that direction.
    pub fn carve(&mut self, index: usize, dir: Direction) -> bool {
        if index >= self.cells.len() {
            return false;
        }
        let Some(next) = self.neighbor(index, dir) else {
            return false;
        };
        self.cells[index].clear_wall(dir);
        self.cells[next].clear_wall(dir.opposite());
        true
    }

    pub(crate) fn mark_visited(&mut self, index: usize, depth: usize) -> bool {
        self.cells[index].mark_visited(depth)
    }

    pub(crate) fn set_part_of_solution(&mut self, index: usize, on_path: bool) {
        self.cells[index].is_part_of_solution = on_path;
    }

    /// Recompute the solution edges of one cell from its neighbours' current
    /// solution flags. The previous edges are replaced.
    pub(crate) fn compute_solution_edges(&mut self, index: usize) {
        let edges = self.cells[index].compute_solution_edges(self);
        self.cells[index].solution_edges = edges;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited()).count()
    }

    /// Number of carved passages. Each passage clears one wall on each side.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.walls().open_count())
            .sum::<usize>()
            / 2
    }

    /// Block view of the maze: `(rows*2 + 1) x (cols*2 + 1)` where
    /// 0 = wall and 1 = open.
    ///
    /// Cell (row, col) sits at `(row*2 + 1, col*2 + 1)`; the blocks between
    /// two cell centres are open when the wall between them is cleared.
    pub fn to_binary_grid(&self) -> Vec<Vec<u8>> {
        let height = self.rows() * 2 + 1;
        let width = self.cols() * 2 + 1;
        let mut grid = vec![vec![0u8; width]; height];

        for cell in &self.cells {
            let gr = cell.row() * 2 + 1;
            let gc = cell.col() * 2 + 1;

            grid[gr][gc] = 1;

            let walls = cell.walls();
            if walls.is_open(Direction::Top) {
                grid[gr - 1][gc] = 1;
            }
            if walls.is_open(Direction::Bottom) {
                grid[gr + 1][gc] = 1;
            }
            if walls.is_open(Direction::Right) {
                grid[gr][gc + 1] = 1;
            }
            if walls.is_open(Direction::Left) {
                grid[gr][gc - 1] = 1;
            }
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    fn config(rows: usize, cols: usize) -> MazeConfig {
        MazeConfig {
            rows,
            cols,
            canvas_width: 600.0,
            canvas_height: 400.0,
            start: CellPos::new(0, 0),
            end: CellPos::new(rows - 1, cols - 1),
        }
    }

    #[test]
    fn test_new_grid_is_closed_and_unvisited() {
        let grid = Grid::new(&config(4, 6)).unwrap();
        assert_eq!(grid.len(), 24);
        assert!(grid.cells().iter().all(|c| !c.visited()));
        assert_eq!(grid.passage_count(), 0);
        assert_eq!(grid.cells()[grid.start()].role(), CellRole::Start);
        assert_eq!(grid.cells()[grid.end()].role(), CellRole::End);
        assert_eq!(
            grid.cells()
                .iter()
                .filter(|c| c.role() == CellRole::Plain)
                .count(),
            22
        );
        assert_eq!(grid.position(grid.end()), CellPos::new(3, 5));
    }

    #[test]
    fn test_linear_index_round_trips_position() {
        let grid = Grid::new(&config(3, 5)).unwrap();
        for index in 0..grid.len() {
            let pos = grid.position(index);
            assert_eq!(grid.linear_index(pos.row, pos.col), index);
            let cell = grid.cell_at(pos.row, pos.col).unwrap();
            assert_eq!((cell.row(), cell.col()), (pos.row, pos.col));
        }
    }

    #[test]
    fn test_cell_at_out_of_range_is_none() {
        let grid = Grid::new(&config(3, 5)).unwrap();
        assert!(grid.cell_at(3, 0).is_none());
        assert!(grid.cell_at(0, 5).is_none());
        assert!(grid.cell_at(usize::MAX, usize::MAX).is_none());
        assert!(grid.neighbor_index(0, 0, Direction::Top).is_none());
        assert!(grid.neighbor_index(0, 0, Direction::Left).is_none());
        assert!(grid.neighbor_index(2, 4, Direction::Bottom).is_none());
        assert!(grid.neighbor_index(2, 4, Direction::Right).is_none());
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let mut bad = config(3, 3);
        bad.end = CellPos::new(5, 5);
        assert!(matches!(
            Grid::new(&bad),
            Err(MazeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_start_equal_to_end_takes_start_role() {
        let mut c = config(1, 1);
        c.end = c.start;
        let grid = Grid::new(&c).unwrap();
        assert!(grid.cells()[0].is_start_cell());
        assert!(!grid.cells()[0].is_end_cell());
    }

    #[test]
    fn test_carve_outside_grid_is_rejected() {
        let mut grid = Grid::new(&config(2, 2)).unwrap();
        assert!(!grid.carve(grid.len(), Direction::Top));
        assert!(!grid.carve(usize::MAX, Direction::Left));
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.get(grid.len()).is_none());
    }

    #[test]
    fn test_carve_is_symmetric() {
        let mut grid = Grid::new(&config(2, 2)).unwrap();
        assert!(grid.carve(0, Direction::Right));
        assert!(grid.cells()[0].walls().is_open(Direction::Right));
        assert!(grid.cells()[1].walls().is_open(Direction::Left));
        assert_eq!(grid.passage_count(), 1);
        assert_eq!(grid.open_neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(grid.open_neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_carve_into_boundary_changes_nothing() {
        let mut grid = Grid::new(&config(2, 2)).unwrap();
        assert!(!grid.carve(0, Direction::Top));
        assert!(!grid.carve(0, Direction::Left));
        assert_eq!(grid.cells()[0].walls().open_count(), 0);
    }

    #[test]
    fn test_binary_grid_size_and_passages() {
        let mut grid = Grid::new(&config(2, 3)).unwrap();
        grid.carve(0, Direction::Right);
        grid.carve(0, Direction::Bottom);
        let blocks = grid.to_binary_grid();

        assert_eq!(blocks.len(), 5);
        assert!(blocks.iter().all(|row| row.len() == 7));
        // Outer frame stays solid
        assert!(blocks[0].iter().all(|&b| b == 0));
        assert!(blocks[4].iter().all(|&b| b == 0));
        assert_eq!(blocks[1][1], 1);
        assert_eq!(blocks[1][2], 1);
        assert_eq!(blocks[2][1], 1);
        assert_eq!(blocks[1][4], 0);
    }
}
