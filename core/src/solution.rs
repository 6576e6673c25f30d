//! Start-to-end path reconstruction on a finished maze.
//!
//! A perfect maze has exactly one simple path between any two cells. The
//! generator records it as the stack contents at the moment the end cell is
//! first visited; when that record is not available the path is found with a
//! breadth-first search over open walls. Either way the result is the same.

use std::collections::VecDeque;

use crate::config::CellPos;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::maze_gen::Maze;

/// Breadth-first search through cleared walls. Returns the cell indices from
/// `from` to `to` inclusive.
pub fn find_path(grid: &Grid, from: usize, to: usize) -> Option<Vec<usize>> {
    if from >= grid.len() || to >= grid.len() {
        return None;
    }

    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([from]);
    seen[from] = true;

    while let Some(index) = queue.pop_front() {
        if index == to {
            let mut path = vec![to];
            let mut cursor = to;
            while let Some(prev) = parent[cursor] {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }

        for next in grid.open_neighbors(index) {
            if !seen[next] {
                seen[next] = true;
                parent[next] = Some(index);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Flag every cell of `path` as part of the solution, then compute the
/// renderable edges of each flagged cell.
///
/// Edges are computed after all flags are set so both ends of every path
/// step see each other.
pub fn apply_solution(grid: &mut Grid, path: &[usize]) {
    for &index in path {
        grid.set_part_of_solution(index, true);
    }
    for &index in path {
        grid.compute_solution_edges(index);
    }
}

/// Remove solution flags and edges from every cell.
pub fn clear_solution(grid: &mut Grid) {
    for index in 0..grid.len() {
        grid.set_part_of_solution(index, false);
        grid.compute_solution_edges(index);
    }
}

/// Cells currently flagged as on the solution, in index order.
pub fn solution_cells(grid: &Grid) -> Vec<usize> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_part_of_solution())
        .map(|(index, _)| index)
        .collect()
}

impl Maze {
    /// Mark the path between the configured start and end cells.
    ///
    /// Uses the path recorded during generation, falling back to a search.
    pub fn solve(&mut self) -> Result<Vec<usize>> {
        let (start, end) = (self.grid.start(), self.grid.end());
        let path = match &self.result.recorded_path {
            Some(path) => path.clone(),
            None => find_path(&self.grid, start, end).ok_or_else(|| {
                let from = self.grid.position(start);
                let to = self.grid.position(end);
                no_path(from, to)
            })?,
        };

        clear_solution(&mut self.grid);
        apply_solution(&mut self.grid, &path);

        tracing::info!(
            "Solution marked: {} cells from {} to {}",
            path.len(),
            self.grid.position(start),
            self.grid.position(end)
        );
        Ok(path)
    }

    /// Mark the path between two arbitrary cells.
    ///
    /// Positions outside the grid are rejected before anything is changed.
    pub fn solve_between(&mut self, from: CellPos, to: CellPos) -> Result<Vec<usize>> {
        for pos in [from, to] {
            if !self.grid.contains(pos.row, pos.col) {
                return Err(MazeError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        let start = self.grid.linear_index(from.row, from.col);
        let end = self.grid.linear_index(to.row, to.col);
        let path = find_path(&self.grid, start, end).ok_or_else(|| no_path(from, to))?;

        clear_solution(&mut self.grid);
        apply_solution(&mut self.grid, &path);
        Ok(path)
    }

    pub fn clear_solution(&mut self) {
        clear_solution(&mut self.grid);
    }
}

fn no_path(from: CellPos, to: CellPos) -> MazeError {
    MazeError::NoPath {
        from_row: from.row,
        from_col: from.col,
        to_row: to.row,
        to_col: to.col,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeConfig;
    use crate::maze_gen::{GenerationResult, Maze};
    use std::collections::HashSet;

    fn config(rows: usize, cols: usize, end: CellPos) -> MazeConfig {
        MazeConfig {
            rows,
            cols,
            canvas_width: 400.0,
            canvas_height: 400.0,
            start: CellPos::new(0, 0),
            end,
        }
    }

    #[test]
    fn test_search_matches_recorded_path() {
        for seed in 0..10 {
            let maze = Maze::generate(&config(8, 6, CellPos::new(7, 5)), seed).unwrap();
            let grid = maze.grid();
            let searched = find_path(grid, grid.start(), grid.end()).unwrap();
            assert_eq!(Some(&searched), maze.result().recorded_path.as_ref());
        }
    }

    #[test]
    fn test_solution_is_simple_path() {
        let mut maze = Maze::generate(&config(10, 10, CellPos::new(9, 9)), 2024).unwrap();
        let path = maze.solve().unwrap();
        let grid = maze.grid();

        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
        assert!(path.len() - 1 <= grid.len() - 1);
        assert_eq!(solution_cells(grid).len(), path.len());

        // End cells have one edge, interior cells two
        for (i, &index) in path.iter().enumerate() {
            let edges = grid.cells()[index].solution_edges().len();
            if i == 0 || i == path.len() - 1 {
                assert_eq!(edges, 1);
            } else {
                assert_eq!(edges, 2);
            }
        }
    }

    #[test]
    fn test_solution_edges_are_idempotent() {
        let mut maze = Maze::generate(&config(6, 6, CellPos::new(5, 0)), 9).unwrap();
        let path = maze.solve().unwrap();
        let before: Vec<_> = path
            .iter()
            .map(|&i| maze.grid().cells()[i].solution_edges().to_vec())
            .collect();

        for &index in &path {
            maze.grid.compute_solution_edges(index);
        }
        let after: Vec<_> = path
            .iter()
            .map(|&i| maze.grid().cells()[i].solution_edges().to_vec())
            .collect();
        assert_eq!(before, after);

        // Solving again leaves the same picture
        assert_eq!(maze.solve().unwrap(), path);
    }

    #[test]
    fn test_falls_back_to_search_without_record() {
        let mut maze = Maze::generate(&config(5, 7, CellPos::new(2, 3)), 88).unwrap();
        let recorded = maze.result().recorded_path.clone().unwrap();
        maze.result = GenerationResult {
            recorded_path: None,
            ..maze.result.clone()
        };
        assert_eq!(maze.solve().unwrap(), recorded);
    }

    #[test]
    fn test_single_cell_solution() {
        let mut maze = Maze::generate(&config(1, 1, CellPos::new(0, 0)), 3).unwrap();
        assert_eq!(maze.solve().unwrap(), vec![0]);
        assert!(maze.grid().cells()[0].is_part_of_solution());
        assert!(maze.grid().cells()[0].solution_edges().is_empty());
    }

    #[test]
    fn test_solve_between_rejects_out_of_bounds() {
        let mut maze = Maze::generate(&config(3, 3, CellPos::new(2, 2)), 1).unwrap();
        maze.solve().unwrap();
        let flagged = solution_cells(maze.grid());

        let err = maze
            .solve_between(CellPos::new(0, 0), CellPos::new(3, 0))
            .unwrap_err();
        assert_eq!(err, MazeError::OutOfBounds { row: 3, col: 0 });
        // Nothing changed
        assert_eq!(solution_cells(maze.grid()), flagged);
    }

    #[test]
    fn test_solve_between_replaces_previous_solution() {
        let mut maze = Maze::generate(&config(4, 4, CellPos::new(3, 3)), 55).unwrap();
        maze.solve().unwrap();
        let path = maze
            .solve_between(CellPos::new(0, 3), CellPos::new(3, 0))
            .unwrap();

        let mut expected = path.clone();
        expected.sort_unstable();
        assert_eq!(solution_cells(maze.grid()), expected);

        maze.clear_solution();
        assert!(solution_cells(maze.grid()).is_empty());
        assert!(maze
            .grid()
            .cells()
            .iter()
            .all(|c| c.solution_edges().is_empty()));
    }
}
