//! Maze generation using the Recursive Backtracker algorithm
//!
//! Algorithm: Recursive Backtracker (DFS with an explicit stack)
//! 1. Push the start cell, mark it visited with depth 0
//! 2. While the stack is not empty:
//!    - Look at the unvisited neighbours of the cell on top of the stack
//!    - If neighbours exist:
//!      * Choose one uniformly at random
//!      * Remove the wall between the two cells
//!      * Mark the neighbour visited with the current stack length, push it
//!    - Else: backtrack (pop)
//!
//! The generator advances one iteration per [`Generator::step`] so an
//! animation driver can paint between steps. [`Generator::run_to_completion`]
//! drives it to the end in one call.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{CellPos, MazeConfig};
use crate::error::{MazeError, Result};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Nothing visited yet
    Idle,
    /// Stack is non-empty
    Running,
    /// Stack drained, every reachable cell visited
    Completed,
}

/// Statistics of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Deepest stack length recorded at a first visit
    pub max_depth: usize,
    /// First cell to reach `max_depth`
    pub max_depth_cell: CellPos,
    pub visited: usize,
    /// Carved passages; `visited - 1` for a perfect maze
    pub passages: usize,
    /// Calls to `step` that changed state (carves, backtracks, the initial push)
    pub steps: usize,
    /// Stack contents (start..=end) at the moment the end cell was visited
    pub recorded_path: Option<Vec<usize>>,
}

#[derive(Debug)]
pub struct Generator<R = StdRng> {
    grid: Grid,
    rng: R,
    stack: Vec<usize>,
    state: GeneratorState,
    max_depth: usize,
    max_depth_cell: usize,
    steps: usize,
    recorded_path: Option<Vec<usize>>,
}

impl Generator<StdRng> {
    /// Reproducible generator: the same seed and grid size give the same maze.
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self::new(grid, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(grid: Grid, rng: R) -> Self {
        let start = grid.start();
        Self {
            stack: Vec::with_capacity(grid.len()),
            grid,
            rng,
            state: GeneratorState::Idle,
            max_depth: 0,
            max_depth_cell: start,
            steps: 0,
            recorded_path: None,
        }
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Read-only view for painting between steps.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current DFS descent, start cell first.
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// The cell being carved from, if running.
    pub fn current(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    /// Advance the algorithm by one iteration.
    ///
    /// Stepping a completed generator does nothing and returns `Completed`.
    pub fn step(&mut self) -> GeneratorState {
        match self.state {
            GeneratorState::Idle => self.begin(),
            GeneratorState::Running => self.advance(),
            GeneratorState::Completed => {}
        }
        self.state
    }

    /// Step until completion and return the run statistics.
    pub fn run_to_completion(&mut self) -> GenerationResult {
        while self.step() != GeneratorState::Completed {}
        self.snapshot()
    }

    /// Statistics so far. Meaningful once `Completed`.
    pub fn result(&self) -> Option<GenerationResult> {
        (self.state == GeneratorState::Completed).then(|| self.snapshot())
    }

    /// Hand over the finished grid.
    pub fn into_maze(self) -> Result<Maze> {
        if self.state != GeneratorState::Completed {
            return Err(MazeError::NotCompleted);
        }
        let result = self.snapshot();
        Ok(Maze {
            grid: self.grid,
            result,
        })
    }

    fn begin(&mut self) {
        let start = self.grid.start();
        self.grid.mark_visited(start, 0);
        self.stack.push(start);
        self.max_depth = 0;
        self.max_depth_cell = start;
        self.steps += 1;

        if start == self.grid.end() {
            self.recorded_path = Some(vec![start]);
        }

        tracing::debug!(
            "Generation started at {} on a {}x{} grid",
            self.grid.position(start),
            self.grid.rows(),
            self.grid.cols()
        );
        self.state = GeneratorState::Running;
    }

    fn advance(&mut self) {
        let Some(&current) = self.stack.last() else {
            self.state = GeneratorState::Completed;
            return;
        };
        self.steps += 1;

        let neighbors = self.grid.unvisited_neighbors(current);
        match neighbors.choose(&mut self.rng).copied() {
            Some((dir, next)) => {
                self.grid.carve(current, dir);

                // Depth of the new cell in the DFS tree
                let depth = self.stack.len();
                self.grid.mark_visited(next, depth);
                self.stack.push(next);
                self.record_depth(next, depth);

                if next == self.grid.end() {
                    self.recorded_path = Some(self.stack.clone());
                }

                tracing::trace!(
                    "Carved {} from {} to {} (depth {})",
                    dir,
                    self.grid.position(current),
                    self.grid.position(next),
                    depth
                );
            }
            None => {
                self.stack.pop();
                if self.stack.is_empty() {
                    self.state = GeneratorState::Completed;
                    tracing::info!(
                        "Maze generation completed: {} cells, {} passages, max depth {} at {}",
                        self.grid.visited_count(),
                        self.grid.passage_count(),
                        self.max_depth,
                        self.grid.position(self.max_depth_cell)
                    );
                }
            }
        }
    }

    /// Strictly greater depths take the record; ties keep the earlier cell.
    fn record_depth(&mut self, index: usize, depth: usize) {
        if depth > self.max_depth {
            self.max_depth = depth;
            self.max_depth_cell = index;
            tracing::debug!(
                "Cell {} [{}] has highest stack at depth {}",
                self.grid.position(index),
                index,
                depth
            );
        }
    }

    fn snapshot(&self) -> GenerationResult {
        GenerationResult {
            max_depth: self.max_depth,
            max_depth_cell: self.grid.position(self.max_depth_cell),
            visited: self.grid.visited_count(),
            passages: self.grid.passage_count(),
            steps: self.steps,
            recorded_path: self.recorded_path.clone(),
        }
    }
}

/// A completed maze: the carved grid plus the statistics of its run.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) grid: Grid,
    pub(crate) result: GenerationResult,
}

impl Maze {
    /// Build a grid from `config` and carve it completely.
    ///
    /// # Arguments
    /// * `config` - Grid size, canvas extents, start and end cells
    /// * `seed` - RNG seed; the same seed reproduces the same maze
    ///
    /// # Returns
    /// The maze, or `InvalidConfiguration` before anything is generated
    pub fn generate(config: &MazeConfig, seed: u64) -> Result<Self> {
        let grid = Grid::new(config)?;
        let mut generator = Generator::seeded(grid, seed);
        generator.run_to_completion();
        generator.into_maze()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn to_binary_grid(&self) -> Vec<Vec<u8>> {
        self.grid.to_binary_grid()
    }
}
