pub mod cell;
pub mod grid;

use std::sync::mpsc::Sender;

pub use cell::Cell;
pub use grid::{Grid, MazeEvent};

use crate::error::MazeError;
use crate::generators::{self, Strategy};
use crate::solvers::{self, SolveOutcome};

/// A `(column, row)` grid coordinate. Columns grow rightward, rows grow
/// downward.
pub type Coord = (u16, u16);

/// The four cardinal directions. `Up` faces a cell's top wall and `Down`
/// its bottom wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the fixed order the solver probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The coordinate one step away, without bounds checking.
    ///
    /// Underflow wraps to `u16::MAX` and overflow saturates at
    /// `u16::MAX`. Either way the result fails the grid bounds test,
    /// because no in-bounds index can exceed `u16::MAX - 1`.
    pub fn step(self, (col, row): Coord) -> Coord {
        match self {
            Direction::Left => (col.wrapping_sub(1), row),
            Direction::Right => (col.saturating_add(1), row),
            Direction::Up => (col, row.wrapping_sub(1)),
            Direction::Down => (col, row.saturating_add(1)),
        }
    }
}

/// A maze over an exclusively owned [`Grid`].
///
/// Lifecycle: construct, [`generate`](Maze::generate) once, then
/// [`solve`](Maze::solve). The entrance is fixed at (0, 0) with its top
/// wall opened and the exit at (last col, last row) with its bottom wall
/// opened.
pub struct Maze {
    grid: Grid,
    seed: Option<u64>,
}

impl Maze {
    /// Creates a maze over a fresh all-walls-closed grid. `seed` makes
    /// generation (and therefore the solve path) reproducible; `None`
    /// draws fresh randomness each run. `events` is the optional
    /// observer channel; the core never depends on a consumer existing.
    pub fn new(
        num_rows: u16,
        num_cols: u16,
        seed: Option<u64>,
        events: Option<Sender<MazeEvent>>,
    ) -> Self {
        Maze {
            grid: Grid::new(num_rows, num_cols, events),
            seed,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// The exit cell. `None` for a degenerate grid.
    pub fn exit(&self) -> Option<Coord> {
        if self.grid.is_empty() {
            return None;
        }
        Some((self.grid.num_cols() - 1, self.grid.num_rows() - 1))
    }

    /// Carves a perfect maze: a spanning tree of passages with exactly
    /// one simple path between any two cells, then opens the entrance and
    /// exit and resets all visited flags. A grid with a zero dimension is
    /// left untouched.
    pub fn generate(&mut self) -> Result<(), MazeError> {
        if self.grid.is_empty() {
            tracing::warn!(
                num_rows = self.grid.num_rows(),
                num_cols = self.grid.num_cols(),
                "degenerate grid, skipping carving"
            );
            return Ok(());
        }

        let strategy = Strategy::for_grid(&self.grid);
        tracing::info!(
            num_rows = self.grid.num_rows(),
            num_cols = self.grid.num_cols(),
            %strategy,
            seed = ?self.seed,
            "generating maze"
        );
        generators::carve(&mut self.grid, strategy, self.seed)?;

        self.grid.open_side(self.entrance(), Direction::Up);
        if let Some(exit) = self.exit() {
            self.grid.open_side(exit, Direction::Down);
        }

        self.grid.reset_visited();
        self.grid.emit(MazeEvent::GenerationDone);
        tracing::info!("generation done");
        Ok(())
    }

    /// Finds the unique simple path from entrance to exit along carved
    /// passages. "No path" is a normal outcome, never a fault.
    pub fn solve(&mut self) -> SolveOutcome {
        let outcome = solvers::solve_maze(&mut self.grid);
        match &outcome {
            SolveOutcome::Solved(path) => {
                tracing::info!(length = path.len(), "maze solved");
            }
            SolveOutcome::Unsolvable => {
                tracing::info!("maze has no path from entrance to exit");
            }
        }
        outcome
    }
}
