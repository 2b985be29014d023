//! Perfect-maze generation and solving on a rectangular grid.
//!
//! The core (cell, grid, generators, solvers) is synchronous and has no
//! dependency on rendering: it reports its progress through an optional
//! [`MazeEvent`] channel that a renderer may consume.

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use maze::grid::MazeEvent;
pub use maze::{Coord, Direction, Maze};
pub use solvers::SolveOutcome;
