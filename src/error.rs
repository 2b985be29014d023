use thiserror::Error;

use crate::maze::Coord;

/// Errors the maze core can surface to callers.
///
/// Zero-sized grids and unsolvable mazes are not errors: the former
/// produces a degenerate maze, the latter a normal
/// [`SolveOutcome::Unsolvable`](crate::SolveOutcome::Unsolvable).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Two cells that do not share a grid edge were asked to connect.
    /// This signals a bug in the calling algorithm.
    #[error("cells {from:?} and {to:?} are not grid-adjacent")]
    InvalidAdjacency { from: Coord, to: Coord },
}
