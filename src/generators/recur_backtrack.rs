use rand::{Rng, rngs::StdRng};

use crate::error::MazeError;
use crate::maze::grid::Grid;

/// Randomized depth-first carving with true backtracking.
///
/// The cell on top of the stack re-collects its unvisited neighbors on
/// every step, draws one at random, connects to it and descends; a cell
/// with no unvisited neighbors is popped, resuming carving from its
/// discoverer. Every cell receives exactly one incoming connection from
/// the cell that discovered it, so the carved passages form a spanning
/// tree.
///
/// An explicit stack stands in for the call stack so deep mazes cannot
/// overflow it.
pub(super) fn recursive_backtrack(grid: &mut Grid, rng: &mut StdRng) -> Result<(), MazeError> {
    let start = (0, 0);
    grid.set_visited(start, true);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let candidates = grid
            .neighbors(current)
            .filter(|&(_, c)| !grid[c].visited())
            .map(|(_, c)| c)
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Dead end: fall back to the previous cell.
            stack.pop();
            continue;
        }

        let next = candidates[rng.random_range(0..candidates.len())];
        grid.connect(current, next)?;
        grid.set_visited(next, true);
        stack.push(next);
    }

    Ok(())
}
