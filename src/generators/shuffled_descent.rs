use rand::{rngs::StdRng, seq::SliceRandom};

use crate::error::MazeError;
use crate::maze::grid::Grid;

/// Depth-first carving variant for large grids.
///
/// Each popped cell shuffles its unvisited neighbors once, then connects
/// and pushes all of them, instead of re-drawing one candidate per step.
/// Neighbors of the same cell are never adjacent to each other, so every
/// candidate is still unvisited when its turn comes and each cell gets
/// exactly one incoming connection: the result is a spanning tree, merely
/// carved in a different order than the backtracker would produce.
pub(super) fn shuffled_descent(grid: &mut Grid, rng: &mut StdRng) -> Result<(), MazeError> {
    let start = (0u16, 0u16);
    grid.set_visited(start, true);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        let mut candidates = grid
            .neighbors(current)
            .filter(|&(_, c)| !grid[c].visited())
            .map(|(_, c)| c)
            .collect::<Vec<_>>();
        candidates.shuffle(rng);

        for next in candidates {
            grid.connect(current, next)?;
            grid.set_visited(next, true);
            stack.push(next);
        }
    }

    Ok(())
}
