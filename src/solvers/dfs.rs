use super::SolveOutcome;
use crate::maze::grid::{Grid, MazeEvent};
use crate::maze::{Coord, Direction};

/// One in-flight cell on the search stack.
struct Frame {
    coord: Coord,
    /// Index into [`Direction::ALL`] of the next direction to probe.
    next_dir: usize,
}

/// Depth-first search with explicit backtracking.
///
/// Directions are probed in the fixed order left, right, up, down. A
/// tentative move pushes the neighbor onto the path; when a cell runs out
/// of directions, the move into it is popped from the path before its
/// discoverer resumes, so the reported path holds only cells on the
/// successful route. The frame stack keeps the per-cell direction cursor
/// that the recursive form would hold on the call stack, which also keeps
/// very large grids from overflowing it.
pub(super) fn solve_dfs(grid: &mut Grid, start: Coord, goal: Coord) -> SolveOutcome {
    grid.set_visited(start, true);
    let mut path = vec![start];
    let mut frames = vec![Frame {
        coord: start,
        next_dir: 0,
    }];

    loop {
        let Some(frame) = frames.last_mut() else {
            // The start cell itself was exhausted: no path exists.
            grid.emit(MazeEvent::Exhausted);
            return SolveOutcome::Unsolvable;
        };
        let current = frame.coord;

        if current == goal {
            grid.emit(MazeEvent::Solved { length: path.len() });
            return SolveOutcome::Solved(path);
        }

        // Probe the remaining directions of this cell.
        let mut advanced = None;
        while frame.next_dir < Direction::ALL.len() {
            let dir = Direction::ALL[frame.next_dir];
            frame.next_dir += 1;
            let next = dir.step(current);
            if grid.is_passage(current, dir) && !grid[next].visited() {
                advanced = Some(next);
                break;
            }
        }

        match advanced {
            Some(next) => {
                grid.set_visited(next, true);
                path.push(next);
                grid.emit(MazeEvent::Moved {
                    from: current,
                    to: next,
                });
                frames.push(Frame {
                    coord: next,
                    next_dir: 0,
                });
            }
            None => {
                // Dead end: retract the tentative move before giving this
                // branch up, leaving only the real route on the path.
                frames.pop();
                path.pop();
                if let Some(prev) = frames.last() {
                    grid.emit(MazeEvent::Retracted {
                        from: prev.coord,
                        to: current,
                    });
                }
            }
        }
    }
}
