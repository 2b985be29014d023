mod dfs;

use crate::maze::{Coord, grid::Grid};

/// Result of a solve: either the ordered entrance-to-exit path, or an
/// explicit "no path" outcome. Unsolvable is a normal, reportable result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The cells on the route, entrance first, exit last.
    Solved(Vec<Coord>),
    Unsolvable,
}

impl SolveOutcome {
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            SolveOutcome::Solved(path) => Some(path),
            SolveOutcome::Unsolvable => None,
        }
    }
}

/// Searches for the path from (0, 0) to the bottom-right cell, using only
/// passages the generator carved. Expects visited flags to be clear.
pub fn solve_maze(grid: &mut Grid) -> SolveOutcome {
    if grid.is_empty() {
        return SolveOutcome::Unsolvable;
    }
    let start = (0, 0);
    let goal = (grid.num_cols() - 1, grid.num_rows() - 1);
    dfs::solve_dfs(grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{self, Strategy};
    use crate::maze::grid::MazeEvent;
    use crate::maze::{Direction, Maze};
    use std::sync::mpsc;

    fn solved_path(num_rows: u16, num_cols: u16, seed: u64) -> Vec<Coord> {
        let mut maze = Maze::new(num_rows, num_cols, Some(seed), None);
        maze.generate().unwrap();
        match maze.solve() {
            SolveOutcome::Solved(path) => path,
            SolveOutcome::Unsolvable => panic!("generated maze must be solvable"),
        }
    }

    #[test]
    fn path_runs_from_entrance_to_exit_over_open_passages() {
        for seed in [0, 1, 42, 1234] {
            let mut grid = Grid::new(9, 12, None);
            generators::carve(&mut grid, Strategy::Backtracker, Some(seed)).unwrap();
            grid.reset_visited();

            let path = match solve_maze(&mut grid) {
                SolveOutcome::Solved(path) => path,
                SolveOutcome::Unsolvable => panic!("spanning tree must be solvable"),
            };
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&(11, 8)));
            for pair in path.windows(2) {
                let dir = grid
                    .direction_between(pair[0], pair[1])
                    .expect("consecutive path cells must be grid-adjacent");
                assert!(grid.is_passage(pair[0], dir));
            }
        }
    }

    #[test]
    fn path_never_revisits_a_cell() {
        let path = solved_path(10, 10, 77);
        let mut seen = path.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), path.len());
    }

    #[test]
    fn dead_end_moves_are_retracted_from_the_path() {
        let (tx, rx) = mpsc::channel();
        let mut maze = Maze::new(8, 8, Some(9), Some(tx));
        maze.generate().unwrap();
        let path = match maze.solve() {
            SolveOutcome::Solved(path) => path,
            SolveOutcome::Unsolvable => panic!("generated maze must be solvable"),
        };
        drop(maze);

        let events: Vec<_> = rx.iter().collect();
        let moved = events
            .iter()
            .filter(|e| matches!(e, MazeEvent::Moved { .. }))
            .count();
        let retracted: Vec<Coord> = events
            .iter()
            .filter_map(|e| match e {
                MazeEvent::Retracted { to, .. } => Some(*to),
                _ => None,
            })
            .collect();
        // Every tentative move either stays on the path or is retracted.
        assert_eq!(path.len(), 1 + moved - retracted.len());
        for dead in retracted {
            assert!(!path.contains(&dead), "dead-end cell {dead:?} kept in path");
        }
    }

    #[test]
    fn works_on_both_generator_strategies() {
        for strategy in [Strategy::Backtracker, Strategy::ShuffledDescent] {
            let mut grid = Grid::new(35, 30, None);
            generators::carve(&mut grid, strategy, Some(6)).unwrap();
            grid.reset_visited();
            assert!(solve_maze(&mut grid).path().is_some());
        }
    }

    #[test]
    fn fully_walled_grid_is_unsolvable() {
        // Externally supplied wall configuration with no carved passages.
        let mut grid = Grid::new(2, 2, None);
        assert_eq!(solve_maze(&mut grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn disconnected_goal_is_unsolvable() {
        // Only the left column is carved; the goal column is unreachable.
        let mut grid = Grid::new(3, 2, None);
        grid.connect((0, 0), (0, 1)).unwrap();
        grid.connect((0, 1), (0, 2)).unwrap();
        assert_eq!(solve_maze(&mut grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn empty_grid_is_unsolvable() {
        let mut grid = Grid::new(0, 0, None);
        assert_eq!(solve_maze(&mut grid), SolveOutcome::Unsolvable);
    }

    #[test]
    fn open_wall_without_carved_marker_is_not_traversed() {
        let mut grid = Grid::new(1, 2, None);
        // Clear both facing walls one side at a time: no carved-passage
        // marker is recorded, so the solver must not walk through.
        grid.open_side((0, 0), Direction::Right);
        grid.open_side((1, 0), Direction::Left);
        assert!(!grid[(0, 0)].has_wall(Direction::Right));
        assert!(!grid[(1, 0)].has_wall(Direction::Left));
        assert_eq!(solve_maze(&mut grid), SolveOutcome::Unsolvable);
    }
}
