use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;
mod shuffled_descent;

use recur_backtrack::recursive_backtrack;
use shuffled_descent::shuffled_descent;

use crate::error::MazeError;
use crate::maze::grid::Grid;

/// Grids with fewer cells than this use the full backtracking strategy;
/// larger ones use the cheaper shuffle-once descent.
const BACKTRACK_CELL_LIMIT: usize = 1000;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carving strategy. Both produce a spanning tree over the grid (exactly
/// `rows * cols - 1` passages, connected, acyclic); they differ only in
/// carving order and cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-first carving with true backtracking: unvisited neighbors
    /// are re-collected and one is drawn at random on every step.
    Backtracker,
    /// Depth-first carving that shuffles a cell's unvisited neighbors
    /// once and connects all of them before descending.
    ShuffledDescent,
}

impl Strategy {
    /// Picks a strategy from the grid's cell count.
    pub fn for_grid(grid: &Grid) -> Strategy {
        let cells = grid.num_rows() as usize * grid.num_cols() as usize;
        if cells < BACKTRACK_CELL_LIMIT {
            Strategy::Backtracker
        } else {
            Strategy::ShuffledDescent
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Backtracker => write!(f, "randomized backtracker"),
            Strategy::ShuffledDescent => write!(f, "shuffled descent"),
        }
    }
}

/// Carves a spanning tree of passages through the grid, starting from
/// (0, 0). A grid with a zero dimension is left untouched.
pub fn carve(grid: &mut Grid, strategy: Strategy, seed: Option<u64>) -> Result<(), MazeError> {
    if grid.is_empty() {
        return Ok(());
    }
    let mut rng = get_rng(seed);
    tracing::debug!(%strategy, "carving spanning tree");
    match strategy {
        Strategy::Backtracker => recursive_backtrack(grid, &mut rng),
        Strategy::ShuffledDescent => shuffled_descent(grid, &mut rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Coord, Direction};
    use std::collections::VecDeque;

    fn carved_grid(num_rows: u16, num_cols: u16, strategy: Strategy, seed: u64) -> Grid {
        let mut grid = Grid::new(num_rows, num_cols, None);
        carve(&mut grid, strategy, Some(seed)).unwrap();
        grid
    }

    /// Counts each open passage once, by looking only rightward and
    /// downward from every cell.
    fn passage_count(grid: &Grid) -> usize {
        let mut count = 0;
        for col in 0..grid.num_cols() {
            for row in 0..grid.num_rows() {
                for dir in [Direction::Right, Direction::Down] {
                    if grid.is_passage((col, row), dir) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Number of cells reachable from (0, 0) through carved passages.
    fn reachable_from_origin(grid: &Grid) -> usize {
        if grid.is_empty() {
            return 0;
        }
        let mut seen = vec![false; grid.num_rows() as usize * grid.num_cols() as usize];
        let index =
            |(col, row): Coord| col as usize * grid.num_rows() as usize + row as usize;
        let mut queue = VecDeque::from([(0, 0)]);
        seen[0] = true;
        let mut count = 1;
        while let Some(coord) = queue.pop_front() {
            for dir in Direction::ALL {
                let next = dir.step(coord);
                if grid.is_passage(coord, dir) && !seen[index(next)] {
                    seen[index(next)] = true;
                    count += 1;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    fn assert_spanning_tree(grid: &Grid) {
        let cells = grid.num_rows() as usize * grid.num_cols() as usize;
        // Connected with exactly cells - 1 edges: a tree, hence acyclic.
        assert_eq!(reachable_from_origin(grid), cells);
        assert_eq!(passage_count(grid), cells.saturating_sub(1));
    }

    fn assert_wall_consistency(grid: &Grid) {
        for col in 0..grid.num_cols() {
            for row in 0..grid.num_rows() {
                for (dir, neighbor) in grid.neighbors((col, row)) {
                    assert_eq!(
                        grid[(col, row)].has_wall(dir),
                        grid[neighbor].has_wall(dir.opposite()),
                        "wall between {:?} and {:?} is one-sided",
                        (col, row),
                        neighbor,
                    );
                }
            }
        }
    }

    #[test]
    fn backtracker_carves_a_spanning_tree() {
        for (rows, cols) in [(1, 1), (1, 5), (5, 1), (5, 5), (13, 7)] {
            let grid = carved_grid(rows, cols, Strategy::Backtracker, 42);
            assert_spanning_tree(&grid);
            assert_wall_consistency(&grid);
        }
    }

    #[test]
    fn shuffled_descent_carves_a_spanning_tree() {
        // Includes sizes above the strategy threshold and edge-hugging
        // shapes that exercise the column-0/row-0 boundary.
        for (rows, cols) in [(1, 1), (2, 1), (1, 40), (40, 30), (50, 25)] {
            let grid = carved_grid(rows, cols, Strategy::ShuffledDescent, 42);
            assert_spanning_tree(&grid);
            assert_wall_consistency(&grid);
        }
    }

    #[test]
    fn carving_skips_degenerate_grids() {
        for strategy in [Strategy::Backtracker, Strategy::ShuffledDescent] {
            let mut grid = Grid::new(0, 7, None);
            carve(&mut grid, strategy, Some(1)).unwrap();
            assert_eq!(passage_count(&grid), 0);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        for strategy in [Strategy::Backtracker, Strategy::ShuffledDescent] {
            let a = carved_grid(8, 9, strategy, 42);
            let b = carved_grid(8, 9, strategy, 42);
            for col in 0..9 {
                for row in 0..8 {
                    for dir in Direction::ALL {
                        assert_eq!(
                            a[(col, row)].has_wall(dir),
                            b[(col, row)].has_wall(dir)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn strategy_selection_follows_cell_count() {
        assert_eq!(
            Strategy::for_grid(&Grid::new(10, 10, None)),
            Strategy::Backtracker
        );
        assert_eq!(
            Strategy::for_grid(&Grid::new(40, 25, None)),
            Strategy::ShuffledDescent
        );
    }
}
