use std::sync::mpsc::Sender;

use crate::error::MazeError;
use crate::maze::{Coord, Direction, cell::Cell};

/// Progress events emitted by the core after each state change.
///
/// Events carry plain coordinates, never references into the grid, so a
/// consumer cannot mutate core state through them. Sends are synchronous
/// and send failures are ignored: a dropped receiver must never affect
/// generation or solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    /// A grid was allocated with all walls closed.
    Initial { num_rows: u16, num_cols: u16 },
    /// The wall pair between two adjacent cells was opened.
    Carved { from: Coord, to: Coord },
    /// A boundary wall (entrance or exit) was opened.
    Opened { coord: Coord, side: Direction },
    /// The spanning tree is complete and visited flags were reset.
    GenerationDone,
    /// The solver tentatively advanced along a carved passage.
    Moved { from: Coord, to: Coord },
    /// The solver undid a tentative move after hitting a dead end.
    Retracted { from: Coord, to: Coord },
    /// The solver reached the exit; `length` counts cells on the path.
    Solved { length: usize },
    /// The solver exhausted every branch without reaching the exit.
    Exhausted,
}

/// A column-major rectangular grid of [`Cell`]s.
///
/// The column index is the outer dimension and the row index the inner
/// one, so `(col, row)` addressing matches the direction semantics of
/// [`Direction::step`].
pub struct Grid {
    cells: Vec<Cell>,
    num_rows: u16,
    num_cols: u16,
    events: Option<Sender<MazeEvent>>,
}

impl Grid {
    /// Allocates `num_cols x num_rows` cells, all walls closed, none
    /// visited. Zero in either dimension yields an empty grid.
    pub fn new(num_rows: u16, num_cols: u16, events: Option<Sender<MazeEvent>>) -> Self {
        let cells = vec![Cell::new(); num_rows as usize * num_cols as usize];
        let grid = Grid {
            cells,
            num_rows,
            num_cols,
            events,
        };
        grid.emit(MazeEvent::Initial { num_rows, num_cols });
        grid
    }

    pub fn num_rows(&self) -> u16 {
        self.num_rows
    }

    pub fn num_cols(&self) -> u16 {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_in_bounds(&self, (col, row): Coord) -> bool {
        col < self.num_cols && row < self.num_rows
    }

    fn ravel_index(&self, (col, row): Coord) -> usize {
        // Column-major: the whole column is contiguous.
        col as usize * self.num_rows as usize + row as usize
    }

    /// In-bounds adjacent coordinates of `coord`, with the direction that
    /// leads to each. Up to four; fewer at edges and corners, none if
    /// `coord` itself is out of bounds.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| (dir, dir.step(coord)))
            .filter(move |&(_, c)| self.is_in_bounds(coord) && self.is_in_bounds(c))
    }

    /// The direction from `from` to `to`, if the two are in bounds and
    /// differ by exactly one step in exactly one axis.
    pub fn direction_between(&self, from: Coord, to: Coord) -> Option<Direction> {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return None;
        }
        Direction::ALL.into_iter().find(|dir| dir.step(from) == to)
    }

    /// Opens the wall pair between two grid-adjacent cells and records the
    /// carved passage on both, as one atomic mutation. Fails if the cells
    /// are not adjacent.
    pub fn connect(&mut self, from: Coord, to: Coord) -> Result<(), MazeError> {
        let dir = self
            .direction_between(from, to)
            .ok_or(MazeError::InvalidAdjacency { from, to })?;
        let (a, b) = self.cell_pair_mut(self.ravel_index(from), self.ravel_index(to));
        Cell::connect(a, b, dir);
        self.emit(MazeEvent::Carved { from, to });
        Ok(())
    }

    /// Opens a single boundary wall (entrance or exit). No carved-passage
    /// marker is recorded: there is no cell on the other side.
    pub fn open_side(&mut self, coord: Coord, side: Direction) {
        let idx = self.ravel_index(coord);
        self.cells[idx].clear_wall(side);
        self.emit(MazeEvent::Opened { coord, side });
    }

    /// True if the generator carved a traversable passage from `from` in
    /// the given direction: the neighbor is in bounds, both facing walls
    /// are open, and the carved marker is set.
    pub fn is_passage(&self, from: Coord, dir: Direction) -> bool {
        let to = dir.step(from);
        self.is_in_bounds(to)
            && !self[from].has_wall(dir)
            && !self[to].has_wall(dir.opposite())
            && self[from].carved(dir) == Some(true)
    }

    pub(crate) fn set_visited(&mut self, coord: Coord, visited: bool) {
        let idx = self.ravel_index(coord);
        self.cells[idx].set_visited(visited);
    }

    /// Clears every cell's visited flag, O(cells). Runs between the end
    /// of generation and the start of solving.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    pub(crate) fn emit(&self, event: MazeEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// Distinct mutable references to two cells by raveled index.
    fn cell_pair_mut(&mut self, a: usize, b: usize) -> (&mut Cell, &mut Cell) {
        debug_assert_ne!(a, b);
        if a < b {
            let (left, right) = self.cells.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.cells.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(coord)]
    }
}
