use crate::maze::Direction;

/// A single grid cell: four wall flags, a transient `visited` flag, and a
/// per-direction record of which passages the generator actually carved.
///
/// The carved record is what lets the solver tell "no wall" apart from "a
/// move the generator intended"; an entrance opened in a boundary wall
/// clears the wall without ever marking a carved passage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    has_left_wall: bool,
    has_right_wall: bool,
    has_top_wall: bool,
    has_bottom_wall: bool,
    visited: bool,
    carved: [Option<bool>; 4],
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            has_left_wall: true,
            has_right_wall: true,
            has_top_wall: true,
            has_bottom_wall: true,
            visited: false,
            carved: [None; 4],
        }
    }
}

impl Cell {
    pub fn new() -> Self {
        Cell::default()
    }

    pub fn has_wall(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.has_left_wall,
            Direction::Right => self.has_right_wall,
            Direction::Up => self.has_top_wall,
            Direction::Down => self.has_bottom_wall,
        }
    }

    /// Clears a single wall flag. Crate-private: walls between cells must
    /// be cleared in pairs through [`Cell::connect`] or the grid, never
    /// one side at a time.
    pub(crate) fn clear_wall(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.has_left_wall = false,
            Direction::Right => self.has_right_wall = false,
            Direction::Up => self.has_top_wall = false,
            Direction::Down => self.has_bottom_wall = false,
        }
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Whether a carved passage was recorded in the given direction.
    /// `None` means the generator never touched this relation.
    pub fn carved(&self, dir: Direction) -> Option<bool> {
        self.carved[dir as usize]
    }

    /// Opens the wall pair between two adjacent cells and records the
    /// carved passage on both sides, in one step. `dir` is the direction
    /// from `from` to `to`; adjacency is the caller's responsibility.
    pub(crate) fn connect(from: &mut Cell, to: &mut Cell, dir: Direction) {
        from.clear_wall(dir);
        to.clear_wall(dir.opposite());
        from.carved[dir as usize] = Some(true);
        to.carved[dir.opposite() as usize] = Some(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_fully_walled_and_unvisited() {
        let cell = Cell::new();
        for dir in Direction::ALL {
            assert!(cell.has_wall(dir));
            assert_eq!(cell.carved(dir), None);
        }
        assert!(!cell.visited());
    }

    #[test]
    fn connect_clears_facing_walls_and_marks_both_sides() {
        let mut a = Cell::new();
        let mut b = Cell::new();
        Cell::connect(&mut a, &mut b, Direction::Right);

        assert!(!a.has_wall(Direction::Right));
        assert!(!b.has_wall(Direction::Left));
        assert_eq!(a.carved(Direction::Right), Some(true));
        assert_eq!(b.carved(Direction::Left), Some(true));

        // The other walls stay up on both cells.
        for dir in [Direction::Left, Direction::Up, Direction::Down] {
            assert!(a.has_wall(dir));
        }
        for dir in [Direction::Right, Direction::Up, Direction::Down] {
            assert!(b.has_wall(dir));
        }
    }
}
