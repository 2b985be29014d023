use std::io::{Stdout, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{self, Color, StyledContent, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Coord, MazeEvent};

/// The width of each lattice cell when rendered, in character widths.
const CELL_WIDTH: u16 = 2;

/// Draws the maze as a character lattice of `2*cols + 1` by `2*rows + 1`
/// slots: cell centers at odd coordinates, walls and corners between
/// them. The renderer only consumes [`MazeEvent`]s; it never touches the
/// grid itself.
pub(super) struct Renderer {
    stdout: Stdout,
    /// Maze dimensions (num_rows, num_cols) from the `Initial` event.
    dims: Option<(u16, u16)>,
    /// Whether the terminal is large enough to draw the lattice.
    fits: bool,
    /// Pause after each rendered event.
    frame_delay: Duration,
}

fn glyph(symbol: &'static str, color: Color) -> StyledContent<&'static str> {
    #[cfg(debug_assertions)]
    {
        use unicode_width::UnicodeWidthStr;
        assert_eq!(
            symbol.width(),
            CELL_WIDTH as usize,
            "each lattice slot must occupy exactly two character widths"
        );
    }
    symbol.with(color)
}

fn wall() -> StyledContent<&'static str> {
    glyph("██", Color::White)
}

fn open() -> StyledContent<&'static str> {
    glyph("  ", Color::Reset)
}

fn route() -> StyledContent<&'static str> {
    glyph("* ", Color::Yellow)
}

fn retracted() -> StyledContent<&'static str> {
    glyph(". ", Color::DarkGrey)
}

/// Lattice slot at the center of a maze cell.
fn center((col, row): Coord) -> (u16, u16) {
    (2 * col + 1, 2 * row + 1)
}

/// Lattice slot of the wall between two adjacent maze cells.
fn midpoint(a: Coord, b: Coord) -> (u16, u16) {
    let (ax, ay) = center(a);
    let (bx, by) = center(b);
    ((ax + bx) / 2, (ay + by) / 2)
}

impl Renderer {
    pub(super) fn new(frame_delay: Duration) -> Self {
        Renderer {
            stdout: std::io::stdout(),
            dims: None,
            fits: false,
            frame_delay,
        }
    }

    /// Consumes events until the sender side hangs up.
    pub(super) fn run(mut self, events: Receiver<MazeEvent>) -> std::io::Result<()> {
        while let Ok(event) = events.recv() {
            self.draw(&event)?;
            std::thread::sleep(self.frame_delay);
        }
        Ok(())
    }

    fn draw(&mut self, event: &MazeEvent) -> std::io::Result<()> {
        if !self.fits && !matches!(event, MazeEvent::Initial { .. }) {
            return Ok(());
        }
        match *event {
            MazeEvent::Initial { num_rows, num_cols } => {
                self.draw_closed_lattice(num_rows, num_cols)?;
            }
            MazeEvent::Carved { from, to } => {
                self.put(midpoint(from, to), open())?;
            }
            MazeEvent::Opened { coord, side } => {
                let (x, y) = center(coord);
                // Stepping one lattice slot sideways lands on the wall.
                self.put(side.step((x, y)), open())?;
            }
            MazeEvent::GenerationDone => {
                self.status("Maze generated. Solving...")?;
            }
            MazeEvent::Moved { from, to } => {
                self.put(center(from), route())?;
                self.put(midpoint(from, to), route())?;
                self.put(center(to), route())?;
            }
            MazeEvent::Retracted { from, to } => {
                self.put(midpoint(from, to), retracted())?;
                self.put(center(to), retracted())?;
            }
            MazeEvent::Solved { length } => {
                self.status(&format!("Solved: path of {length} cells."))?;
            }
            MazeEvent::Exhausted => {
                self.status("No path from entrance to exit.")?;
            }
        }
        self.stdout.flush()
    }

    fn draw_closed_lattice(&mut self, num_rows: u16, num_cols: u16) -> std::io::Result<()> {
        self.dims = Some((num_rows, num_cols));
        let lattice_cols = 2 * num_cols as u32 + 1;
        let lattice_rows = 2 * num_rows as u32 + 1;

        let (term_width, term_height) = terminal::size()?;
        // One extra row for the status line.
        self.fits = lattice_cols * CELL_WIDTH as u32 <= term_width as u32
            && lattice_rows + 1 <= term_height as u32;
        if !self.fits {
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::Print(format!(
                    "Terminal is too small to draw a {num_cols}x{num_rows} maze; \
                     running without animation.\r\n"
                )),
            )?;
            return Ok(());
        }

        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for y in 0..lattice_rows as u16 {
            for x in 0..lattice_cols as u16 {
                let slot = if x % 2 == 1 && y % 2 == 1 {
                    open()
                } else {
                    wall()
                };
                queue!(self.stdout, style::PrintStyledContent(slot))?;
            }
            queue!(self.stdout, style::Print("\r\n"))?;
        }
        Ok(())
    }

    fn put(&mut self, (x, y): (u16, u16), slot: StyledContent<&'static str>) -> std::io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(x * CELL_WIDTH, y),
            style::PrintStyledContent(slot)
        )
    }

    fn status(&mut self, message: &str) -> std::io::Result<()> {
        let (num_rows, _) = self.dims.unwrap_or((0, 0));
        queue!(
            self.stdout,
            cursor::MoveTo(0, 2 * num_rows + 1),
            terminal::Clear(ClearType::CurrentLine),
            style::Print(message)
        )
    }
}
