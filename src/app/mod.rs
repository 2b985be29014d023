mod renderer;

use std::io::{self, Stdout, Write};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};

use crate::maze::Maze;
use crate::solvers::SolveOutcome;
use renderer::Renderer;

/// Terminal animation driver: runs the maze core on the calling thread
/// while a render thread consumes its event stream. The core never waits
/// on the renderer beyond the channel send itself.
pub struct App {
    /// Pause between rendered events.
    frame_delay: Duration,
}

impl Default for App {
    fn default() -> Self {
        App {
            frame_delay: Duration::from_millis(2),
        }
    }
}

impl App {
    /// Set a panic hook to restore terminal state on panic, even if the
    /// panic occurs in the render thread.
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            // Ignore any errors as we are already failing
            let _ = App::restore_terminal(&mut io::stdout());
            hook(panic_info);
        }));
    }

    /// Enter the alternate screen and hide the cursor.
    fn setup_terminal(stdout: &mut Stdout) -> io::Result<()> {
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()
    }

    /// Leave the alternate screen and show the cursor again.
    fn restore_terminal(stdout: &mut Stdout) -> io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()
    }

    /// Generates and solves one maze with the animation running, then
    /// waits for Enter before restoring the terminal.
    pub fn run(&self, num_rows: u16, num_cols: u16, seed: Option<u64>) -> io::Result<SolveOutcome> {
        let mut stdout = io::stdout();
        App::setup_terminal(&mut stdout)?;
        let result = self.animate(num_rows, num_cols, seed);
        App::restore_terminal(&mut stdout)?;
        result
    }

    fn animate(&self, num_rows: u16, num_cols: u16, seed: Option<u64>) -> io::Result<SolveOutcome> {
        let (event_tx, event_rx) = mpsc::channel();
        let frame_delay = self.frame_delay;
        let render_handle = std::thread::spawn(move || Renderer::new(frame_delay).run(event_rx));

        let mut maze = Maze::new(num_rows, num_cols, seed, Some(event_tx));
        maze.generate().map_err(io::Error::other)?;
        let outcome = maze.solve();
        // Dropping the maze closes the channel; the render thread drains
        // the remaining events and exits.
        drop(maze);

        match render_handle.join() {
            Ok(render_result) => render_result?,
            Err(_) => return Err(io::Error::other("render thread panicked")),
        }

        let mut stdout = io::stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, num_rows.saturating_mul(2).saturating_add(2))
        )?;
        write!(stdout, "Press Enter to exit...")?;
        stdout.flush()?;
        io::stdin().read_line(&mut String::new())?;

        Ok(outcome)
    }
}
