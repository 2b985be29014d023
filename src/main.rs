use clap::Parser;

use mazeway::app::App;
use mazeway::{Maze, SolveOutcome};

/// Generate a perfect maze and find the path through it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows in the maze
    #[arg(long, default_value_t = 15)]
    rows: u16,

    /// Number of columns in the maze
    #[arg(long, default_value_t = 20)]
    cols: u16,

    /// Seed for a reproducible maze; omit for a fresh one each run
    #[arg(long)]
    seed: Option<u64>,

    /// Animate generation and solving in the terminal
    #[arg(long)]
    animate: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Log to a file so log lines never interleave with the animation.
    let file_appender = tracing_appender::rolling::never("logs", "mazeway.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let outcome = if args.animate {
        let app = App::default();
        app.run(args.rows, args.cols, args.seed)?
    } else {
        let mut maze = Maze::new(args.rows, args.cols, args.seed, None);
        maze.generate().map_err(std::io::Error::other)?;
        maze.solve()
    };

    match outcome {
        SolveOutcome::Solved(path) => {
            println!(
                "Solved {}x{} maze: path of {} cells from {:?} to {:?}.",
                args.cols,
                args.rows,
                path.len(),
                path.first().copied().unwrap_or((0, 0)),
                path.last().copied().unwrap_or((0, 0)),
            );
        }
        SolveOutcome::Unsolvable => {
            println!("No path from entrance to exit.");
        }
    }
    Ok(())
}
