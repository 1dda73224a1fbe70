//! Draughtboard Puzzle Solver
//!
//! Solves the classic draughtboard puzzle: an 8x8 two-color checkerboard
//! cut into twelve irregular tiles is reassembled by a backtracking search
//! that places one tile per step, prunes candidates by anchor color, and
//! undoes placements when a search branch runs dry.

use clap::{Parser, Subcommand};

use draughtboard::{Catalog, Engine, SearchOutcome, Status};

/// Driver step cap; the standard puzzle finishes well inside this.
const MAX_STEPS: u64 = 10_000_000;

/// Solves the draughtboard puzzle and prints the assembled board.
#[derive(Parser)]
#[command(name = "draughtboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the search to completion and print the assembled board.
    Solve,
    /// Step the search a fixed number of times, printing each outcome.
    Trace {
        /// Number of steps to run.
        #[arg(default_value_t = 100)]
        steps: u64,
    },
}

fn main() {
    env_logger::init();

    let catalog = match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("invalid tile catalog: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Trace { steps }) => run_trace(catalog, steps),
        Some(Command::Solve) | None => run_solve(catalog),
    }
}

/// Runs the search to a terminal state and reports the result.
fn run_solve(catalog: Catalog) {
    let mut engine = Engine::new(catalog);
    match engine.run_to_completion(MAX_STEPS) {
        Status::Solved => {
            println!("Solved in {} attempts", engine.attempts());
            print!("{}", engine.board().format_board());
        }
        Status::Exhausted => {
            println!("No solution found after {} attempts", engine.attempts());
        }
        Status::Idle => {
            println!("Stopped at the step cap ({MAX_STEPS} steps)");
        }
    }
}

/// Steps the engine, printing every outcome and the board reached.
fn run_trace(catalog: Catalog, steps: u64) {
    let mut engine = Engine::new(catalog);
    for step in 1..=steps {
        let outcome = engine.step();
        println!("{step:>6}  {outcome:?}");
        if matches!(outcome, SearchOutcome::Solved | SearchOutcome::Exhausted) {
            break;
        }
    }
    print!("{}", engine.board().format_board());
}
