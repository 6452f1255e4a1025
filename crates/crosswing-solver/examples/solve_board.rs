//! Example demonstrating a full X-Wing solve with rendered output.
//!
//! This example shows how to:
//! - Solve a board string and inspect the elimination trace
//! - Render the final grid and, optionally, every cell's candidates
//!
//! # Usage
//!
//! Solve the bundled demo board:
//!
//! ```sh
//! cargo run --example solve_board
//! ```
//!
//! Solve a specific board (81 cells, `.` or `0` for open cells):
//!
//! ```sh
//! cargo run --example solve_board -- "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//! ```
//!
//! Include the candidate grid and per-iteration logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_board -- --candidates
//! ```

use std::process;

use clap::Parser;
use crosswing_core::{Board, Cell, Position};
use crosswing_solver::solve;

/// Board solved in one X-Wing iteration; handy as a default input.
const DEMO_BOARD: &str = "\
    .....9.7.\
    ..7...9..\
    9..287..3\
    .8.154.3.\
    ...8.3...\
    .5.967.8.\
    3..571..6\
    ..5...1..\
    .7.3.....";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board string: 81 cells, row-major, `.` or `0` for open cells.
    /// Defaults to a bundled board with a known X-Wing.
    board: Option<String>,

    /// Print every cell's remaining candidates after solving.
    #[arg(long)]
    candidates: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let board_str = args.board.as_deref().unwrap_or(DEMO_BOARD);

    let outcome = match solve(board_str) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if outcome.trace().has_progress() {
        for (i, batch) in outcome.trace().batches().iter().enumerate() {
            println!("Iteration {}:", i + 1);
            for elimination in batch {
                println!("  eliminated {elimination}");
            }
        }
    } else {
        println!("No X-Wing eliminations found.");
    }
    println!();

    println!("State: {:?}", outcome.state());
    println!();
    println!("Grid:");
    print_grid(outcome.board());

    if args.candidates {
        println!();
        println!("Candidates:");
        print_candidates(outcome.board());
    }
}

/// Prints the grid with `.` for open cells and box separators.
fn print_grid(board: &Board) {
    for y in 0..9 {
        if y % 3 == 0 && y > 0 {
            println!("{}", "-".repeat(21));
        }
        let mut line = String::new();
        for x in 0..9 {
            if x % 3 == 0 && x > 0 {
                line.push_str("| ");
            }
            match board.cell(Position::new(x, y)).fixed_digit() {
                Some(digit) => line.push_str(&format!("{digit} ")),
                None => line.push_str(". "),
            }
        }
        println!("{}", line.trim_end());
    }
}

/// Prints every cell: fixed digits in parentheses, candidates as digit runs.
fn print_candidates(board: &Board) {
    let divider = format!("+{}", "---------+".repeat(9));
    for y in 0..9 {
        println!("{divider}");
        let mut line = String::from("|");
        for x in 0..9 {
            let content = match board.cell(Position::new(x, y)) {
                Cell::Fixed(digit) => format!("({digit})"),
                Cell::Open(candidates) => candidates.to_string(),
            };
            line.push_str(&format!("{content:^9}|"));
        }
        println!("{line}");
    }
    println!("{divider}");
}
