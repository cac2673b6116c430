//! Example demonstrating board generation.
//!
//! Generates a board, prints the puzzle and its solution in the text
//! format, and reports how many solutions the puzzle actually has.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Pick dimensions, blank squares and extra edges:
//!
//! ```sh
//! cargo run --example generate_board -- --rows 6 --cols 8 --empty 4 --extra 2
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use pipelace_generator::{BoardGenerator, BoardSeed, GenerateOptions};
use pipelace_solver::BacktrackSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Generate a toroidal board.
    #[arg(long)]
    wrapping: bool,

    /// Number of squares to leave blank.
    #[arg(long, default_value_t = 0)]
    empty: usize,

    /// Number of extra edges beyond the spanning network.
    #[arg(long, default_value_t = 0)]
    extra: usize,

    /// Seed to reproduce (64 hexadecimal characters).
    #[arg(long)]
    seed: Option<String>,
}

fn main() {
    let args = Args::parse();
    let options = GenerateOptions::new(args.rows, args.cols)
        .wrapping(args.wrapping)
        .nb_empty(args.empty)
        .nb_extra(args.extra);

    let seed = match &args.seed {
        Some(text) => match text.parse::<BoardSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        None => BoardSeed::random(),
    };

    let generator = BoardGenerator::new();
    let board = match generator.generate_with_seed(seed, &options) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", board.seed);
    println!();
    println!("Problem:");
    print!("{}", board.problem);
    println!();
    println!("Solution:");
    print!("{}", board.solution);
    println!();

    let solver = BacktrackSolver::new();
    println!("Solutions: {}", solver.count_solutions(&board.problem));
}
