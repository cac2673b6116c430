//! Pipelace text front-end.
//!
//! Subcommands: `play` (interactive console game), `solve` and `count`
//! (search entry points over saved boards), `generate` (random boards).
//! Boards are exchanged with files in the text serialization format of
//! `pipelace-core`.

#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::{
    error::Error,
    fs,
    io::{self, BufRead as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use log::{debug, info};
use pipelace_core::{Board, samples};
use pipelace_game::Game;
use pipelace_generator::{BoardGenerator, BoardSeed, GenerateOptions, shuffle_orientation};
use pipelace_solver::BacktrackSolver;

mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a board interactively in the console.
    Play {
        /// Board file to load; the built-in starter puzzle when omitted.
        file: Option<PathBuf>,
    },
    /// Solve a saved board.
    Solve {
        /// Board file to solve.
        input: PathBuf,
        /// Write the solved board here instead of printing it.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Count the solutions of a saved board.
    Count {
        /// Board file to count.
        input: PathBuf,
        /// Write the count here instead of printing it.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a random board.
    Generate {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
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
        /// Emit the solved network instead of the scrambled puzzle.
        #[arg(long)]
        solved: bool,
        /// Write the board here instead of printing it.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Play { file } => play(file.as_deref()),
        Command::Solve { input, output } => solve(&input, output.as_deref()),
        Command::Count { input, output } => count(&input, output.as_deref()),
        Command::Generate {
            rows,
            cols,
            wrapping,
            empty,
            extra,
            seed,
            solved,
            output,
        } => {
            let options = GenerateOptions::new(rows, cols)
                .wrapping(wrapping)
                .nb_empty(empty)
                .nb_extra(extra);
            generate(&options, seed.as_deref(), solved, output.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_board(path: &Path) -> Result<Board, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let board = text.parse()?;
    Ok(board)
}

fn save_board(board: &Board, path: &Path) -> Result<(), Box<dyn Error>> {
    fs::write(path, board.to_string())?;
    Ok(())
}

fn print_help() {
    println!("press 'c <i> <j>' to rotate the piece in square (i,j) clockwise");
    println!("press 'a <i> <j>' to rotate the piece in square (i,j) anti-clockwise");
    println!("press 'u' to undo and 'y' to redo");
    println!("press 'r' to shuffle the board");
    println!("press 's <file>' to save the board");
    println!("press 'q' to quit");
}

fn play(file: Option<&Path>) -> Result<ExitCode, Box<dyn Error>> {
    let board = match file {
        Some(path) => load_board(path)?,
        None => samples::default_puzzle(),
    };
    let mut game = Game::new(board);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_won() {
        print!("{}", render::render(game.board()));
        println!("? [h for help]");

        let Some(line) = lines.next().transpose()? else {
            println!("SHAME");
            return Ok(ExitCode::FAILURE);
        };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("h") => print_help(),
            Some(action @ ("c" | "a")) => {
                let coords = (
                    words.next().and_then(|w| w.parse().ok()),
                    words.next().and_then(|w| w.parse().ok()),
                );
                let (Some(row), Some(col)) = coords else {
                    println!("usage: {action} <i> <j>");
                    continue;
                };
                let quarter_turns = if action == "c" { 1 } else { -1 };
                match game.play_move(row, col, quarter_turns) {
                    Ok(()) => debug!("played ({row}, {col}) by {quarter_turns}"),
                    Err(err) => println!("{err}"),
                }
            }
            Some("u") => {
                if !game.undo() {
                    println!("nothing to undo");
                }
            }
            Some("y") => {
                if !game.redo() {
                    println!("nothing to redo");
                }
            }
            Some("r") => {
                let mut board = game.board().clone();
                shuffle_orientation(&mut board, &mut rand::rng());
                game.reset_board(board);
            }
            Some("s") => {
                if let Some(path) = words.next() {
                    save_board(game.board(), Path::new(path))?;
                    println!("board saved to {path}");
                } else {
                    println!("usage: s <file>");
                }
            }
            Some("q") => {
                println!("SHAME");
                return Ok(ExitCode::SUCCESS);
            }
            _ => {}
        }
    }

    print!("{}", render::render(game.board()));
    println!("CONGRATULATIONS");
    Ok(ExitCode::SUCCESS)
}

fn solve(input: &Path, output: Option<&Path>) -> Result<ExitCode, Box<dyn Error>> {
    let mut board = load_board(input)?;
    let solver = BacktrackSolver::new();

    let (solved, stats) = solver.solve_with_stats(&mut board);
    debug!("tried {} orientation assignments", stats.nodes());
    if !solved {
        eprintln!("no solution");
        return Ok(ExitCode::FAILURE);
    }

    match output {
        Some(path) => save_board(&board, path)?,
        None => print!("{}", render::render(&board)),
    }
    Ok(ExitCode::SUCCESS)
}

fn count(input: &Path, output: Option<&Path>) -> Result<ExitCode, Box<dyn Error>> {
    let board = load_board(input)?;
    let solver = BacktrackSolver::new();

    let (nb_solutions, stats) = solver.count_solutions_with_stats(&board);
    debug!("tried {} orientation assignments", stats.nodes());

    match output {
        Some(path) => fs::write(path, format!("{nb_solutions}\n"))?,
        None => println!("{nb_solutions}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn generate(
    options: &GenerateOptions,
    seed: Option<&str>,
    solved: bool,
    output: Option<&Path>,
) -> Result<ExitCode, Box<dyn Error>> {
    let seed = match seed {
        Some(text) => text.parse::<BoardSeed>()?,
        None => BoardSeed::random(),
    };

    let generated = BoardGenerator::new().generate_with_seed(seed, options)?;
    info!("seed: {}", generated.seed);

    let board = if solved {
        &generated.solution
    } else {
        &generated.problem
    };
    match output {
        Some(path) => save_board(board, path)?,
        None => print!("{}", render::render(board)),
    }
    Ok(ExitCode::SUCCESS)
}
