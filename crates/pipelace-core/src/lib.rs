//! Core types for the Pipelace pipe-rotation puzzle.
//!
//! A board is a rectangular (optionally toroidal) grid of pieces. Each
//! piece has a [`Shape`] and an orientation, which together decide which of
//! its four faces carry a connector. The player rotates pieces in place;
//! the puzzle is won when every pair of facing connectors agrees and every
//! piece realizes exactly the wiring its shape declares.
//!
//! This crate provides the board model ([`Board`], [`Piece`], [`Shape`],
//! [`Direction`]), edge evaluation and win detection
//! ([`Board::check_edge`], [`Board::is_won`]), the text serialization
//! format (`FromStr`/`Display` on [`Board`]) and the canonical sample
//! boards ([`samples`]). Search and generation live in the companion
//! `pipelace-solver` and `pipelace-generator` crates.
//!
//! # Example
//!
//! ```
//! use pipelace_core::{Board, samples};
//!
//! let mut board = samples::default_puzzle();
//! assert!(!board.is_won());
//!
//! // Play the known solution by re-orienting every piece.
//! let solution = samples::default_solution();
//! for (row, col) in solution.positions() {
//!     board.set_orientation(row, col, solution.orientation(row, col));
//! }
//! assert!(board.is_won());
//!
//! // Boards round-trip through their text form.
//! let text = board.to_string();
//! let reloaded: Board = text.parse()?;
//! assert_eq!(reloaded, board);
//! # Ok::<(), pipelace_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, BoardError},
    direction::{Direction, DirectionSet, DirectionSetIter, ParseDirectionError},
    edge::EdgeStatus,
    piece::Piece,
    shape::{ParseShapeError, Shape},
    text::ParseBoardError,
};

mod board;
mod direction;
mod edge;
mod piece;
pub mod samples;
mod shape;
mod text;
