//! Canonical sample boards.
//!
//! The 5×5 starter puzzle shipped with the game, in its scrambled form
//! ([`default_puzzle`]) and in the solved form it was derived from
//! ([`default_solution`]). The two boards hold the same shapes and differ
//! only in orientations, which makes them convenient fixtures for the win
//! detector, the solver and the front-end.

use crate::{Board, Direction, Piece, Shape};

const NB_ROWS: usize = 5;
const NB_COLS: usize = 5;

#[rustfmt::skip]
const SHAPES: [Shape; NB_ROWS * NB_COLS] = {
    use Shape::{Corner as C, Endpoint as N, Segment as S, Tee as T};
    [
        C, N, N, C, N,
        T, T, T, T, T,
        N, N, T, N, S,
        N, T, T, C, S,
        N, T, N, N, N,
    ]
};

#[rustfmt::skip]
const PUZZLE_ORIENTATIONS: [Direction; NB_ROWS * NB_COLS] = {
    use Direction::{East as E, North as N, South as S, West as W};
    [
        W, N, W, N, S,
        S, W, N, E, E,
        E, N, W, W, E,
        S, S, N, W, N,
        E, W, S, E, S,
    ]
};

#[rustfmt::skip]
const SOLUTION_ORIENTATIONS: [Direction; NB_ROWS * NB_COLS] = {
    use Direction::{East as E, North as N, South as S, West as W};
    [
        E, W, E, S, S,
        E, S, S, N, W,
        N, N, E, W, S,
        E, S, N, S, N,
        E, N, W, N, N,
    ]
};

fn build(orientations: &[Direction; NB_ROWS * NB_COLS]) -> Board {
    let pieces = SHAPES
        .iter()
        .zip(orientations)
        .map(|(&shape, &orientation)| Piece::new(shape, orientation))
        .collect();
    Board::from_pieces(NB_ROWS, NB_COLS, false, pieces)
        .expect("sample dimensions match the piece table")
}

/// Returns the 5×5 starter puzzle (scrambled, not won).
///
/// ```
/// use pipelace_core::samples;
///
/// let puzzle = samples::default_puzzle();
/// assert_eq!(puzzle.nb_rows(), 5);
/// assert!(!puzzle.is_won());
/// ```
#[must_use]
pub fn default_puzzle() -> Board {
    build(&PUZZLE_ORIENTATIONS)
}

/// Returns the solved form of the 5×5 starter puzzle.
///
/// ```
/// use pipelace_core::samples;
///
/// assert!(samples::default_solution().is_won());
/// ```
#[must_use]
pub fn default_solution() -> Board {
    build(&SOLUTION_ORIENTATIONS)
}
