//! Console rendering of boards.

use std::fmt::Write as _;

use pipelace_core::{Board, Direction, Piece, Shape};

/// Returns the glyph drawn for one piece.
fn glyph(piece: Piece) -> char {
    match (piece.shape(), piece.orientation()) {
        (Shape::Empty, _) => ' ',
        (Shape::Endpoint, Direction::North) => '^',
        (Shape::Endpoint, Direction::East) => '>',
        (Shape::Endpoint, Direction::South) => 'v',
        (Shape::Endpoint, Direction::West) => '<',
        (Shape::Segment, Direction::North | Direction::South) => '|',
        (Shape::Segment, Direction::East | Direction::West) => '-',
        (Shape::Corner, Direction::North) => '└',
        (Shape::Corner, Direction::East) => '┌',
        (Shape::Corner, Direction::South) => '┐',
        (Shape::Corner, Direction::West) => '┘',
        (Shape::Tee, Direction::North) => '┴',
        (Shape::Tee, Direction::East) => '├',
        (Shape::Tee, Direction::South) => '┬',
        (Shape::Tee, Direction::West) => '┤',
        (Shape::Cross, _) => '┼',
    }
}

/// Renders the board as a framed grid with row and column indices.
pub(crate) fn render(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("     ");
    for col in 0..board.nb_cols() {
        let _ = write!(out, "{} ", col % 10);
    }
    out.push('\n');
    let _ = writeln!(out, "   +{}+", "-".repeat(2 * board.nb_cols() + 1));

    for row in 0..board.nb_rows() {
        let _ = write!(out, "{:2} |", row % 100);
        for col in 0..board.nb_cols() {
            out.push(' ');
            out.push(glyph(board.piece(row, col)));
        }
        out.push_str(" |\n");
    }

    let _ = writeln!(out, "   +{}+", "-".repeat(2 * board.nb_cols() + 1));
    out
}
