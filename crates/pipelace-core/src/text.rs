//! Text serialization of boards.
//!
//! A board serializes to a header line `<rows> <cols> <wrapping:0|1>`
//! followed by one line per row of space-separated two-character tokens,
//! each a shape code followed by a direction code (see
//! [`Shape::to_char`] and [`Direction::to_char`]):
//!
//! ```text
//! 2 3 0
//! CE NW EN
//! TS XN SE
//! ```
//!
//! [`Board`] implements [`FromStr`] and [`Display`](std::fmt::Display) for
//! this format; parsing is whitespace-tolerant between tokens but rejects
//! malformed headers, unknown codes, missing pieces and trailing content.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error, From};

use crate::{
    Board, BoardError, Direction, ParseDirectionError, ParseShapeError, Piece, Shape,
};

/// Error returned when parsing a serialized board fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ParseBoardError {
    /// The input ended before the three header fields were read.
    #[display("missing board header (expected `<rows> <cols> <wrapping>`)")]
    MissingHeader,
    /// A header field was not a valid number or flag.
    #[display("invalid board header field {field:?}")]
    InvalidHeader {
        /// The offending header token.
        field: String,
    },
    /// A piece token was not exactly one shape code and one direction code.
    #[display("invalid piece token {token:?}")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// A piece token held an unknown shape code.
    #[from]
    Shape(ParseShapeError),
    /// A piece token held an unknown direction code.
    #[from]
    Direction(ParseDirectionError),
    /// The input ended before every square was read.
    #[display("expected {expected} pieces, found only {actual}")]
    MissingPieces {
        /// `rows * cols` from the header.
        expected: usize,
        /// Number of piece tokens found.
        actual: usize,
    },
    /// The input continued after the last square.
    #[display("unexpected trailing content {token:?}")]
    TrailingContent {
        /// The first unexpected token.
        token: String,
    },
    /// The header described an invalid board.
    #[from]
    Board(BoardError),
}

fn parse_dimension(token: Option<&str>) -> Result<usize, ParseBoardError> {
    let field = token.ok_or(ParseBoardError::MissingHeader)?;
    field
        .parse()
        .map_err(|_| ParseBoardError::InvalidHeader {
            field: field.to_owned(),
        })
}

fn parse_wrapping(token: Option<&str>) -> Result<bool, ParseBoardError> {
    match token.ok_or(ParseBoardError::MissingHeader)? {
        "0" => Ok(false),
        "1" => Ok(true),
        field => Err(ParseBoardError::InvalidHeader {
            field: field.to_owned(),
        }),
    }
}

fn parse_piece(token: &str) -> Result<Piece, ParseBoardError> {
    let mut chars = token.chars();
    let (Some(shape), Some(direction), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ParseBoardError::InvalidToken {
            token: token.to_owned(),
        });
    };
    Ok(Piece::new(
        Shape::try_from_char(shape)?,
        Direction::try_from_char(direction)?,
    ))
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let nb_rows = parse_dimension(tokens.next())?;
        let nb_cols = parse_dimension(tokens.next())?;
        let wrapping = parse_wrapping(tokens.next())?;

        let expected = nb_rows
            .checked_mul(nb_cols)
            .ok_or(ParseBoardError::InvalidHeader {
                field: format!("{nb_rows} {nb_cols}"),
            })?;
        let mut pieces = Vec::with_capacity(expected);
        for token in tokens.by_ref().take(expected) {
            pieces.push(parse_piece(token)?);
        }
        if pieces.len() < expected {
            return Err(ParseBoardError::MissingPieces {
                expected,
                actual: pieces.len(),
            });
        }
        if let Some(token) = tokens.next() {
            return Err(ParseBoardError::TrailingContent {
                token: token.to_owned(),
            });
        }

        Ok(Board::from_pieces(nb_rows, nb_cols, wrapping, pieces)?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.nb_rows(),
            self.nb_cols(),
            u8::from(self.is_wrapping())
        )?;
        for row in 0..self.nb_rows() {
            for col in 0..self.nb_cols() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let piece = self.piece(row, col);
                write!(
                    f,
                    "{}{}",
                    piece.shape().to_char(),
                    piece.orientation().to_char()
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
