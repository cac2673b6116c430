use derive_more::{Display, Error};

use crate::{Direction, Piece, Shape};

/// Error returned when board construction parameters are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The requested dimensions contain a zero.
    #[display("board dimensions must be positive (got {nb_rows}x{nb_cols})")]
    ZeroDimension {
        /// Requested number of rows.
        nb_rows: usize,
        /// Requested number of columns.
        nb_cols: usize,
    },
    /// The provided piece vector does not cover the grid exactly.
    #[display("expected {expected} pieces, got {actual}")]
    PieceCountMismatch {
        /// `nb_rows * nb_cols`.
        expected: usize,
        /// Length of the provided vector.
        actual: usize,
    },
}

/// A rectangular board of puzzle [`Piece`]s, optionally toroidal.
///
/// The board owns a row-major grid of pieces together with its dimensions
/// and a wrapping flag. Cloning a board is a deep value copy; two boards
/// compare equal when their dimensions, wrapping flag and every piece
/// (shape and orientation) agree.
///
/// Coordinates are `(row, col)` pairs with row 0 at the top. All accessors
/// are bounds-checked and panic on out-of-range coordinates; the only
/// wrapping-aware lookup is [`neighbor`](Board::neighbor).
///
/// # Example
///
/// ```
/// use pipelace_core::{Board, Direction, Shape};
///
/// let mut board = Board::new(3, 3, false)?;
/// board.set_shape(1, 1, Shape::Cross);
/// assert_eq!(board.shape(1, 1), Shape::Cross);
///
/// // Setting a shape leaves the orientation alone.
/// board.set_orientation(1, 1, Direction::West);
/// board.set_shape(1, 1, Shape::Tee);
/// assert_eq!(board.orientation(1, 1), Direction::West);
/// # Ok::<(), pipelace_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    nb_rows: usize,
    nb_cols: usize,
    wrapping: bool,
    pieces: Vec<Piece>,
}

impl Board {
    /// Creates a board with every square blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is zero.
    pub fn new(nb_rows: usize, nb_cols: usize, wrapping: bool) -> Result<Self, BoardError> {
        if nb_rows == 0 || nb_cols == 0 {
            return Err(BoardError::ZeroDimension { nb_rows, nb_cols });
        }
        Ok(Self {
            nb_rows,
            nb_cols,
            wrapping,
            pieces: vec![Piece::EMPTY; nb_rows * nb_cols],
        })
    }

    /// Creates a board from explicit row-major contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is zero,
    /// or [`BoardError::PieceCountMismatch`] if `pieces` does not hold
    /// exactly `nb_rows * nb_cols` entries.
    pub fn from_pieces(
        nb_rows: usize,
        nb_cols: usize,
        wrapping: bool,
        pieces: Vec<Piece>,
    ) -> Result<Self, BoardError> {
        if nb_rows == 0 || nb_cols == 0 {
            return Err(BoardError::ZeroDimension { nb_rows, nb_cols });
        }
        let expected = nb_rows * nb_cols;
        if pieces.len() != expected {
            return Err(BoardError::PieceCountMismatch {
                expected,
                actual: pieces.len(),
            });
        }
        Ok(Self {
            nb_rows,
            nb_cols,
            wrapping,
            pieces,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn nb_rows(&self) -> usize {
        self.nb_rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn nb_cols(&self) -> usize {
        self.nb_cols
    }

    /// Returns the total number of squares.
    #[must_use]
    #[inline]
    pub const fn nb_cells(&self) -> usize {
        self.nb_rows * self.nb_cols
    }

    /// Returns `true` if the board is toroidal (the last row/column is
    /// adjacent to the first).
    #[must_use]
    #[inline]
    pub const fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.nb_rows && col < self.nb_cols,
            "square ({row}, {col}) is outside the {}x{} board",
            self.nb_rows,
            self.nb_cols,
        );
        row * self.nb_cols + col
    }

    /// Returns the piece at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn piece(&self, row: usize, col: usize) -> Piece {
        self.pieces[self.index_of(row, col)]
    }

    /// Returns the shape of the piece at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn shape(&self, row: usize, col: usize) -> Shape {
        self.piece(row, col).shape()
    }

    /// Returns the orientation of the piece at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn orientation(&self, row: usize, col: usize) -> Direction {
        self.piece(row, col).orientation()
    }

    /// Replaces the piece at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set_piece(&mut self, row: usize, col: usize, piece: Piece) {
        let index = self.index_of(row, col);
        self.pieces[index] = piece;
    }

    /// Replaces the shape at `(row, col)`, keeping the orientation.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set_shape(&mut self, row: usize, col: usize, shape: Shape) {
        let orientation = self.orientation(row, col);
        self.set_piece(row, col, Piece::new(shape, orientation));
    }

    /// Replaces the orientation at `(row, col)`, keeping the shape.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn set_orientation(&mut self, row: usize, col: usize, orientation: Direction) {
        let shape = self.shape(row, col);
        self.set_piece(row, col, Piece::new(shape, orientation));
    }

    /// Rotates the piece at `(row, col)` by a signed number of clockwise
    /// quarter-turns. Rotating a blank square is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    pub fn rotate_piece(&mut self, row: usize, col: usize, quarter_turns: i32) {
        let piece = self.piece(row, col).rotated(quarter_turns);
        self.set_piece(row, col, piece);
    }

    /// Returns the coordinates of the square adjacent to `(row, col)` in
    /// `direction`, or `None` when the step leaves a non-wrapping grid.
    ///
    /// On a wrapping board the step is taken modulo the dimensions, so the
    /// neighbor always exists (and may be the square itself on a
    /// single-row or single-column grid).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use pipelace_core::{Board, Direction};
    ///
    /// let board = Board::new(3, 3, true)?;
    /// assert_eq!(board.neighbor(0, 2, Direction::East), Some((0, 0)));
    /// assert_eq!(board.neighbor(2, 0, Direction::South), Some((0, 0)));
    ///
    /// let flat = Board::new(3, 3, false)?;
    /// assert_eq!(flat.neighbor(0, 2, Direction::East), None);
    /// assert_eq!(flat.neighbor(1, 1, Direction::North), Some((0, 1)));
    /// # Ok::<(), pipelace_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let _ = self.index_of(row, col);
        let (dr, dc) = direction.offset();
        let row = Self::step(row, dr, self.nb_rows, self.wrapping)?;
        let col = Self::step(col, dc, self.nb_cols, self.wrapping)?;
        Some((row, col))
    }

    fn step(coord: usize, delta: isize, len: usize, wrapping: bool) -> Option<usize> {
        match delta {
            0 => Some(coord),
            -1 if coord > 0 => Some(coord - 1),
            -1 if wrapping => Some(len - 1),
            1 if coord + 1 < len => Some(coord + 1),
            1 if wrapping => Some(0),
            _ => None,
        }
    }

    /// Compares two boards, optionally ignoring piece orientations.
    ///
    /// Dimensions, the wrapping flag and every square's shape always
    /// participate; this is the full structural equality of `==` when
    /// orientations are compared.
    #[must_use]
    pub fn eq_ignoring_orientation(&self, other: &Self) -> bool {
        self.nb_rows == other.nb_rows
            && self.nb_cols == other.nb_cols
            && self.wrapping == other.wrapping
            && self
                .pieces
                .iter()
                .zip(&other.pieces)
                .all(|(a, b)| a.shape() == b.shape())
    }

    /// Iterates over all `(row, col)` coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let nb_cols = self.nb_cols;
        (0..self.nb_cells()).map(move |index| (index / nb_cols, index % nb_cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 4, false),
            Err(BoardError::ZeroDimension {
                nb_rows: 0,
                nb_cols: 4
            })
        );
        assert_eq!(
            Board::new(4, 0, true),
            Err(BoardError::ZeroDimension {
                nb_rows: 4,
                nb_cols: 0
            })
        );
    }

    #[test]
    fn test_from_pieces_rejects_wrong_count() {
        let pieces = vec![Piece::EMPTY; 5];
        assert_eq!(
            Board::from_pieces(2, 3, false, pieces),
            Err(BoardError::PieceCountMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_new_board_is_blank_and_north() {
        let board = Board::new(3, 5, true).unwrap();
        assert_eq!(board.nb_rows(), 3);
        assert_eq!(board.nb_cols(), 5);
        assert!(board.is_wrapping());
        for (row, col) in board.positions() {
            assert_eq!(board.shape(row, col), Shape::Empty);
            assert_eq!(board.orientation(row, col), Direction::North);
        }
    }

    #[test]
    fn test_set_shape_keeps_orientation() {
        let mut board = Board::new(2, 2, false).unwrap();
        board.set_orientation(0, 1, Direction::West);
        board.set_shape(0, 1, Shape::Segment);
        assert_eq!(board.orientation(0, 1), Direction::West);
    }

    #[test]
    fn test_rotate_piece_is_cyclic() {
        let mut board = Board::new(2, 2, false).unwrap();
        board.set_shape(1, 0, Shape::Endpoint);
        let before = board.orientation(1, 0);
        for _ in 0..4 {
            board.rotate_piece(1, 0, 1);
        }
        assert_eq!(board.orientation(1, 0), before);
        board.rotate_piece(1, 0, -1);
        assert_eq!(board.orientation(1, 0), Direction::West);
    }

    #[test]
    fn test_neighbor_interior_and_boundary() {
        let board = Board::new(2, 3, false).unwrap();
        assert_eq!(board.neighbor(0, 1, Direction::West), Some((0, 0)));
        assert_eq!(board.neighbor(0, 1, Direction::South), Some((1, 1)));
        assert_eq!(board.neighbor(0, 1, Direction::North), None);
        assert_eq!(board.neighbor(1, 2, Direction::East), None);
        assert_eq!(board.neighbor(1, 2, Direction::South), None);
        assert_eq!(board.neighbor(0, 0, Direction::West), None);
    }

    #[test]
    fn test_neighbor_wraps_on_toroidal_boards() {
        let board = Board::new(3, 3, true).unwrap();
        assert_eq!(board.neighbor(0, 2, Direction::East), Some((0, 0)));
        assert_eq!(board.neighbor(2, 0, Direction::South), Some((0, 0)));
        assert_eq!(board.neighbor(0, 0, Direction::North), Some((2, 0)));
        assert_eq!(board.neighbor(0, 0, Direction::West), Some((0, 2)));
    }

    #[test]
    fn test_neighbor_on_single_row_wrapping_grid_is_self() {
        let board = Board::new(1, 2, true).unwrap();
        assert_eq!(board.neighbor(0, 0, Direction::North), Some((0, 0)));
        assert_eq!(board.neighbor(0, 0, Direction::East), Some((0, 1)));
        assert_eq!(board.neighbor(0, 0, Direction::West), Some((0, 1)));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 board")]
    fn test_out_of_range_access_panics() {
        let board = Board::new(2, 2, false).unwrap();
        let _ = board.piece(2, 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Board::new(2, 2, false).unwrap();
        original.set_shape(0, 0, Shape::Cross);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_shape(1, 1, Shape::Tee);
        copy.set_orientation(0, 0, Direction::South);
        assert_eq!(original.shape(1, 1), Shape::Empty);
        assert_eq!(original.orientation(0, 0), Direction::North);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_eq_ignoring_orientation() {
        let mut a = Board::new(2, 2, false).unwrap();
        a.set_shape(0, 0, Shape::Corner);
        let mut b = a.clone();
        b.set_orientation(0, 0, Direction::East);

        assert_ne!(a, b);
        assert!(a.eq_ignoring_orientation(&b));

        b.set_shape(0, 0, Shape::Tee);
        assert!(!a.eq_ignoring_orientation(&b));

        let wrapping = Board::new(2, 2, true).unwrap();
        assert!(!a.eq_ignoring_orientation(&wrapping));
    }
}
