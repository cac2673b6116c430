use crate::{Board, Direction, DirectionSet, Piece};

/// The consistency state of one board edge, as seen from one of its sides.
///
/// A board edge is the pair of opposing half-edges between two adjacent
/// squares. The edge is consistent when both half-edges agree: either both
/// carry a connector or neither does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    /// Both facing half-edges carry a connector.
    OpenOpen,
    /// Neither facing half-edge carries a connector.
    ClosedClosed,
    /// Exactly one of the facing half-edges carries a connector.
    Mismatch,
    /// There is no adjacent square in that direction (boundary of a
    /// non-wrapping board). Never a mismatch.
    NoNeighbor,
}

impl EdgeStatus {
    /// Returns `true` for [`EdgeStatus::Mismatch`].
    #[must_use]
    #[inline]
    pub const fn is_mismatch(self) -> bool {
        matches!(self, Self::Mismatch)
    }
}

impl Board {
    /// Returns `true` if the piece at `(row, col)` exposes a connector
    /// towards `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn has_half_edge(&self, row: usize, col: usize, direction: Direction) -> bool {
        self.piece(row, col).has_half_edge(direction)
    }

    /// Evaluates the edge leaving `(row, col)` towards `direction`.
    ///
    /// The neighbor is resolved through [`neighbor`](Board::neighbor), so
    /// wrap-around pairs are evaluated like interior ones.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use pipelace_core::{Board, Direction, EdgeStatus, Piece, Shape};
    ///
    /// let pieces = vec![
    ///     Piece::new(Shape::Segment, Direction::East),
    ///     Piece::new(Shape::Segment, Direction::East),
    /// ];
    /// let mut board = Board::from_pieces(1, 2, false, pieces)?;
    /// assert_eq!(board.check_edge(0, 0, Direction::East), EdgeStatus::OpenOpen);
    /// assert_eq!(board.check_edge(0, 0, Direction::West), EdgeStatus::NoNeighbor);
    ///
    /// board.rotate_piece(0, 1, 1);
    /// assert_eq!(board.check_edge(0, 0, Direction::East), EdgeStatus::Mismatch);
    /// # Ok::<(), pipelace_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn check_edge(&self, row: usize, col: usize, direction: Direction) -> EdgeStatus {
        let open = self.has_half_edge(row, col, direction);
        let Some((nrow, ncol)) = self.neighbor(row, col, direction) else {
            return EdgeStatus::NoNeighbor;
        };
        let neighbor_open = self.has_half_edge(nrow, ncol, direction.opposite());
        match (open, neighbor_open) {
            (true, true) => EdgeStatus::OpenOpen,
            (false, false) => EdgeStatus::ClosedClosed,
            _ => EdgeStatus::Mismatch,
        }
    }

    /// Returns `true` if no edge of the board is mismatched.
    ///
    /// Every `(square, direction)` pair is evaluated; checking each edge
    /// from both sides is idempotent.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.positions().all(|(row, col)| {
            Direction::ALL
                .into_iter()
                .all(|direction| !self.check_edge(row, col, direction).is_mismatch())
        })
    }

    /// The wiring actually realized around `(row, col)`: the directions in
    /// which the square is connected to a partner, plus its boundary
    /// half-edges (which pair with nothing and are accepted as-is).
    fn wiring(&self, row: usize, col: usize) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|&direction| match self.check_edge(row, col, direction) {
                EdgeStatus::OpenOpen => true,
                EdgeStatus::NoNeighbor => self.has_half_edge(row, col, direction),
                EdgeStatus::ClosedClosed | EdgeStatus::Mismatch => false,
            })
            .collect()
    }

    /// Returns `true` if every square's realized wiring matches its
    /// declared shape.
    ///
    /// The wiring pattern around each square is re-derived from the edges
    /// it actually forms, and the piece geometry that pattern describes
    /// must have the declared shape. A segment sitting in a tee-shaped
    /// wiring pattern, or an endpoint whose only connector faces a blank
    /// square, makes the board ill-paired. Blank squares pass trivially.
    #[must_use]
    pub fn is_well_paired(&self) -> bool {
        self.positions().all(|(row, col)| {
            Piece::from_open_directions(self.wiring(row, col)).shape() == self.shape(row, col)
        })
    }

    /// Returns `true` if the puzzle is solved.
    ///
    /// A board is won when it is [connected](Board::is_connected) (no
    /// mismatched edge) and [well paired](Board::is_well_paired) (every
    /// shape realizes exactly its own wiring). A board with no connectors
    /// at all, such as a freshly constructed blank board, is vacuously
    /// won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.is_connected() && self.is_well_paired()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Shape, samples};

    use super::*;

    fn segment_line() -> Board {
        let pieces = vec![
            Piece::new(Shape::Segment, Direction::East),
            Piece::new(Shape::Segment, Direction::East),
        ];
        Board::from_pieces(1, 2, false, pieces).unwrap()
    }

    #[test]
    fn test_blank_boards_are_vacuously_won() {
        for (rows, cols, wrapping) in [(1, 2, false), (5, 5, true), (3, 7, false)] {
            let board = Board::new(rows, cols, wrapping).unwrap();
            assert!(board.is_connected());
            assert!(board.is_well_paired());
            assert!(board.is_won());
        }
    }

    #[test]
    fn test_segment_line_is_won() {
        let board = segment_line();
        assert!(board.is_won());
    }

    #[test]
    fn test_rotating_either_segment_breaks_connection() {
        for col in 0..2 {
            let mut board = segment_line();
            board.rotate_piece(0, col, 1);
            assert!(!board.is_connected());
            assert!(!board.is_won());
        }
    }

    #[test]
    fn test_check_edge_statuses() {
        let mut board = Board::new(2, 2, false).unwrap();
        board.set_piece(0, 0, Piece::new(Shape::Endpoint, Direction::East));
        board.set_piece(0, 1, Piece::new(Shape::Endpoint, Direction::West));

        assert_eq!(board.check_edge(0, 0, Direction::East), EdgeStatus::OpenOpen);
        assert_eq!(board.check_edge(0, 1, Direction::West), EdgeStatus::OpenOpen);
        assert_eq!(
            board.check_edge(0, 0, Direction::South),
            EdgeStatus::ClosedClosed
        );
        assert_eq!(board.check_edge(0, 0, Direction::North), EdgeStatus::NoNeighbor);

        board.set_piece(1, 0, Piece::new(Shape::Endpoint, Direction::North));
        board.set_piece(0, 0, Piece::new(Shape::Endpoint, Direction::North));
        assert_eq!(board.check_edge(1, 0, Direction::North), EdgeStatus::Mismatch);
        assert_eq!(board.check_edge(0, 0, Direction::South), EdgeStatus::Mismatch);
    }

    #[test]
    fn test_check_edge_across_the_wrap_seam() {
        let mut board = Board::new(1, 3, true).unwrap();
        board.set_piece(0, 0, Piece::new(Shape::Segment, Direction::East));
        board.set_piece(0, 1, Piece::new(Shape::Segment, Direction::East));
        board.set_piece(0, 2, Piece::new(Shape::Segment, Direction::East));
        assert_eq!(board.check_edge(0, 2, Direction::East), EdgeStatus::OpenOpen);
        assert!(board.is_won());

        board.rotate_piece(0, 0, 1);
        assert_eq!(board.check_edge(0, 2, Direction::East), EdgeStatus::Mismatch);
        assert!(!board.is_connected());
    }

    #[test]
    fn test_endpoint_facing_blank_square_is_ill_paired() {
        let mut board = Board::new(1, 2, false).unwrap();
        board.set_piece(0, 0, Piece::new(Shape::Endpoint, Direction::East));
        // The connector faces the blank square: mismatch and ill-paired.
        assert!(!board.is_connected());
        assert!(!board.is_well_paired());

        // Turned towards the boundary it pairs with nothing, which is fine.
        board.set_orientation(0, 0, Direction::West);
        assert!(board.is_won());
    }

    #[test]
    fn test_sample_puzzle_and_solution() {
        let puzzle = samples::default_puzzle();
        assert!(!puzzle.is_connected());
        assert!(!puzzle.is_well_paired());
        assert!(!puzzle.is_won());

        let solution = samples::default_solution();
        assert!(solution.is_connected());
        assert!(solution.is_well_paired());
        assert!(solution.is_won());

        assert!(puzzle.eq_ignoring_orientation(&solution));
        assert_ne!(puzzle, solution);
    }

    #[test]
    fn test_mismatched_segments_break_the_solved_board() {
        let mut board = samples::default_solution();
        board.set_piece(3, 3, Piece::new(Shape::Segment, Direction::West));
        board.set_piece(4, 3, Piece::new(Shape::Segment, Direction::East));
        assert!(!board.is_connected());
        assert!(!board.is_won());
    }

    #[test]
    fn test_blanking_a_solved_square_is_ill_paired() {
        let mut board = samples::default_solution();
        board.set_shape(2, 2, Shape::Empty);
        assert!(!board.is_well_paired());
    }

    #[test]
    fn test_shape_swaps_on_the_solved_board_are_ill_paired() {
        // A tee in a segment's wiring (and vice versa) is rejected even
        // though the edge degrees could locally look plausible.
        let mut board = samples::default_solution();
        board.set_shape(2, 4, Shape::Tee);
        assert!(!board.is_well_paired());

        let mut board = samples::default_solution();
        board.set_shape(1, 2, Shape::Segment);
        assert!(!board.is_well_paired());
    }
}
