use crate::{Direction, DirectionSet, Shape};

/// A single square of the board: a [`Shape`] plus its current orientation.
///
/// Pieces are small copyable values; the board stores one per square. An
/// empty piece is conventionally oriented north, although its orientation
/// has no geometric meaning.
///
/// # Example
///
/// ```
/// use pipelace_core::{Direction, Piece, Shape};
///
/// let piece = Piece::new(Shape::Corner, Direction::North);
/// assert!(piece.has_half_edge(Direction::North));
/// assert!(piece.has_half_edge(Direction::East));
/// assert!(!piece.has_half_edge(Direction::South));
///
/// // A full turn is the identity.
/// assert_eq!(piece.rotated(1).rotated(3), piece);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    orientation: Direction,
}

impl Piece {
    /// The empty piece (blank square, north-oriented).
    pub const EMPTY: Self = Self {
        shape: Shape::Empty,
        orientation: Direction::North,
    };

    /// Creates a piece from a shape and an orientation.
    #[must_use]
    pub const fn new(shape: Shape, orientation: Direction) -> Self {
        Self { shape, orientation }
    }

    /// Returns the shape of this piece.
    #[must_use]
    #[inline]
    pub const fn shape(self) -> Shape {
        self.shape
    }

    /// Returns the orientation of this piece.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Direction {
        self.orientation
    }

    /// Returns `true` if this piece is a blank square.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.shape.is_empty()
    }

    /// Returns the set of faces on which this piece exposes a connector.
    #[must_use]
    pub fn open_directions(self) -> DirectionSet {
        self.shape.open_directions(self.orientation)
    }

    /// Returns `true` if this piece exposes a connector towards
    /// `direction`.
    #[must_use]
    pub fn has_half_edge(self, direction: Direction) -> bool {
        self.open_directions().contains(direction)
    }

    /// Returns this piece rotated by a signed number of clockwise
    /// quarter-turns.
    ///
    /// Rotating an empty piece is the identity.
    #[must_use]
    pub fn rotated(self, quarter_turns: i32) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            shape: self.shape,
            orientation: self.orientation.rotated(quarter_turns),
        }
    }

    /// Returns this piece with its orientation replaced.
    #[must_use]
    pub const fn with_orientation(self, orientation: Direction) -> Self {
        Self {
            shape: self.shape,
            orientation,
        }
    }

    /// Builds the unique piece whose open faces are exactly `open`.
    ///
    /// Every one of the 16 direction sets corresponds to exactly one
    /// geometry: no connector is empty, one is an endpoint, two opposite
    /// connectors are a segment, two adjacent ones a corner, three a tee
    /// and four a cross. Shapes with rotational symmetry come back in
    /// their canonical orientation (north for cross and empty, north or
    /// east for segments).
    ///
    /// ```
    /// use pipelace_core::{Direction, DirectionSet, Piece, Shape};
    ///
    /// let wires: DirectionSet =
    ///     [Direction::East, Direction::South, Direction::West]
    ///         .into_iter()
    ///         .collect();
    /// let piece = Piece::from_open_directions(wires);
    /// assert_eq!(piece.shape(), Shape::Tee);
    /// assert_eq!(piece.orientation(), Direction::South);
    /// ```
    #[must_use]
    pub const fn from_open_directions(open: DirectionSet) -> Self {
        let (shape, orientation) = match open.bits() {
            0b0000 => (Shape::Empty, Direction::North),
            0b0001 => (Shape::Endpoint, Direction::North),
            0b0010 => (Shape::Endpoint, Direction::East),
            0b0100 => (Shape::Endpoint, Direction::South),
            0b1000 => (Shape::Endpoint, Direction::West),
            0b0101 => (Shape::Segment, Direction::North),
            0b1010 => (Shape::Segment, Direction::East),
            0b0011 => (Shape::Corner, Direction::North),
            0b0110 => (Shape::Corner, Direction::East),
            0b1100 => (Shape::Corner, Direction::South),
            0b1001 => (Shape::Corner, Direction::West),
            0b1011 => (Shape::Tee, Direction::North),
            0b0111 => (Shape::Tee, Direction::East),
            0b1110 => (Shape::Tee, Direction::South),
            0b1101 => (Shape::Tee, Direction::West),
            0b1111 => (Shape::Cross, Direction::North),
            _ => unreachable!(),
        };
        Self { shape, orientation }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_rotation_has_period_four() {
        let piece = Piece::new(Shape::Tee, Direction::East);
        assert_eq!(piece.rotated(1).rotated(1).rotated(1).rotated(1), piece);
        assert_eq!(piece.rotated(-1), piece.rotated(3));
    }

    #[test]
    fn test_empty_piece_never_rotates() {
        assert_eq!(Piece::EMPTY.rotated(1), Piece::EMPTY);
        assert_eq!(Piece::EMPTY.rotated(-7), Piece::EMPTY);
        assert!(Piece::EMPTY.open_directions().is_empty());
    }

    #[test]
    fn test_rotating_rotates_the_open_faces() {
        let piece = Piece::new(Shape::Corner, Direction::North);
        assert_eq!(
            piece.rotated(1).open_directions(),
            piece.open_directions().rotated(1)
        );
    }

    proptest! {
        #[test]
        fn prop_open_directions_round_trip(bits in 0_u8..16) {
            // from_open_directions is a right inverse of open_directions
            // over all 16 wiring patterns.
            let open = DirectionSet::try_from_bits(bits).unwrap();
            let piece = Piece::from_open_directions(open);
            prop_assert_eq!(piece.open_directions(), open);
        }

        #[test]
        fn prop_derived_pieces_use_canonical_orientations(bits in 0_u8..16) {
            let open = DirectionSet::try_from_bits(bits).unwrap();
            let piece = Piece::from_open_directions(open);
            prop_assert!(
                piece.is_empty()
                    || piece
                        .shape()
                        .distinct_orientations()
                        .contains(&piece.orientation())
            );
        }
    }
}
