use std::fmt;

use derive_more::{Display, Error};

use crate::{Direction, DirectionSet};

/// The geometry class of a puzzle piece.
///
/// Together with an orientation, a shape determines which of the four faces
/// of a square carry a connector (an "open half-edge"). The table below
/// lists the open faces of each shape when oriented north; rotating the
/// piece rotates the whole pattern.
///
/// | shape      | open faces (north-oriented) |
/// |------------|-----------------------------|
/// | `Empty`    | (none)                      |
/// | `Endpoint` | N                           |
/// | `Segment`  | N, S                        |
/// | `Corner`   | N, E                        |
/// | `Tee`      | W, N, E                     |
/// | `Cross`    | N, E, S, W                  |
///
/// # Example
///
/// ```
/// use pipelace_core::{Direction, Shape};
///
/// let corner = Shape::Corner.open_directions(Direction::East);
/// assert!(corner.contains(Direction::East));
/// assert!(corner.contains(Direction::South));
/// assert_eq!(corner.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A blank square with no connectors. Never rotated, never compared as
    /// a real piece.
    #[default]
    Empty,
    /// A terminal with a single connector.
    Endpoint,
    /// A straight pipe with two opposite connectors.
    Segment,
    /// An elbow with two adjacent connectors.
    Corner,
    /// A three-way junction; only the face opposite its orientation is
    /// closed.
    Tee,
    /// A four-way junction, open on every face in every orientation.
    Cross,
}

impl Shape {
    /// All shapes, in the order of the wire encoding table.
    pub const ALL: [Self; 6] = [
        Self::Empty,
        Self::Endpoint,
        Self::Segment,
        Self::Corner,
        Self::Tee,
        Self::Cross,
    ];

    /// The number of shapes.
    pub const COUNT: usize = 6;

    /// Open faces of this shape when oriented north.
    const fn base_open_directions(self) -> DirectionSet {
        // Bit i is the direction with clockwise index i (north = bit 0).
        let bits = match self {
            Self::Empty => 0b0000,
            Self::Endpoint => 0b0001,
            Self::Segment => 0b0101,
            Self::Corner => 0b0011,
            Self::Tee => 0b1011,
            Self::Cross => 0b1111,
        };
        match DirectionSet::try_from_bits(bits) {
            Some(set) => set,
            None => unreachable!(),
        }
    }

    /// Returns the set of open faces of this shape under `orientation`.
    #[must_use]
    pub fn open_directions(self, orientation: Direction) -> DirectionSet {
        #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let turns = orientation.index() as i32;
        self.base_open_directions().rotated(turns)
    }

    /// Returns the number of connectors this shape exposes (0-4).
    #[must_use]
    pub const fn nb_half_edges(self) -> usize {
        self.base_open_directions().len()
    }

    /// Returns `true` for [`Shape::Empty`].
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the orientations that produce distinct geometry for this
    /// shape.
    ///
    /// A cross looks the same in every orientation and a segment repeats
    /// after a half-turn, so exhaustive search only needs to try the
    /// orientations listed here.
    ///
    /// ```
    /// use pipelace_core::Shape;
    ///
    /// assert_eq!(Shape::Cross.distinct_orientations().len(), 1);
    /// assert_eq!(Shape::Segment.distinct_orientations().len(), 2);
    /// assert_eq!(Shape::Tee.distinct_orientations().len(), 4);
    /// ```
    #[must_use]
    pub const fn distinct_orientations(self) -> &'static [Direction] {
        match self {
            Self::Empty => &[],
            Self::Cross => &[Direction::North],
            Self::Segment => &[Direction::North, Direction::East],
            Self::Endpoint | Self::Corner | Self::Tee => &Direction::ALL,
        }
    }

    /// Returns the single-character code used by the board text format.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => 'E',
            Self::Endpoint => 'N',
            Self::Segment => 'S',
            Self::Corner => 'C',
            Self::Tee => 'T',
            Self::Cross => 'X',
        }
    }

    /// Parses a single-character shape code from the board text format.
    ///
    /// # Errors
    ///
    /// Returns [`ParseShapeError`] if `ch` is not one of `E`, `N`, `S`,
    /// `C`, `T`, `X`.
    pub const fn try_from_char(ch: char) -> Result<Self, ParseShapeError> {
        match ch {
            'E' => Ok(Self::Empty),
            'N' => Ok(Self::Endpoint),
            'S' => Ok(Self::Segment),
            'C' => Ok(Self::Corner),
            'T' => Ok(Self::Tee),
            'X' => Ok(Self::Cross),
            _ => Err(ParseShapeError { ch }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "empty",
            Self::Endpoint => "endpoint",
            Self::Segment => "segment",
            Self::Corner => "corner",
            Self::Tee => "tee",
            Self::Cross => "cross",
        })
    }
}

/// Error returned when a character is not a valid shape code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("unknown shape character {ch:?}")]
pub struct ParseShapeError {
    /// The offending character.
    pub ch: char,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_edge_counts() {
        assert_eq!(Shape::Empty.nb_half_edges(), 0);
        assert_eq!(Shape::Endpoint.nb_half_edges(), 1);
        assert_eq!(Shape::Segment.nb_half_edges(), 2);
        assert_eq!(Shape::Corner.nb_half_edges(), 2);
        assert_eq!(Shape::Tee.nb_half_edges(), 3);
        assert_eq!(Shape::Cross.nb_half_edges(), 4);
    }

    #[test]
    fn test_cross_is_open_everywhere() {
        for orientation in Direction::ALL {
            for direction in Direction::ALL {
                assert!(Shape::Cross.open_directions(orientation).contains(direction));
            }
        }
    }

    #[test]
    fn test_empty_is_closed_everywhere() {
        for orientation in Direction::ALL {
            assert!(Shape::Empty.open_directions(orientation).is_empty());
        }
    }

    #[test]
    fn test_tee_closes_the_face_behind_it() {
        for orientation in Direction::ALL {
            let open = Shape::Tee.open_directions(orientation);
            assert!(!open.contains(orientation.opposite()));
            assert_eq!(open.len(), 3);
        }
    }

    #[test]
    fn test_corner_opens_two_adjacent_faces() {
        for orientation in Direction::ALL {
            let open = Shape::Corner.open_directions(orientation);
            assert!(open.contains(orientation));
            assert!(open.contains(orientation.rotated(1)));
            assert_eq!(open.len(), 2);
        }
    }

    #[test]
    fn test_segment_repeats_after_half_turn() {
        for orientation in Direction::ALL {
            assert_eq!(
                Shape::Segment.open_directions(orientation),
                Shape::Segment.open_directions(orientation.opposite())
            );
        }
        assert_ne!(
            Shape::Segment.open_directions(Direction::North),
            Shape::Segment.open_directions(Direction::East)
        );
    }

    #[test]
    fn test_char_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::try_from_char(shape.to_char()), Ok(shape));
        }
        assert_eq!(Shape::try_from_char('Z'), Err(ParseShapeError { ch: 'Z' }));
    }

    #[test]
    fn test_distinct_orientations_give_distinct_geometry() {
        for shape in Shape::ALL {
            let orientations = shape.distinct_orientations();
            for (i, &a) in orientations.iter().enumerate() {
                for &b in &orientations[i + 1..] {
                    assert_ne!(shape.open_directions(a), shape.open_directions(b));
                }
            }
        }
    }
}
