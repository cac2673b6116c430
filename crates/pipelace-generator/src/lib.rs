//! Random board generation.
//!
//! A board is generated by growing a connected pipe network on a blank
//! grid: two facing endpoints seed it, then random (square, face, blank
//! neighbor) candidates extend it one square at a time until the requested
//! number of squares is used, and optional extra edges tie already-used
//! squares together. The grown network is the solution: every connector
//! faces a matching connector by construction. Scrambling its
//! orientations yields the puzzle.
//!
//! All randomness flows through an explicit, seedable generator: the same
//! [`BoardSeed`] always reproduces the same board, on every platform.
//!
//! # Example
//!
//! ```
//! use pipelace_generator::{BoardGenerator, BoardSeed, GenerateOptions};
//!
//! let generator = BoardGenerator::new();
//! let options = GenerateOptions::new(4, 4).nb_empty(2).nb_extra(1);
//!
//! let seed: BoardSeed =
//!     "0000000000000000000000000000000000000000000000000000000000000042"
//!         .parse()?;
//! let board = generator.generate_with_seed(seed, &options)?;
//! assert!(board.solution.is_won());
//! assert!(board.problem.eq_ignoring_orientation(&board.solution));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use pipelace_core::{Board, Direction, Piece, Shape};
use rand::{Rng, RngExt, SeedableRng};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest, Sha256};

/// An opaque 32-byte seed identifying one generated board.
///
/// Seeds display as (and parse from) 64 hexadecimal characters. The
/// generation rng is keyed by the SHA-256 digest of the seed bytes, so
/// even a short human-chosen seed padded with zeros keys the generator
/// uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Draws a fresh seed from operating-system entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill(bytes.as_mut_slice());
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    fn rng(self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut key = [0_u8; 16];
        key.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(key)
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError);
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| ParseSeedError)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError)?;
        }
        Ok(Self(bytes))
    }
}

/// Error returned when a seed string is not 64 hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("board seeds are 64 hexadecimal characters")]
pub struct ParseSeedError;

/// Parameters of one generation run.
///
/// # Example
///
/// ```
/// use pipelace_generator::GenerateOptions;
///
/// let options = GenerateOptions::new(6, 8).wrapping(true).nb_empty(4);
/// assert_eq!(options.nb_rows, 6);
/// assert!(options.wrapping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Number of rows of the generated board.
    pub nb_rows: usize,
    /// Number of columns of the generated board.
    pub nb_cols: usize,
    /// Whether the generated board is toroidal.
    pub wrapping: bool,
    /// Number of squares to leave blank.
    pub nb_empty: usize,
    /// Number of extra edges to add between already-used squares, turning
    /// the grown tree into a denser network.
    pub nb_extra: usize,
}

impl GenerateOptions {
    /// Creates options for a non-wrapping board with no blank squares and
    /// no extra edges.
    #[must_use]
    pub const fn new(nb_rows: usize, nb_cols: usize) -> Self {
        Self {
            nb_rows,
            nb_cols,
            wrapping: false,
            nb_empty: 0,
            nb_extra: 0,
        }
    }

    /// Sets the wrapping flag.
    #[must_use]
    pub const fn wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Sets the number of blank squares.
    #[must_use]
    pub const fn nb_empty(mut self, nb_empty: usize) -> Self {
        self.nb_empty = nb_empty;
        self
    }

    /// Sets the number of extra edges.
    #[must_use]
    pub const fn nb_extra(mut self, nb_extra: usize) -> Self {
        self.nb_extra = nb_extra;
        self
    }
}

/// Error returned when generation parameters are unsatisfiable or the
/// random walk dead-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The grid holds fewer than the two squares a network needs.
    #[display("a {nb_rows}x{nb_cols} board is too small to generate")]
    TooFewCells {
        /// Requested number of rows.
        nb_rows: usize,
        /// Requested number of columns.
        nb_cols: usize,
    },
    /// Too many blank squares were requested.
    #[display("cannot leave {nb_empty} squares blank (at most {max})")]
    TooManyEmpty {
        /// Requested number of blank squares.
        nb_empty: usize,
        /// Largest satisfiable number of blank squares.
        max: usize,
    },
    /// The growth walk ran out of candidate squares before reaching the
    /// requested size.
    #[display("the network ran out of room to grow")]
    Stuck,
}

/// A generated board: the scrambled puzzle, its solution, and the seed
/// that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The puzzle handed to the player (solution with scrambled
    /// orientations).
    pub problem: Board,
    /// The solved network the puzzle was derived from.
    pub solution: Board,
    /// The seed that generated this board.
    pub seed: BoardSeed,
}

/// Random board generator.
///
/// The generator itself is stateless; randomness comes from the seed
/// passed to (or drawn by) each generation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGenerator;

impl BoardGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the options are unsatisfiable or the
    /// growth walk dead-ends; see [`GenerateError`]'s variants.
    pub fn generate(&self, options: &GenerateOptions) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(BoardSeed::random(), options)
    }

    /// Generates the board identified by `seed`.
    ///
    /// Equal seeds and options produce equal boards on every platform.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when the options are unsatisfiable or the
    /// growth walk dead-ends; see [`GenerateError`]'s variants.
    pub fn generate_with_seed(
        &self,
        seed: BoardSeed,
        options: &GenerateOptions,
    ) -> Result<GeneratedBoard, GenerateError> {
        let mut rng = seed.rng();
        let solution = grow_network(&mut rng, options)?;
        let problem = scramble(&solution, &mut rng);
        log::debug!(
            "generated a {}x{} board from seed {seed}",
            options.nb_rows,
            options.nb_cols,
        );
        Ok(GeneratedBoard {
            problem,
            solution,
            seed,
        })
    }
}

/// Re-draws the orientation of every non-blank piece.
///
/// The random source is injected so callers control determinism; blank
/// squares keep their conventional north orientation.
pub fn shuffle_orientation<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    for (row, col) in board.positions() {
        if board.shape(row, col).is_empty() {
            continue;
        }
        let orientation = Direction::ALL[rng.random_range(0..Direction::COUNT)];
        board.set_orientation(row, col, orientation);
    }
}

fn scramble(solution: &Board, rng: &mut Pcg64Mcg) -> Board {
    let mut board = solution.clone();
    // A scramble can land back on the solution; re-draw a bounded number
    // of times so the player actually has something to do.
    for _ in 0..100 {
        shuffle_orientation(&mut board, rng);
        if board != *solution {
            break;
        }
    }
    board
}

fn grow_network(rng: &mut Pcg64Mcg, options: &GenerateOptions) -> Result<Board, GenerateError> {
    let &GenerateOptions {
        nb_rows,
        nb_cols,
        wrapping,
        nb_empty,
        nb_extra,
    } = options;

    let nb_cells = nb_rows.saturating_mul(nb_cols);
    if nb_cells < 2 {
        return Err(GenerateError::TooFewCells { nb_rows, nb_cols });
    }
    if nb_empty > nb_cells - 2 {
        return Err(GenerateError::TooManyEmpty {
            nb_empty,
            max: nb_cells - 2,
        });
    }

    let mut board =
        Board::new(nb_rows, nb_cols, wrapping).expect("dimensions hold at least two squares");

    place_seed_pair(&mut board, rng)?;

    let desired = nb_cells - nb_empty;
    let mut used = 2;
    while used < desired {
        let candidates = growth_candidates(&board);
        if candidates.is_empty() {
            return Err(GenerateError::Stuck);
        }
        let (row, col, direction) = candidates[rng.random_range(0..candidates.len())];
        let (nrow, ncol) = extend_network(&mut board, row, col, direction);
        used += 1;
        log::trace!("grew into ({nrow}, {ncol}), {used}/{desired} squares used");
    }

    for _ in 0..nb_extra {
        let candidates = extra_edge_candidates(&board);
        if candidates.is_empty() {
            break;
        }
        let (row, col, direction) = candidates[rng.random_range(0..candidates.len())];
        add_extra_edge(&mut board, row, col, direction);
    }

    Ok(board)
}

/// Seeds the network with two facing endpoints on adjacent squares.
fn place_seed_pair(board: &mut Board, rng: &mut Pcg64Mcg) -> Result<(), GenerateError> {
    for _ in 0..100 {
        let row = rng.random_range(0..board.nb_rows());
        let col = rng.random_range(0..board.nb_cols());
        let direction = Direction::ALL[rng.random_range(0..Direction::COUNT)];
        let Some((nrow, ncol)) = board.neighbor(row, col, direction) else {
            continue;
        };
        // A wrapping single-row or single-column grid can step onto the
        // same square; a piece cannot pair with itself.
        if (nrow, ncol) == (row, col) {
            continue;
        }
        board.set_piece(row, col, Piece::new(Shape::Endpoint, direction));
        board.set_piece(nrow, ncol, Piece::new(Shape::Endpoint, direction.opposite()));
        return Ok(());
    }
    Err(GenerateError::Stuck)
}

/// All (used square, closed face, blank neighbor) triples the network can
/// grow through.
fn growth_candidates(board: &Board) -> Vec<(usize, usize, Direction)> {
    let mut candidates = Vec::new();
    for (row, col) in board.positions() {
        if board.shape(row, col).is_empty() {
            continue;
        }
        for direction in Direction::ALL {
            if board.has_half_edge(row, col, direction) {
                continue;
            }
            if let Some((nrow, ncol)) = board.neighbor(row, col, direction)
                && board.shape(nrow, ncol).is_empty()
            {
                candidates.push((row, col, direction));
            }
        }
    }
    candidates
}

/// All (used square, closed face, used neighbor with a matching closed
/// face) triples an extra edge can join.
fn extra_edge_candidates(board: &Board) -> Vec<(usize, usize, Direction)> {
    let mut candidates = Vec::new();
    for (row, col) in board.positions() {
        if board.shape(row, col).is_empty() {
            continue;
        }
        for direction in Direction::ALL {
            if board.has_half_edge(row, col, direction) {
                continue;
            }
            if let Some((nrow, ncol)) = board.neighbor(row, col, direction)
                && (nrow, ncol) != (row, col)
                && !board.shape(nrow, ncol).is_empty()
                && !board.has_half_edge(nrow, ncol, direction.opposite())
            {
                candidates.push((row, col, direction));
            }
        }
    }
    candidates
}

/// Opens a face of the piece at `(row, col)` towards `direction`.
fn open_face(board: &mut Board, row: usize, col: usize, direction: Direction) {
    let mut open = board.piece(row, col).open_directions();
    open.insert(direction);
    board.set_piece(row, col, Piece::from_open_directions(open));
}

/// Extends the network into the blank neighbor behind `direction` and
/// returns its coordinates.
fn extend_network(
    board: &mut Board,
    row: usize,
    col: usize,
    direction: Direction,
) -> (usize, usize) {
    open_face(board, row, col, direction);
    let (nrow, ncol) = board
        .neighbor(row, col, direction)
        .expect("growth candidates have a neighbor");
    board.set_piece(nrow, ncol, Piece::new(Shape::Endpoint, direction.opposite()));
    (nrow, ncol)
}

/// Joins two already-used squares across a currently closed edge.
fn add_extra_edge(board: &mut Board, row: usize, col: usize, direction: Direction) {
    open_face(board, row, col, direction);
    let (nrow, ncol) = board
        .neighbor(row, col, direction)
        .expect("extra-edge candidates have a neighbor");
    open_face(board, nrow, ncol, direction.opposite());
}
