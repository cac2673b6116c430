//! Backtracking search over piece orientations.
//!
//! The solver walks the board in row-major order and assigns each
//! non-blank piece one of its geometrically distinct orientations (a cross
//! has one, a segment two, everything else four). A candidate is discarded
//! without recursing as soon as it mismatches a neighbor that the
//! traversal has already decided; full win detection runs once, at the
//! leaves. The same traversal powers both entry points: finding one
//! solution ([`BacktrackSolver::solve`], short-circuiting) and counting
//! all of them ([`BacktrackSolver::count_solutions`], exhaustive).
//!
//! The search always operates on an owned working copy of the caller's
//! board: a failed `solve` leaves the input bit-for-bit untouched, and
//! `count_solutions` never mutates it at all.
//!
//! # Example
//!
//! ```
//! use pipelace_core::samples;
//! use pipelace_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//!
//! let mut board = samples::default_puzzle();
//! assert!(solver.solve(&mut board));
//! assert!(board.is_won());
//!
//! assert!(solver.count_solutions(&samples::default_solution()) >= 1);
//! ```

use pipelace_core::{Board, Direction};
use tinyvec::ArrayVec;

/// Statistics collected during a search.
///
/// # Example
///
/// ```
/// use pipelace_core::samples;
/// use pipelace_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let mut board = samples::default_puzzle();
/// let (solved, stats) = solver.solve_with_stats(&mut board);
/// assert!(solved);
/// assert!(stats.nodes() > 0);
/// assert_eq!(stats.solutions(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: u64,
    solutions: u64,
}

impl SearchStats {
    /// Returns the number of orientation assignments the search tried.
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the number of solved configurations the search reached.
    ///
    /// At most 1 when searching for a single solution; the full solution
    /// count when counting.
    #[must_use]
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }
}

/// Exhaustive solver for pipe-rotation boards.
///
/// The solver itself is stateless; a single instance can be reused across
/// any number of boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Finds any orientation assignment that wins the board.
    ///
    /// On success the board is mutated in place to the solved state and
    /// `true` is returned. On failure the board is left untouched and
    /// `false` is returned; an unsolvable board is an ordinary outcome,
    /// not an error.
    ///
    /// Shapes are never changed, only orientations of non-blank pieces.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.solve_with_stats(board).0
    }

    /// Like [`solve`](BacktrackSolver::solve), also reporting search
    /// statistics.
    pub fn solve_with_stats(&self, board: &mut Board) -> (bool, SearchStats) {
        let mut work = board.clone();
        let mut search = Search::new(&mut work, true);
        let found = search.run();
        let stats = search.stats;
        if found {
            *board = work;
        }
        (found, stats)
    }

    /// Counts every orientation assignment that wins the board.
    ///
    /// The count enumerates assignments over the distinct orientations of
    /// each non-blank piece, so rotational symmetry never inflates it: a
    /// lone cross contributes one configuration, not four. Blank squares
    /// are skipped and contribute nothing. An already-won board counts
    /// itself along with every alternative completion; a board with no
    /// winning assignment counts zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pipelace_core::{Board, Direction, Piece, Shape};
    /// use pipelace_solver::BacktrackSolver;
    ///
    /// // Two facing endpoints: connected through the middle edge, or
    /// // each parked against a boundary (3 x 3 ways).
    /// let pieces = vec![
    ///     Piece::new(Shape::Endpoint, Direction::North),
    ///     Piece::new(Shape::Endpoint, Direction::North),
    /// ];
    /// let board = Board::from_pieces(1, 2, false, pieces)?;
    /// assert_eq!(BacktrackSolver::new().count_solutions(&board), 10);
    /// # Ok::<(), pipelace_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn count_solutions(&self, board: &Board) -> u64 {
        self.count_solutions_with_stats(board).0
    }

    /// Like [`count_solutions`](BacktrackSolver::count_solutions), also
    /// reporting search statistics.
    #[must_use]
    pub fn count_solutions_with_stats(&self, board: &Board) -> (u64, SearchStats) {
        let mut work = board.clone();
        let mut search = Search::new(&mut work, false);
        search.run();
        let stats = search.stats;
        (stats.solutions, stats)
    }
}

/// One in-flight traversal over a working board.
struct Search<'a> {
    board: &'a mut Board,
    /// For each linear index, the directions whose neighbor precedes it in
    /// the traversal. Only those edges can be validated when the square is
    /// assigned; later squares are still undecided. On a non-wrapping
    /// board this is "up and left"; on a wrapping board the last row and
    /// column additionally validate their wrap partners.
    checked: Vec<ArrayVec<[Direction; 4]>>,
    stop_early: bool,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(board: &'a mut Board, stop_early: bool) -> Self {
        let nb_cols = board.nb_cols();
        let checked = board
            .positions()
            .map(|(row, col)| {
                let pos = row * nb_cols + col;
                Direction::ALL
                    .into_iter()
                    .filter(|&direction| {
                        board
                            .neighbor(row, col, direction)
                            .is_some_and(|(nrow, ncol)| nrow * nb_cols + ncol < pos)
                    })
                    .collect()
            })
            .collect();
        Self {
            board,
            checked,
            stop_early,
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self) -> bool {
        self.search(0)
    }

    /// Returns `true` to unwind with the working board left in the solved
    /// state (short-circuit mode only).
    fn search(&mut self, pos: usize) -> bool {
        if pos == self.board.nb_cells() {
            if self.board.is_won() {
                self.stats.solutions += 1;
                return self.stop_early;
            }
            return false;
        }

        let row = pos / self.board.nb_cols();
        let col = pos % self.board.nb_cols();
        let piece = self.board.piece(row, col);
        if piece.is_empty() {
            return self.search(pos + 1);
        }

        let original = piece.orientation();
        for &orientation in piece.shape().distinct_orientations() {
            self.stats.nodes += 1;
            self.board.set_orientation(row, col, orientation);
            if self.consistent_with_decided(pos, row, col) && self.search(pos + 1) {
                return true;
            }
        }
        self.board.set_orientation(row, col, original);
        false
    }

    fn consistent_with_decided(&self, pos: usize, row: usize, col: usize) -> bool {
        self.checked[pos]
            .iter()
            .all(|&direction| !self.board.check_edge(row, col, direction).is_mismatch())
    }
}
