use derive_more::{Display, Error};
use pipelace_core::{Board, Shape};

use crate::history::{Move, MoveHistory};

/// Error returned when a move cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted square is outside the board.
    #[display("square ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Targeted row.
        row: usize,
        /// Targeted column.
        col: usize,
    },
    /// The targeted square is blank; blank squares are never rotatable.
    #[display("square ({row}, {col}) is blank and cannot be rotated")]
    EmptyPiece {
        /// Targeted row.
        row: usize,
        /// Targeted column.
        col: usize,
    },
}

/// A puzzle session: a board plus the move history of the player.
///
/// The session validates moves before applying them (the board's own
/// accessors treat bad coordinates as contract violations and panic) and
/// records every rotation so it can be undone and replayed.
///
/// # Example
///
/// ```
/// use pipelace_core::samples;
/// use pipelace_game::Game;
///
/// let mut game = Game::new(samples::default_puzzle());
/// let before = game.board().orientation(0, 0);
///
/// game.play_move(0, 0, 1)?;
/// assert_ne!(game.board().orientation(0, 0), before);
///
/// assert!(game.undo());
/// assert_eq!(game.board().orientation(0, 0), before);
/// assert!(game.redo());
/// assert_ne!(game.board().orientation(0, 0), before);
/// # Ok::<(), pipelace_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: MoveHistory,
}

impl Game {
    /// Starts a session on the given board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: MoveHistory::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the session and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns `true` if the board is currently won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Rotates the piece at `(row, col)` by a signed number of clockwise
    /// quarter-turns and records the move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the square does not exist and
    /// [`GameError::EmptyPiece`] if it is blank: blank squares carry no
    /// connectors, so rotating one is a caller mistake, not a no-op.
    pub fn play_move(
        &mut self,
        row: usize,
        col: usize,
        quarter_turns: i32,
    ) -> Result<(), GameError> {
        if row >= self.board.nb_rows() || col >= self.board.nb_cols() {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.board.shape(row, col) == Shape::Empty {
            return Err(GameError::EmptyPiece { row, col });
        }

        let previous = self.board.orientation(row, col);
        self.board.rotate_piece(row, col, quarter_turns);
        self.history.push(Move {
            row,
            col,
            quarter_turns,
            previous,
        });
        Ok(())
    }

    /// Reverts the most recent move. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let Some(mv) = self.history.pop_undo() else {
            return false;
        };
        self.board.set_orientation(mv.row, mv.col, mv.previous);
        true
    }

    /// Replays the most recently undone move. Returns `false` when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(mv) = self.history.pop_redo() else {
            return false;
        };
        self.board.rotate_piece(mv.row, mv.col, mv.quarter_turns);
        true
    }

    /// Returns `true` if a move can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if an undone move can be replayed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the board wholesale (for instance after shuffling) and
    /// clears the history, which no longer describes it.
    pub fn reset_board(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
    }
}
