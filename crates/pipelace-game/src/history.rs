use pipelace_core::Direction;

/// One recorded rotation: where it happened, by how much, and the
/// orientation it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Move {
    /// Row of the rotated piece.
    pub(crate) row: usize,
    /// Column of the rotated piece.
    pub(crate) col: usize,
    /// Signed number of clockwise quarter-turns played.
    pub(crate) quarter_turns: i32,
    /// Orientation of the piece before the move.
    pub(crate) previous: Direction,
}

/// Move-based undo/redo history.
///
/// Played moves accumulate on the undo stack; undoing shifts them to the
/// redo stack. Playing a new move drops the redo branch, so redo only ever
/// replays the line actually being explored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MoveHistory {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a freshly played move and clears the redo branch.
    pub(crate) fn push(&mut self, mv: Move) {
        self.undo.push(mv);
        self.redo.clear();
    }

    /// Pops the most recent move for undoing.
    pub(crate) fn pop_undo(&mut self) -> Option<Move> {
        let mv = self.undo.pop()?;
        self.redo.push(mv);
        Some(mv)
    }

    /// Pops the most recently undone move for replaying.
    pub(crate) fn pop_redo(&mut self) -> Option<Move> {
        let mv = self.redo.pop()?;
        self.undo.push(mv);
        Some(mv)
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize) -> Move {
        Move {
            row,
            col: 0,
            quarter_turns: 1,
            previous: Direction::North,
        }
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = MoveHistory::new();
        history.push(mv(1));
        history.push(mv(2));

        assert_eq!(history.pop_undo(), Some(mv(2)));
        assert_eq!(history.pop_undo(), Some(mv(1)));
        assert_eq!(history.pop_undo(), None);

        assert_eq!(history.pop_redo(), Some(mv(1)));
        assert_eq!(history.pop_redo(), Some(mv(2)));
        assert_eq!(history.pop_redo(), None);
    }

    #[test]
    fn test_push_drops_redo_branch() {
        let mut history = MoveHistory::new();
        history.push(mv(1));
        history.push(mv(2));

        assert!(history.pop_undo().is_some());
        assert!(history.can_redo());

        history.push(mv(3));
        assert!(!history.can_redo());
        assert_eq!(history.pop_undo(), Some(mv(3)));
        assert_eq!(history.pop_undo(), Some(mv(1)));
    }

    #[test]
    fn test_clear_resets_both_stacks() {
        let mut history = MoveHistory::new();
        history.push(mv(1));
        assert!(history.pop_undo().is_some());

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
