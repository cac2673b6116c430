//! Game session layer for Pipelace.
//!
//! [`Game`] wraps a [`Board`](pipelace_core::Board) with the concerns a
//! front-end needs on top of the core model: validated rotations
//! ([`Game::play_move`]) and a move-based undo/redo history. The core
//! itself stays history-free; this crate is the thin wrapper it expects
//! callers to layer on.

pub use self::game::{Game, GameError};

mod game;
mod history;
