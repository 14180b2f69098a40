//! The game engine: authoritative state, bounded undo, and every legal move.

pub mod game;
pub mod state;
pub mod undo;

pub use game::Game;
pub use state::{GameState, FOUNDATION_PILES, TABLEAU_COLUMNS};
pub use undo::{UndoHistory, MAX_UNDO};
