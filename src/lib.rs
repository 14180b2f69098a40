//! # klondike-engine
//!
//! A single-player Klondike solitaire rules engine.
//!
//! The crate owns the game rules and nothing else: deck construction,
//! shuffling, stacking legality, and the move/undo state machine. Rendering,
//! input handling, and serving are the caller's problem — the expected shape
//! is a presentation layer that invokes [`Game`] commands and re-reads
//! [`Game::state`] after each one.
//!
//! ## Design
//!
//! - **Pure rule predicates**: the `rules` module is side-effect free, so a
//!   UI can dry-run a prospective drag with the exact predicates the engine
//!   enforces.
//! - **Boolean outcomes**: every command returns `bool`. Rule violations and
//!   out-of-range indices are ordinary `false` results with state untouched;
//!   nothing panics for an illegal move.
//! - **Snapshot undo**: each successful command pushes a full state snapshot
//!   into a bounded history (capacity 200). Piles are `im::Vector`, so a
//!   snapshot is an O(1) structural clone rather than a deep copy.
//!
//! ## Modules
//!
//! - `cards`: suits, ranks, card identity, deck construction
//! - `rules`: stacking legality and build detection
//! - `engine`: game state, undo history, and the move state machine
//! - `rng`: seedable ChaCha8 randomness for shuffling

pub mod cards;
pub mod engine;
pub mod rng;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{
    rank_label, standard_deck, shuffled, Card, CardId, Suit, DECK_SIZE, RANK_ACE, RANK_JACK,
    RANK_KING, RANK_QUEEN,
};

pub use crate::engine::{Game, GameState, UndoHistory, FOUNDATION_PILES, MAX_UNDO, TABLEAU_COLUMNS};

pub use crate::rng::GameRng;

pub use crate::rules::{can_stack_on_foundation, can_stack_on_tableau, tableau_build};
