//! The five pile collections that make up a game in progress.
//!
//! Piles are `im::Vector`, so cloning a whole `GameState` for an undo
//! snapshot is an O(1) structural share rather than a 52-card deep copy.
//!
//! Invariants maintained by the engine (see `engine::game`):
//! - every one of the 52 card ids lives in exactly one pile;
//! - each foundation is a single suit running 1..k with no gaps;
//! - each tableau column's face-up cards form a contiguous top suffix that
//!   alternates color descending by exactly one rank;
//! - stock cards are face-down, waste cards are face-up.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles (one per suit).
pub const FOUNDATION_PILES: usize = 4;

/// Complete observable game state.
///
/// Fields are public so that tests and tooling can assemble positions
/// directly (via [`crate::Game::from_state`]); during play the engine owns
/// the only mutable copy and hands out `&GameState` borrows, so callers
/// cannot bypass the rule checks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile; the top is the back of the vector.
    pub stock: Vector<Card>,
    /// Face-up pile receiving drawn cards; the top is the back.
    pub waste: Vector<Card>,
    /// Four suit-building piles, each ascending from Ace.
    pub foundation: [Vector<Card>; FOUNDATION_PILES],
    /// Seven playing columns, index 0 = the dealt bottom of the column.
    pub tableau: [Vector<Card>; TABLEAU_COLUMNS],
}

impl GameState {
    /// An empty state with no cards anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top card of a tableau column, or `None` if the column is empty or
    /// the index is out of range.
    #[must_use]
    pub fn tableau_top(&self, col: usize) -> Option<&Card> {
        self.tableau.get(col)?.back()
    }

    /// Top card of a foundation pile, or `None` if empty or out of range.
    #[must_use]
    pub fn foundation_top(&self, index: usize) -> Option<&Card> {
        self.foundation.get(index)?.back()
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation.iter().map(Vector::len).sum::<usize>()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Suit, RANK_ACE};

    #[test]
    fn test_empty_state() {
        let state = GameState::new();
        assert_eq!(state.card_count(), 0);
        assert!(state.tableau_top(0).is_none());
        assert!(state.foundation_top(3).is_none());
        // Out of range is a plain None, not a panic.
        assert!(state.tableau_top(7).is_none());
        assert!(state.foundation_top(4).is_none());
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new();
        let mut ace = Card::new(CardId(0), Suit::Spades, RANK_ACE);
        ace.face_up = true;
        state.foundation[0].push_back(ace);
        state.stock.push_back(Card::new(CardId(1), Suit::Spades, 2));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
