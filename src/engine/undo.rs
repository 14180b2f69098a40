//! Bounded undo history of full-state snapshots.

use std::collections::VecDeque;

use super::state::GameState;

/// Maximum number of snapshots retained; the oldest is evicted beyond this.
pub const MAX_UNDO: usize = 200;

/// LIFO history of game state snapshots, bounded at [`MAX_UNDO`].
///
/// A snapshot is pushed before every successful mutating operation and
/// popped (wholesale, never merged) on undo. Not persisted; cleared on
/// every new deal.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    snapshots: VecDeque<GameState>,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::with_capacity(MAX_UNDO),
        }
    }

    /// Append a snapshot, evicting the oldest if at capacity.
    pub fn push(&mut self, snapshot: GameState) {
        if self.snapshots.len() == MAX_UNDO {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Remove and return the newest snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Suit};

    fn state_with_stock_len(n: usize) -> GameState {
        let mut state = GameState::new();
        for i in 0..n {
            state
                .stock
                .push_back(Card::new(CardId(i as u8), Suit::Spades, 1 + (i % 13) as u8));
        }
        state
    }

    #[test]
    fn test_lifo_order() {
        let mut history = UndoHistory::new();
        history.push(state_with_stock_len(1));
        history.push(state_with_stock_len(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().stock.len(), 2);
        assert_eq!(history.pop().unwrap().stock.len(), 1);
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut history = UndoHistory::new();
        for i in 0..MAX_UNDO + 10 {
            history.push(state_with_stock_len(i % 52));
        }
        assert_eq!(history.len(), MAX_UNDO);

        // The newest snapshot is still the last one pushed.
        let newest = history.pop().unwrap();
        assert_eq!(newest.stock.len(), (MAX_UNDO + 9) % 52);
    }

    #[test]
    fn test_clear() {
        let mut history = UndoHistory::new();
        history.push(state_with_stock_len(3));
        history.clear();
        assert!(history.is_empty());
    }
}
