//! The move/undo state machine.
//!
//! Every mutating command follows the same contract: validate everything up
//! front with the pure predicates in `rules`, and only then snapshot the
//! current state into the undo history and mutate. An illegal command
//! returns `false` having touched nothing — there is no thrown control flow
//! for ordinary rule violations, so callers can probe moves cheaply.

use log::debug;

use crate::cards::{shuffled, standard_deck, Card};
use crate::rng::GameRng;
use crate::rules::{can_stack_on_foundation, can_stack_on_tableau, tableau_build};

use super::state::{GameState, FOUNDATION_PILES, TABLEAU_COLUMNS};
use super::undo::UndoHistory;

/// A single-player Klondike game.
///
/// Owns the authoritative state, the undo history, and the RNG used for
/// deals. Not shareable across threads without external serialization; all
/// operations are synchronous and run to completion.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    history: UndoHistory,
    rng: GameRng,
}

impl Game {
    /// Create a game with an entropy-seeded deal.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create a game whose deal is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        let mut game = Self {
            state: GameState::new(),
            history: UndoHistory::new(),
            rng,
        };
        game.init();
        game
    }

    /// Adopt an externally assembled state with empty undo history.
    ///
    /// The caller is responsible for handing over a state that satisfies
    /// the pile invariants; the engine preserves them but does not audit
    /// them here. Intended for tests and tooling.
    ///
    /// The RNG is entropy-seeded, so calling [`Game::init`] on the adopted
    /// game deals an unpredictable fresh game; start from
    /// [`Game::with_seed`] when the deal itself must be reproducible.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: UndoHistory::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Shuffle a fresh deck and redeal, discarding all history.
    ///
    /// Column `k` receives `k + 1` face-down cards with only the last one
    /// flipped face-up; the remaining 24 cards become the stock.
    pub fn init(&mut self) {
        let deck = shuffled(&standard_deck(), &mut self.rng);
        let mut state = GameState::new();

        let mut next = 0;
        for (col, column) in state.tableau.iter_mut().enumerate() {
            for n in 0..=col {
                let mut card = deck[next];
                next += 1;
                card.face_up = n == col;
                column.push_back(card);
            }
        }
        state.stock = deck[next..].iter().copied().collect();

        debug!("dealt new game, {} cards in stock", state.stock.len());
        self.state = state;
        self.history.clear();
    }

    // === Commands ===

    /// Draw one card from stock to waste, face-up.
    ///
    /// With an empty stock and a non-empty waste, recycles instead: the
    /// waste becomes the new stock in reverse order (restoring the original
    /// draw order), face-down, and the waste empties. The recycle is itself
    /// a single undoable action. Fails only when both piles are empty.
    pub fn draw_one(&mut self) -> bool {
        if let Some(&top) = self.state.stock.back() {
            self.push_undo();
            self.state.stock.pop_back();
            let mut card = top;
            card.face_up = true;
            self.state.waste.push_back(card);
            return true;
        }
        if self.state.waste.is_empty() {
            return false;
        }
        self.push_undo();
        debug!("stock exhausted, recycling {} waste cards", self.state.waste.len());
        self.state.stock = self
            .state
            .waste
            .iter()
            .rev()
            .map(|&c| {
                let mut card = c;
                card.face_up = false;
                card
            })
            .collect();
        self.state.waste.clear();
        true
    }

    /// Revert to the state before the most recent successful command.
    ///
    /// Replaces the whole state from the newest snapshot; pushes nothing
    /// itself. Fails if the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.state = snapshot;
                true
            }
            None => false,
        }
    }

    /// Move the top waste card to the first foundation that accepts it.
    pub fn move_waste_to_foundation(&mut self) -> bool {
        let Some(&card) = self.state.waste.back() else {
            return false;
        };
        let Some(target) = self.first_accepting_foundation(&card) else {
            return false;
        };
        self.push_undo();
        self.state.waste.pop_back();
        self.state.foundation[target].push_back(card);
        true
    }

    /// Move the top waste card to foundation `index` specifically.
    pub fn move_waste_to_foundation_to(&mut self, index: usize) -> bool {
        if index >= FOUNDATION_PILES {
            return false;
        }
        let Some(&card) = self.state.waste.back() else {
            return false;
        };
        if !can_stack_on_foundation(&card, self.state.foundation[index].back()) {
            return false;
        }
        self.push_undo();
        self.state.waste.pop_back();
        self.state.foundation[index].push_back(card);
        true
    }

    /// Move the top waste card onto tableau column `col`.
    pub fn move_waste_to_tableau(&mut self, col: usize) -> bool {
        if col >= TABLEAU_COLUMNS {
            return false;
        }
        let Some(&card) = self.state.waste.back() else {
            return false;
        };
        if !can_stack_on_tableau(&card, self.state.tableau[col].back()) {
            return false;
        }
        self.push_undo();
        self.state.waste.pop_back();
        self.state.tableau[col].push_back(card);
        true
    }

    /// Move the top card of column `col` to the first accepting foundation.
    ///
    /// `card_index` must name the column's current top card, face-up. If
    /// the removal exposes a face-down card it is flipped immediately.
    pub fn move_tableau_to_foundation(&mut self, col: usize, card_index: usize) -> bool {
        let Some(card) = self.movable_tableau_top(col, card_index) else {
            return false;
        };
        let Some(target) = self.first_accepting_foundation(&card) else {
            return false;
        };
        self.push_undo();
        self.state.tableau[col].pop_back();
        self.state.foundation[target].push_back(card);
        self.flip_exposed(col);
        true
    }

    /// Move the top card of column `col` to foundation `foundation_index`.
    pub fn move_tableau_to_foundation_to(
        &mut self,
        col: usize,
        card_index: usize,
        foundation_index: usize,
    ) -> bool {
        if foundation_index >= FOUNDATION_PILES {
            return false;
        }
        let Some(card) = self.movable_tableau_top(col, card_index) else {
            return false;
        };
        if !can_stack_on_foundation(&card, self.state.foundation[foundation_index].back()) {
            return false;
        }
        self.push_undo();
        self.state.tableau[col].pop_back();
        self.state.foundation[foundation_index].push_back(card);
        self.flip_exposed(col);
        true
    }

    /// Relocate the build starting at `from_index` in `from_col` onto
    /// `to_col` as a unit.
    ///
    /// The suffix must be a legal face-up build, its first card must stack
    /// on the destination top (or be a King onto an empty column), and the
    /// source and destination must differ. An exposed face-down source top
    /// is flipped.
    pub fn move_tableau_to_tableau(
        &mut self,
        from_col: usize,
        from_index: usize,
        to_col: usize,
    ) -> bool {
        if from_col >= TABLEAU_COLUMNS || to_col >= TABLEAU_COLUMNS || from_col == to_col {
            return false;
        }
        let Some(build) = tableau_build(&self.state.tableau[from_col], from_index) else {
            return false;
        };
        let Some(&lead) = build.front() else {
            return false;
        };
        if !can_stack_on_tableau(&lead, self.state.tableau[to_col].back()) {
            return false;
        }
        self.push_undo();
        let moved = self.state.tableau[from_col].split_off(from_index);
        self.state.tableau[to_col].append(moved);
        self.flip_exposed(from_col);
        true
    }

    /// Move the top card of foundation `foundation_index` back onto
    /// tableau column `to_col`.
    pub fn move_foundation_to_tableau(&mut self, foundation_index: usize, to_col: usize) -> bool {
        if foundation_index >= FOUNDATION_PILES || to_col >= TABLEAU_COLUMNS {
            return false;
        }
        let Some(&card) = self.state.foundation[foundation_index].back() else {
            return false;
        };
        if !can_stack_on_tableau(&card, self.state.tableau[to_col].back()) {
            return false;
        }
        self.push_undo();
        self.state.foundation[foundation_index].pop_back();
        self.state.tableau[to_col].push_back(card);
        true
    }

    // === Queries ===

    /// True iff at least one snapshot is available to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of snapshots currently held (at most [`super::MAX_UNDO`]).
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// True iff all four foundations are complete (Ace through King).
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.state.foundation.iter().all(|pile| pile.len() == 13)
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Internals ===

    fn push_undo(&mut self) {
        self.history.push(self.state.clone());
    }

    /// Ascending 0..=3 scan; callers depend on the first-match index.
    fn first_accepting_foundation(&self, card: &Card) -> Option<usize> {
        (0..FOUNDATION_PILES)
            .find(|&i| can_stack_on_foundation(card, self.state.foundation[i].back()))
    }

    /// The column's top card, iff `card_index` names it and it is face-up.
    fn movable_tableau_top(&self, col: usize, card_index: usize) -> Option<Card> {
        if col >= TABLEAU_COLUMNS {
            return None;
        }
        let column = &self.state.tableau[col];
        if column.len().checked_sub(1) != Some(card_index) {
            return None;
        }
        let card = *column.back()?;
        card.face_up.then_some(card)
    }

    fn flip_exposed(&mut self, col: usize) {
        if let Some(top) = self.state.tableau[col].back_mut() {
            if !top.face_up {
                top.face_up = true;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
