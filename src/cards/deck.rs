//! Standard 52-card deck construction and shuffling.

use crate::cards::card::{Card, CardId, Suit, RANK_ACE, RANK_KING};
use crate::rng::GameRng;

/// Number of cards in a Klondike deck.
pub const DECK_SIZE: usize = 52;

/// Build the full deck in deterministic suit-major, rank-minor order.
///
/// Ids run 0..=51 in that order and are never reassigned afterwards. All
/// cards start face-down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut id = 0u8;
    for suit in Suit::ALL {
        for rank in RANK_ACE..=RANK_KING {
            deck.push(Card::new(CardId(id), suit, rank));
            id += 1;
        }
    }
    deck
}

/// Return a uniformly random permutation of `deck`, leaving the input
/// untouched.
#[must_use]
pub fn shuffled(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut out = deck.to_vec();
    rng.shuffle(&mut out);
    out
}
