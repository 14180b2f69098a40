//! Card identity and deck construction.
//!
//! A [`Card`] is an immutable identity triple (id, suit, rank) plus a
//! mutable face-up flag. The [`CardId`] assigned at deck creation is the
//! sole stable identity used to track a card across piles.

pub mod card;
pub mod deck;

pub use card::{rank_label, Card, CardId, Suit, RANK_ACE, RANK_JACK, RANK_KING, RANK_QUEEN};
pub use deck::{shuffled, standard_deck, DECK_SIZE};
