//! Suits, ranks, and the card value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest rank (Ace).
pub const RANK_ACE: u8 = 1;
/// Jack.
pub const RANK_JACK: u8 = 11;
/// Queen.
pub const RANK_QUEEN: u8 = 12;
/// Highest rank (King).
pub const RANK_KING: u8 = 13;

/// One of the four French suits.
///
/// Declaration order fixes the suit-major deck order and the numeric
/// encoding (Spades = 0 .. Clubs = 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Hearts and diamonds are red; spades and clubs are black.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Unicode suit symbol for display.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Single-letter ASCII code (S/H/D/C).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Human-facing label for a rank (1..=13).
///
/// Panics on a rank outside 1..=13; ranks are validated at construction.
#[must_use]
pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => panic!("rank out of range: {rank}"),
    }
}

/// Stable card identity, assigned once at deck creation (0..=51).
///
/// Never reused or recomputed; this is how a card is located across piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

/// A single playing card.
///
/// `id`, `suit`, and `rank` are fixed for the lifetime of the game;
/// `face_up` is the only mutable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    /// 1 = Ace .. 13 = King.
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `rank` is outside 1..=13 (programmer error, not a rule
    /// violation).
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: u8) -> Self {
        assert!((RANK_ACE..=RANK_KING).contains(&rank), "rank out of range: {rank}");
        Self {
            id,
            suit,
            rank,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Compact label such as "A♠" or "10♥", regardless of facing.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.glyph())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_label(self.rank), self.suit.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert!(!Suit::Spades.is_red());
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_card_starts_face_down() {
        let card = Card::new(CardId(0), Suit::Spades, RANK_ACE);
        assert!(!card.face_up);
        assert_eq!(card.rank, 1);
    }

    #[test]
    fn test_labels() {
        let ace = Card::new(CardId(0), Suit::Spades, RANK_ACE);
        let ten = Card::new(CardId(1), Suit::Hearts, 10);
        let king = Card::new(CardId(2), Suit::Clubs, RANK_KING);

        assert_eq!(ace.label(), "A♠");
        assert_eq!(ten.label(), "10♥");
        assert_eq!(king.label(), "K♣");
        assert_eq!(format!("{king}"), "K♣");
    }

    #[test]
    #[should_panic(expected = "rank out of range")]
    fn test_rank_validation() {
        let _ = Card::new(CardId(0), Suit::Spades, 14);
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(CardId(17), Suit::Diamonds, RANK_QUEEN);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
