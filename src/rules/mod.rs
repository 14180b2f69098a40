//! Pure stacking legality predicates.
//!
//! These functions have no state and no side effects. The engine consults
//! them before every move, and a presentation layer can call them directly
//! to validate a prospective drag without committing anything.

use im::Vector;

use crate::cards::{Card, RANK_ACE, RANK_KING};

/// Can `card` be placed directly onto `on_top_of` in a tableau column?
///
/// An empty column (`None`) accepts only a King. Otherwise the card must be
/// exactly one rank lower and the opposite color.
#[must_use]
pub fn can_stack_on_tableau(card: &Card, on_top_of: Option<&Card>) -> bool {
    match on_top_of {
        None => card.rank == RANK_KING,
        Some(top) => card.rank + 1 == top.rank && card.is_red() != top.is_red(),
    }
}

/// Can `card` be placed onto a foundation whose top card is `foundation_top`?
///
/// An empty foundation (`None`) accepts only an Ace. Otherwise the card must
/// match the suit and be exactly one rank higher.
#[must_use]
pub fn can_stack_on_foundation(card: &Card, foundation_top: Option<&Card>) -> bool {
    match foundation_top {
        None => card.rank == RANK_ACE,
        Some(top) => card.suit == top.suit && card.rank == top.rank + 1,
    }
}

/// The movable build starting at `from` in a tableau column.
///
/// Returns the suffix of `column` from `from` to the top iff every card in
/// it is face-up and each adjacent pair is a legal tableau stack. A build
/// relocates only as a whole; any violation in the run means `None`.
///
/// Out-of-range `from` also yields `None`.
#[must_use]
pub fn tableau_build(column: &Vector<Card>, from: usize) -> Option<Vector<Card>> {
    if from >= column.len() {
        return None;
    }
    let build = column.clone().split_off(from);
    if build.iter().any(|c| !c.face_up) {
        return None;
    }
    for (below, above) in build.iter().zip(build.iter().skip(1)) {
        if !can_stack_on_tableau(above, Some(below)) {
            return None;
        }
    }
    Some(build)
}
