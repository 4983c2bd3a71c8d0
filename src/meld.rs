//! Meld classification.
//!
//! A meld is a group of cards that is either a *set* (same rank, balanced
//! colors) or a *run* (same suit, consecutive ranks).

use alloc::vec::Vec;

use crate::card::{Card, Color, Rank};

/// The kind of a valid meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeldKind {
    /// Same rank with a red/black color split.
    Set,
    /// Same suit with consecutive ranks.
    Run,
}

/// Returns whether `cards` form a set.
///
/// A set is 3 or 4 cards of the same rank. Three cards must split 2/1
/// between red and black (either way); four cards must be exactly two red
/// and two black. Suits are not required to be distinct.
///
/// ```
/// use concor::{is_set, parse_cards};
///
/// assert!(is_set(&parse_cards("K♥ K♦ K♣").unwrap()));
/// assert!(!is_set(&parse_cards("K♥ K♦ K♥").unwrap()));
/// ```
#[must_use]
pub fn is_set(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    if !matches!(cards.len(), 3 | 4) || cards.iter().any(|card| card.rank != first.rank) {
        return false;
    }

    let red = cards.iter().filter(|card| card.color() == Color::Red).count();
    match cards.len() {
        3 => red == 1 || red == 2,
        _ => red == 2,
    }
}

/// Returns whether `cards` form a run.
///
/// A run is 3 or more cards of one suit whose values are strictly
/// consecutive. The Ace is low (`A 2 3`) unless that fails, in which case a
/// single Ace may sit above a King (`Q K A`). It never counts both ways.
///
/// ```
/// use concor::{is_run, parse_cards};
///
/// assert!(is_run(&parse_cards("A♠ 2♠ 3♠").unwrap()));
/// assert!(is_run(&parse_cards("K♠ A♠ Q♠").unwrap()));
/// assert!(!is_run(&parse_cards("K♠ A♠ 2♠").unwrap()));
/// ```
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    if cards.len() < 3 || cards.iter().any(|card| card.suit != first.suit) {
        return false;
    }

    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable();

    if is_consecutive(&values) {
        return true;
    }

    let aces = values
        .iter()
        .take_while(|&&value| value == Rank::Ace.value())
        .count();
    if aces != 1 {
        return false;
    }

    // Everything above the Ace must climb to the King.
    let rest = &values[1..];
    is_consecutive(rest) && rest.last() == Some(&Rank::King.value())
}

/// Returns whether `cards` form a set or a run.
#[must_use]
pub fn is_meld(cards: &[Card]) -> bool {
    classify(cards).is_some()
}

/// Classifies `cards` as a set, a run, or neither.
///
/// ```
/// use concor::{classify, parse_cards, MeldKind};
///
/// assert_eq!(classify(&parse_cards("J♦ Q♦ K♦ A♦").unwrap()), Some(MeldKind::Run));
/// assert_eq!(classify(&parse_cards("7♠ 7♥ 7♣ 7♦").unwrap()), Some(MeldKind::Set));
/// assert_eq!(classify(&parse_cards("7♠ 8♥ 9♣").unwrap()), None);
/// ```
#[must_use]
pub fn classify(cards: &[Card]) -> Option<MeldKind> {
    if is_set(cards) {
        Some(MeldKind::Set)
    } else if is_run(cards) {
        Some(MeldKind::Run)
    } else {
        None
    }
}

fn is_consecutive(sorted: &[u8]) -> bool {
    sorted.windows(2).all(|pair| pair[1] == pair[0] + 1)
}
