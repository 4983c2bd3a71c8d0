//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::win::{Arrangement, HAND_SIZE, find_winning_arrangement};

/// Hard cap on the number of cards a hand may hold.
pub const MAX_CARDS_PER_PLAYER: usize = HAND_SIZE + 1;

/// A player's hand.
///
/// Card order is meaningful: it is the player's own arrangement and is only
/// changed by [`Hand::move_card`], by drawing (appends) and by discarding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Moves the card at `from` so that it ends up at `to`.
    ///
    /// Returns `false`, leaving the hand untouched, if either index is out of
    /// range.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        let len = self.cards.len();
        if from >= len || to >= len {
            return false;
        }

        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand is at the card cap.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_CARDS_PER_PLAYER
    }

    /// Returns whether the hand satisfies the winning condition.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.arrangement().is_some()
    }

    /// Returns a winning decomposition of the hand, if any.
    #[must_use]
    pub fn arrangement(&self) -> Option<Arrangement> {
        find_winning_arrangement(&self.cards)
    }

    /// Clears the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
