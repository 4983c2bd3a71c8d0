//! Deck construction, shuffling and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::player::Player;

/// Returns how many 52-card decks a table of `player_count` players uses.
///
/// One deck covers two players; there is always at least one deck.
///
/// ```
/// use concor::decks_for_players;
///
/// assert_eq!(decks_for_players(2), 1);
/// assert_eq!(decks_for_players(3), 2);
/// ```
#[must_use]
pub const fn decks_for_players(player_count: usize) -> usize {
    let decks = player_count.div_ceil(2);
    if decks == 0 { 1 } else { decks }
}

/// An ordered pile of cards drawn from the head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Builds and shuffles enough decks for `player_count` players.
    pub fn build<R: Rng + ?Sized>(player_count: usize, rng: &mut R) -> Self {
        Self::with_decks(decks_for_players(player_count), rng)
    }

    /// Builds and shuffles `decks` standard 52-card decks.
    pub fn with_decks<R: Rng + ?Sized>(decks: usize, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self::from(cards)
    }

    /// Removes and returns the card at the head of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Deals `cards_per_player` cards from the head to each player in order.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving everything untouched, if the deck cannot
    /// cover the whole deal.
    pub fn deal(
        &mut self,
        players: &mut [Player],
        cards_per_player: usize,
    ) -> Result<(), DealError> {
        if self.cards.len() < players.len() * cards_per_player {
            return Err(DealError::NotEnoughCards);
        }

        for player in players {
            player.hand.extend(self.cards.drain(..cards_per_player));
        }

        Ok(())
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from the head.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    /// Wraps `cards` as a deck whose head is the first element.
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }
}
