//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is empty.
    #[error("empty card token")]
    Empty,
    /// The rank part of the token is not one of `A`, `2`..`10`, `J`, `Q`, `K`.
    #[error("invalid card rank")]
    InvalidRank,
    /// The last character is not one of `♠`, `♥`, `♦`, `♣`.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Player count is zero or exceeds the number of seats.
    #[error("invalid player count")]
    InvalidPlayerCount,
    /// The deck cannot cover the initial deal.
    #[error("not enough cards to deal")]
    NotEnoughCards,
}

impl From<DealError> for StartError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::NotEnoughCards => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur during player actions.
///
/// A rejected action leaves the table unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No game in progress (not started, or already won).
    #[error("no game in progress")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckEmpty,
    /// Hand already holds the maximum number of cards.
    #[error("hand is at the card limit")]
    HandSizeCap,
    /// Hand is too small to discard.
    #[error("cannot discard at this hand size")]
    InvalidDiscardState,
    /// Hand is not 13 cards, or it is a winning hand that must be declared.
    #[error("cannot skip at this point")]
    InvalidSkipState,
    /// Hand is not a 13-card winning hand.
    #[error("hand does not satisfy the winning condition")]
    InvalidDeclareState,
    /// Card index is outside the hand.
    #[error("card index out of range")]
    IndexOutOfRange,
}
