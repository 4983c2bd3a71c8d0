//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Players are taking turns.
    InProgress,
    /// A player has declared a winning hand. Terminal.
    Finished,
}

/// An entry in the discard log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discard {
    /// The player who discarded.
    pub player_id: u8,
    /// The discarded card.
    pub card: Card,
}
