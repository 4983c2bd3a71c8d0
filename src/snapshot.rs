//! Read-only table snapshots for front ends.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::{Discard, GameState};
use crate::player::Player;

/// An owned copy of everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// The game state.
    pub state: GameState,
    /// Players in turn order, with their hands.
    pub players: Vec<Player>,
    /// Cards left in the deck.
    pub deck_remaining: usize,
    /// Top of the discard pile.
    pub last_discard: Option<Discard>,
    /// Index of the active player in `players`.
    pub current_player: usize,
    /// ID of the winner, once declared.
    pub winner: Option<u8>,
    /// Whether the active player may declare.
    pub can_declare: bool,
}

impl Snapshot {
    /// Returns the active player.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }
}
