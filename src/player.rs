//! Players and seats.

use alloc::string::String;

use crate::hand::Hand;

/// A fixed position around the table, used by front ends for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    /// Bottom of the screen; player 1.
    South,
    /// Left; player 2.
    West,
    /// Top; player 3.
    North,
    /// Right; player 4.
    East,
}

impl Seat {
    /// Seats in player order.
    pub const ALL: [Self; 4] = [Self::South, Self::West, Self::North, Self::East];
}

/// Maximum number of players at a table, one per seat.
pub const MAX_PLAYERS: usize = Seat::ALL.len();

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// The player ID, starting at 1.
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Where the player sits.
    pub seat: Seat,
    /// The player's hand.
    pub hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(id: u8, name: String, seat: Seat) -> Self {
        Self {
            id,
            name,
            seat,
            hand: Hand::new(),
        }
    }
}
