//! Game configuration options.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Configuration options for a Concor table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use concor::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(Some(2))
///     .with_player_names(["Ana", "Bo"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Number of 52-card decks.
    /// `None` uses one deck per two players.
    pub decks: Option<u8>,
    /// Display names in seat order. Seats without a name are called
    /// `Player {id}`.
    pub player_names: Vec<String>,
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use concor::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(Some(3));
    /// assert_eq!(options.decks, Some(3));
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: Option<u8>) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the player display names.
    ///
    /// # Example
    ///
    /// ```
    /// use concor::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names(["Ana"]);
    /// assert_eq!(options.player_name(1), "Ana");
    /// assert_eq!(options.player_name(2), "Player 2");
    /// ```
    #[must_use]
    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the display name for the player with the given 1-based ID.
    #[must_use]
    pub fn player_name(&self, id: u8) -> String {
        usize::from(id)
            .checked_sub(1)
            .and_then(|index| self.player_names.get(index))
            .cloned()
            .unwrap_or_else(|| format!("Player {id}"))
    }
}
