//! Game engine and state management.

use alloc::vec::Vec;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::{Deck, decks_for_players};
use crate::error::StartError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::{MAX_PLAYERS, Player, Seat};
use crate::snapshot::Snapshot;
use crate::win::{Arrangement, HAND_SIZE};

mod actions;
pub mod state;

pub use state::{Discard, GameState};

/// A Concor table: players, the shared deck, the discard log and the turn.
///
/// The game exclusively owns all table state. Commands take `&mut self`,
/// either apply fully or are rejected with no effect, and leave the
/// "can declare" flag recomputed for the active player.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Cards left to draw.
    deck: Deck,
    /// Players in turn order.
    players: Vec<Player>,
    /// Discard log, oldest first.
    discards: Vec<Discard>,
    /// Index of the active player.
    current: usize,
    /// ID of the player who declared.
    winner: Option<u8>,
    /// Whether the active player holds a 13-card winning hand.
    can_declare: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use concor::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.start_game(2).unwrap();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// assert_eq!(game.cards_remaining(), 52 - 2 * 13);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::NotStarted,
            deck: Deck::new(),
            players: Vec::new(),
            discards: Vec::new(),
            current: 0,
            winner: None,
            can_declare: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a fresh game with a newly shuffled deck.
    ///
    /// Any game already on the table is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if `player_count` is zero or exceeds [`MAX_PLAYERS`],
    /// or if the configured deck count cannot cover the deal.
    pub fn start_game(&mut self, player_count: usize) -> Result<(), StartError> {
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(StartError::InvalidPlayerCount);
        }

        let decks = self
            .options
            .decks
            .map_or_else(|| decks_for_players(player_count), usize::from);
        let deck = Deck::with_decks(decks, &mut self.rng);

        self.start_game_with_deck(player_count, deck)
    }

    /// Starts a fresh game dealing from a caller-supplied deck.
    ///
    /// Cards are dealt from the head of `deck`: the first 13 go to player 1,
    /// the next 13 to player 2, and so on. Useful for replays and scripted
    /// tables.
    ///
    /// # Errors
    ///
    /// Returns an error if `player_count` is zero or exceeds [`MAX_PLAYERS`],
    /// or if `deck` is too short for the deal. The table is left untouched.
    pub fn start_game_with_deck(
        &mut self,
        player_count: usize,
        mut deck: Deck,
    ) -> Result<(), StartError> {
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(StartError::InvalidPlayerCount);
        }

        let mut players: Vec<Player> = Seat::ALL
            .into_iter()
            .take(player_count)
            .zip(1u8..)
            .map(|(seat, id)| Player::new(id, self.options.player_name(id), seat))
            .collect();
        deck.deal(&mut players, HAND_SIZE)?;

        self.deck = deck;
        self.players = players;
        self.discards.clear();
        self.current = 0;
        self.winner = None;
        self.state = GameState::InProgress;
        self.refresh_can_declare();

        info!(
            "game started with {player_count} players, {} cards left to draw",
            self.deck.len()
        );

        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    /// Returns the index of the active player in [`Game::players`].
    #[must_use]
    pub const fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns the active player.
    ///
    /// Returns `None` before the first game is started.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the top of the discard pile.
    #[must_use]
    pub fn last_discard(&self) -> Option<&Discard> {
        self.discards.last()
    }

    /// Returns the full discard log, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Discard] {
        &self.discards
    }

    /// Returns the winner, once a player has declared.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Returns whether the active player may declare.
    #[must_use]
    pub const fn can_declare(&self) -> bool {
        self.can_declare
    }

    /// Returns a winning decomposition of the active player's hand, if any.
    #[must_use]
    pub fn winning_arrangement(&self) -> Option<Arrangement> {
        if !self.can_declare {
            return None;
        }
        self.current_player().and_then(|player| player.hand.arrangement())
    }

    /// Returns an owned copy of the table for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            players: self.players.clone(),
            deck_remaining: self.deck.len(),
            last_discard: self.discards.last().copied(),
            current_player: self.current,
            winner: self.winner,
            can_declare: self.can_declare,
        }
    }

    fn active_hand(&self) -> &Hand {
        &self.players[self.current].hand
    }

    fn active_hand_mut(&mut self) -> &mut Hand {
        &mut self.players[self.current].hand
    }

    fn active_player_id(&self) -> u8 {
        self.players[self.current].id
    }

    /// Recomputes whether the active player holds a declarable hand.
    fn refresh_can_declare(&mut self) {
        self.can_declare = self.state == GameState::InProgress && {
            let hand = self.active_hand();
            hand.len() == HAND_SIZE && hand.is_winning()
        };
    }
}
