//! Rule engine for the Concor rummy card game, with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a table of up to four
//! locally simulated players: dealing, drawing, discarding, skipping and
//! declaring a winning hand. The rules it enforces are exposed on their own:
//! [`is_set`] and [`is_run`] classify melds, and [`check_winning_condition`]
//! decides whether a 13-card hand wins.
//!
//! # Example
//!
//! ```
//! use concor::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_game(2).unwrap();
//!
//! let drawn = game.draw().unwrap();
//! let discarded = game.discard(13).unwrap();
//! assert_eq!(drawn, discarded);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combinations;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod meld;
pub mod options;
pub mod player;
pub mod snapshot;
pub mod win;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit, parse_cards};
pub use combinations::combinations;
pub use deck::{Deck, decks_for_players};
pub use error::{ActionError, DealError, ParseCardError, StartError};
pub use game::{Discard, Game, GameState};
pub use hand::{Hand, MAX_CARDS_PER_PLAYER};
pub use meld::{MeldKind, classify, is_meld, is_run, is_set};
pub use options::GameOptions;
pub use player::{MAX_PLAYERS, Player, Seat};
pub use snapshot::Snapshot;
pub use win::{Arrangement, HAND_SIZE, check_winning_condition, find_winning_arrangement};
