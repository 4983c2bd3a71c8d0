use log::{debug, info};

use crate::card::Card;
use crate::error::ActionError;
use crate::win::{Arrangement, HAND_SIZE};

use super::{Discard, Game, GameState};

fn rejected(command: &str, err: ActionError) -> ActionError {
    debug!("{command} rejected: {err}");
    err
}

impl Game {
    fn ensure_in_progress(&self, command: &str) -> Result<(), ActionError> {
        if self.state == GameState::InProgress {
            Ok(())
        } else {
            Err(rejected(command, ActionError::InvalidState))
        }
    }

    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!("turn passes to player {}", self.active_player_id());
    }

    /// Draws the top card of the deck into the active player's hand.
    ///
    /// The turn does not advance.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, the hand is already at
    /// the card cap, or the deck is empty.
    pub fn draw(&mut self) -> Result<Card, ActionError> {
        self.ensure_in_progress("draw")?;

        if self.active_hand().is_full() {
            return Err(rejected("draw", ActionError::HandSizeCap));
        }

        let card = self
            .deck
            .draw()
            .ok_or_else(|| rejected("draw", ActionError::DeckEmpty))?;
        self.active_hand_mut().add_card(card);
        self.refresh_can_declare();

        debug!("player {} drew {card}", self.active_player_id());
        Ok(card)
    }

    /// Discards the card at `index` from the active player's hand.
    ///
    /// While the hand is still above 13 cards the same player keeps
    /// discarding. Once it is back to 13 the turn passes, unless the hand
    /// now wins; then the player stays active and must declare.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, the hand holds 13 cards
    /// or fewer, or `index` is out of range.
    pub fn discard(&mut self, index: usize) -> Result<Card, ActionError> {
        self.ensure_in_progress("discard")?;

        if self.active_hand().len() <= HAND_SIZE {
            return Err(rejected("discard", ActionError::InvalidDiscardState));
        }

        let card = self
            .active_hand_mut()
            .remove(index)
            .ok_or_else(|| rejected("discard", ActionError::IndexOutOfRange))?;
        let player_id = self.active_player_id();
        self.discards.push(Discard { player_id, card });
        debug!("player {player_id} discarded {card}");

        let hand = self.active_hand();
        if hand.len() == HAND_SIZE && !hand.is_winning() {
            self.advance_turn();
        }
        self.refresh_can_declare();

        Ok(card)
    }

    /// Passes the turn without changing the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress, the hand does not hold
    /// exactly 13 cards, or the hand wins (it must be declared instead).
    pub fn skip(&mut self) -> Result<(), ActionError> {
        self.ensure_in_progress("skip")?;

        let hand = self.active_hand();
        if hand.len() != HAND_SIZE || hand.is_winning() {
            return Err(rejected("skip", ActionError::InvalidSkipState));
        }

        debug!("player {} skipped", self.active_player_id());
        self.advance_turn();
        self.refresh_can_declare();

        Ok(())
    }

    /// Declares the active player's hand as the winning hand.
    ///
    /// Ends the game; every later command is rejected. Returns the melds
    /// that made the hand win.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress or the hand is not a
    /// 13-card winning hand.
    pub fn declare(&mut self) -> Result<Arrangement, ActionError> {
        self.ensure_in_progress("declare")?;

        let hand = self.active_hand();
        let arrangement = (hand.len() == HAND_SIZE)
            .then(|| hand.arrangement())
            .flatten()
            .ok_or_else(|| rejected("declare", ActionError::InvalidDeclareState))?;

        let player_id = self.active_player_id();
        self.winner = Some(player_id);
        self.state = GameState::Finished;
        self.refresh_can_declare();

        info!("player {player_id} declared a winning hand");
        Ok(arrangement)
    }

    /// Moves a card within the active player's hand.
    ///
    /// Only the order of the hand changes.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress or either index is out of
    /// range.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ActionError> {
        self.ensure_in_progress("reorder")?;

        if !self.active_hand_mut().move_card(from, to) {
            return Err(rejected("reorder", ActionError::IndexOutOfRange));
        }
        self.refresh_can_declare();

        Ok(())
    }
}
