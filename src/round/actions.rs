use tracing::{debug, warn};

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::play::Choice;

use super::{Round, RoundState};

/// Cards needed for the initial deal.
const INITIAL_CARDS: usize = 4;

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            warn!(state = ?self.state, "player action outside the player's turn");
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Ends the player's turn once the hand reaches 21 or busts.
    fn finish_player_turn_if_done(&mut self) {
        if self.player_hand.value() >= 21 {
            self.state = RoundState::DealerTurn;
        }
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// The player's two-card total is recorded here and decides
    /// [`Round::was_blackjack`] for the rest of the round. A player dealt 21
    /// skips straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt or the deck holds
    /// fewer than four cards. The round is left untouched in both cases.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            warn!(state = ?self.state, "deal requested twice");
            return Err(DealError::InvalidState);
        }

        if self.cards_remaining() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.draw().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer_hand.add_card(card);
        }

        self.player_initial_sum = self.player_hand.value();
        self.was_blackjack = self.player_initial_sum == 21;

        debug!(
            player_value = self.player_initial_sum,
            dealer_up_value = self.dealer_hand.visible_value(),
            blackjack = self.was_blackjack,
            "dealt initial cards"
        );

        self.state = RoundState::PlayerTurn;
        self.finish_player_turn_if_done();

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 ends the player's turn, and so does going over it; the
    /// player is not asked again either way.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().map_err(ActionError::NoCards)?;
        self.player_hand.add_card(card);

        debug!(%card, player_value = self.player_hand.value(), "player hits");
        self.finish_player_turn_if_done();

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(player_value = self.player_hand.value(), "player stands");
        self.state = RoundState::DealerTurn;

        Ok(())
    }

    /// Applies a player decision.
    ///
    /// [`Choice::Invalid`] changes nothing, so the caller can simply ask
    /// again. Returns the drawn card for [`Choice::Hit`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or a hit finds the
    /// deck empty.
    pub fn apply(&mut self, choice: Choice) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;

        match choice {
            Choice::Hit => self.hit().map(Some),
            Choice::Stand => self.stand().map(|()| None),
            Choice::Invalid => {
                debug!("ignoring invalid choice");
                Ok(None)
            }
        }
    }
}
