use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::options::RoundingMode;
use crate::result::{BustKind, Outcome, RoundResult};

use super::{Round, RoundState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Round {
    fn ensure_settled(&self) -> Result<(), ShowdownError> {
        if self.state == RoundState::Settled {
            Ok(())
        } else {
            Err(ShowdownError::InvalidState)
        }
    }

    /// Dealer plays their hand according to the fixed policy.
    ///
    /// The dealer reveals the hole card and, unless the player has already
    /// busted, draws while the total is below
    /// [`dealer_stands_on`](crate::RoundOptions::dealer_stands_on). Soft and
    /// hard totals are treated alike.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            warn!(state = ?self.state, "dealer play outside the dealer's turn");
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();

        // A busted player has already lost; the dealer keeps two cards.
        if !self.player_hand.is_bust() {
            while self.dealer_hand.value() < self.options.dealer_stands_on {
                let card = self.draw().map_err(ShowdownError::NoCards)?;
                self.dealer_hand.add_card(card);
                drawn_cards.push(card);
            }
        }

        debug!(
            dealer_value = self.dealer_hand.value(),
            drawn = drawn_cards.len(),
            "dealer stands"
        );
        self.state = RoundState::Settled;

        Ok(drawn_cards)
    }

    /// Returns the outcome of a settled round.
    ///
    /// A natural 21 wins outright unless the dealer also finished on 21, in
    /// which case it falls through to the ordinary comparison and pushes.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not settled.
    pub fn outcome(&self) -> Result<Outcome, ShowdownError> {
        self.ensure_settled()?;

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();

        let outcome = if self.was_blackjack && dealer_value != 21 {
            Outcome::Blackjack
        } else if dealer_value > 21 || (player_value <= 21 && player_value > dealer_value) {
            Outcome::Win
        } else if player_value == dealer_value {
            Outcome::Push
        } else {
            Outcome::Lose
        };

        Ok(outcome)
    }

    /// Returns which hand busted in a settled round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not settled.
    pub fn bust_kind(&self) -> Result<BustKind, ShowdownError> {
        self.ensure_settled()?;

        let bust = if self.player_hand.is_bust() {
            BustKind::PlayerBust
        } else if self.dealer_hand.is_bust() {
            BustKind::DealerBust
        } else {
            BustKind::None
        };

        Ok(bust)
    }

    /// Returns the net amount won or lost on the fixed stake.
    fn payout(&self, outcome: Outcome) -> isize {
        let stake = isize::try_from(self.options.stake).unwrap_or(isize::MAX);

        match outcome {
            Outcome::Blackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (self.options.stake as f64) * self.options.blackjack_pays;
                isize::try_from(round_amount(winnings, self.options.rounding_blackjack))
                    .unwrap_or(isize::MAX)
            }
            Outcome::Win => stake,
            Outcome::Push => 0,
            Outcome::Lose => -stake,
        }
    }

    /// Performs the showdown and reports the round result.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not settled.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        let outcome = self.outcome()?;
        let bust = self.bust_kind()?;
        let payout = self.payout(outcome);

        let result = RoundResult {
            outcome,
            player_won: outcome.player_won(),
            was_blackjack: self.was_blackjack,
            bust,
            player_initial_sum: self.player_initial_sum,
            player_card_values: self.player_hand.resolved_values(),
            dealer_card_values: self.dealer_hand.resolved_values(),
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            stake: self.options.stake,
            payout,
        };

        info!(
            outcome = ?result.outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            bust = ?result.bust,
            payout = result.payout,
            "round settled"
        );

        Ok(result)
    }
}
