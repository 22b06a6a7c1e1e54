//! Round engine and state management.

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;
use crate::play::TableView;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// One round of blackjack between a single player and the dealer.
///
/// The round owns its deck and both hands. Each phase is advanced by an
/// explicit transition: [`Round::deal`], then [`Round::hit`] /
/// [`Round::stand`] during the player's turn, then [`Round::dealer_play`],
/// after which [`Round::showdown`] reports the result. A finished round is
/// not reused; start the next one with a fresh [`Deck`].
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// Whether the player's first two cards made 21.
    was_blackjack: bool,
    /// Total of the player's first two cards.
    player_initial_sum: u8,
}

impl Round {
    /// Creates a round that will deal from `deck`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Deck, Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(Deck::new(42), RoundOptions::default());
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// ```
    #[must_use]
    pub const fn new(deck: Deck, options: RoundOptions) -> Self {
        Self {
            deck,
            options,
            state: RoundState::Dealing,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            was_blackjack: false,
            player_initial_sum: 0,
        }
    }

    /// Creates a round over a freshly shuffled deck seeded from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: RoundOptions) -> Self {
        Self::new(Deck::from_entropy(), options)
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.deck.draw()?;
        debug!(%card, remaining = self.deck.len(), "drew card");
        Ok(card)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns whether the player was dealt a natural 21.
    ///
    /// Fixed once the cards are dealt; later draws never change it.
    #[must_use]
    pub const fn was_blackjack(&self) -> bool {
        self.was_blackjack
    }

    /// Returns the total of the player's first two cards (0 before dealing).
    #[must_use]
    pub const fn player_initial_sum(&self) -> u8 {
        self.player_initial_sum
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns what a player at the table can currently see.
    ///
    /// Until the dealer plays, only the dealer's up card and its value are
    /// shown. Once settled, the outcome is included.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            state: self.state,
            player_cards: self.player_hand.cards(),
            player_value: self.player_hand.value(),
            dealer_cards: self.dealer_hand.visible_cards(),
            dealer_hidden: self.dealer_hand.hidden_count(),
            dealer_value: self.dealer_hand.visible_value(),
            outcome: self.outcome().ok(),
        }
    }
}
