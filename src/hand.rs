//! Player and dealer hand representations and hand scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Returns the value each card contributes to the hand, in deal order.
///
/// Every ace starts at 11. Walking from the most recently dealt card back
/// to the first, aces still counted as 11 are demoted to 1 one at a time
/// while the hand total exceeds 21. Which ace ends up as 1 is therefore
/// always the latest one, which matters to anything reading the per-card
/// values back.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, resolved_values};
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(resolved_values(&hand), vec![11, 1]);
/// ```
#[must_use]
pub fn resolved_values(cards: &[Card]) -> Vec<u8> {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.base_value()).collect();
    let mut total: u32 = values.iter().map(|&v| u32::from(v)).sum();

    for (card, value) in cards.iter().zip(values.iter_mut()).rev() {
        if total <= 21 {
            break;
        }
        if card.rank.is_ace() && *value == 11 {
            *value = 1;
            total -= 10;
        }
    }

    values
}

/// Returns the best total of the cards: the sum of [`resolved_values`].
#[must_use]
pub fn total_value(cards: &[Card]) -> u8 {
    resolved_values(cards)
        .iter()
        .fold(0u8, |total, &value| total.saturating_add(value))
}

/// Returns whether an ace in the cards is still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    cards
        .iter()
        .zip(resolved_values(cards))
        .any(|(card, value)| card.rank.is_ace() && value == 11)
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        total_value(&self.cards)
    }

    /// Returns the value each card contributes, in deal order.
    #[must_use]
    pub fn resolved_values(&self) -> Vec<u8> {
        resolved_values(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a player can currently see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(1)]
        }
    }

    /// Returns the number of cards still face down.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cards.len() - self.visible_cards().len()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        total_value(self.visible_cards())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        total_value(&self.cards)
    }

    /// Returns the value each card contributes, in deal order.
    #[must_use]
    pub fn resolved_values(&self) -> Vec<u8> {
        resolved_values(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
