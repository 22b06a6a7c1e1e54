//! A single shuffled 52-card deck.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A deck of cards. The top of the deck is the end of the inner vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with the given seed.
    ///
    /// The same seed always yields the same card order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck, Deck::new(42));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Creates a full deck shuffled with a generator seeded from OS entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut rng = ChaCha8Rng::from_os_rng();
        Self::shuffled(&mut rng)
    }

    /// Creates a deck that yields exactly the given cards, first card first.
    ///
    /// Useful for replaying a known round or pinning down a scenario in
    /// tests. No check is made that the cards form a standard deck.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been drawn out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
