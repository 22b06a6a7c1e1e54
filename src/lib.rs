//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a shuffled [`Deck`] and
//! both hands, and walks one round through dealing, the player's turn, the
//! dealer's fixed drawing policy, and settlement into a [`RoundResult`].
//! Player decisions and table rendering are supplied through the
//! [`Decider`] and [`Renderer`] traits; [`play_round`] wires them together.
//!
//! # Example
//!
//! ```
//! use bjround::{Card, Deck, Rank, Round, RoundOptions, Suit};
//!
//! let deck = Deck::from_draws(&[
//!     Card::new(Suit::Hearts, Rank::Seven),
//!     Card::new(Suit::Clubs, Rank::Nine),
//!     Card::new(Suit::Spades, Rank::Ten),
//!     Card::new(Suit::Diamonds, Rank::Six),
//!     Card::new(Suit::Hearts, Rank::Eight),
//! ]);
//! let mut round = Round::new(deck, RoundOptions::default());
//! round.deal().unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//!
//! let result = round.showdown().unwrap();
//! assert!(result.player_won);
//! assert_eq!(result.dealer_card_values, vec![10, 6, 8]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod play;
pub mod record;
pub mod render;
pub mod result;
pub mod round;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, ParseError, PlayError, ShowdownError};
#[cfg(feature = "std")]
pub use error::RecordError;
pub use hand::{DealerHand, Hand, is_soft, resolved_values, total_value};
pub use options::{RoundOptions, RoundingMode};
pub use play::{Choice, Decider, Renderer, TableView, play_round};
pub use record::Record;
#[cfg(feature = "std")]
pub use record::CsvLog;
pub use result::{BustKind, Outcome, RoundResult};
pub use round::{Round, RoundState};
pub use stats::Summary;
