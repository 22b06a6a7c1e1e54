//! Round result types for showdown.

extern crate alloc;

use alloc::vec::Vec;

/// How a settled round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player had a natural 21 and the dealer did not finish on 21.
    Blackjack,
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Push (tie).
    Push,
    /// Player loses (player busts or dealer has higher value).
    Lose,
}

impl Outcome {
    /// Returns whether the player collects on this outcome.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Which side, if any, went over 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BustKind {
    /// Neither hand busted.
    #[default]
    None,
    /// The player went over 21. Takes precedence over a dealer bust.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
}

impl BustKind {
    /// Returns the marker written to the `bust` column of a round log.
    #[must_use]
    pub const fn as_log_str(self) -> &'static str {
        match self {
            Self::None => "_",
            Self::PlayerBust => "Bust",
            Self::DealerBust => "DlBust",
        }
    }
}

/// Result of a single settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Whether the player came out ahead (blackjack or win).
    pub player_won: bool,
    /// Whether the player's first two cards totalled 21.
    pub was_blackjack: bool,
    /// Which hand busted.
    pub bust: BustKind,
    /// Total of the player's first two cards.
    pub player_initial_sum: u8,
    /// Per-card values of the player's final hand, aces resolved.
    pub player_card_values: Vec<u8>,
    /// Per-card values of the dealer's final hand, aces resolved.
    pub dealer_card_values: Vec<u8>,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The stake the round was played for.
    pub stake: usize,
    /// Net amount won (positive) or lost (negative) on the stake.
    pub payout: isize,
}
