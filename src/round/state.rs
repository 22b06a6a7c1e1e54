//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the initial two cards each.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be reported.
    Settled,
}
