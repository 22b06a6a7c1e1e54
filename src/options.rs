//! Round configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_stake(25)
///     .with_blackjack_pays(1.2)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOptions {
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Total at which the dealer stops drawing, soft or hard.
    pub dealer_stands_on: u8,
    /// Fixed stake each round is played for.
    pub stake: usize,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            dealer_stands_on: 17,
            stake: 100,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl RoundOptions {
    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the fixed stake.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stake(10);
    /// assert_eq!(options.stake, 10);
    /// ```
    #[must_use]
    pub const fn with_stake(mut self, stake: usize) -> Self {
        self.stake = stake;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{RoundOptions, RoundingMode};
    ///
    /// let options = RoundOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
