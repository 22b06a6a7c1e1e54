//! Aggregate statistics over logged rounds.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::record::Record;
use crate::result::{BustKind, Outcome};

/// How often each bust marker appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BustCounts {
    /// Rounds where nobody busted.
    pub none: usize,
    /// Rounds where the player busted.
    pub player: usize,
    /// Rounds where the dealer busted.
    pub dealer: usize,
}

/// Summary of a set of logged rounds.
///
/// # Example
///
/// ```
/// use bjround::{BustKind, Record, Summary};
///
/// let records = [Record {
///     player_won: true,
///     blackjack: false,
///     bust: BustKind::DealerBust,
///     player_initial_sum: 16,
///     cards: vec![7, 9],
///     dealer_cards: vec![10, 6, 8],
/// }];
/// let summary = Summary::from_records(&records, 100);
/// assert_eq!(summary.rounds, 1);
/// assert_eq!(summary.payouts, vec![100.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Number of rounds summarised.
    pub rounds: usize,
    /// `(wins, rounds)` keyed by the player's two-card total.
    pub wins_by_initial_sum: BTreeMap<u8, (usize, usize)>,
    /// Occurrences of each card value in the player's hands.
    pub player_card_counts: BTreeMap<u8, usize>,
    /// Occurrences of each card value in the dealer's hands.
    pub dealer_card_counts: BTreeMap<u8, usize>,
    /// Net result of every round for the stake, in log order.
    pub payouts: Vec<f64>,
    /// Bust marker counts.
    pub busts: BustCounts,
    /// Rounds logged as a blackjack.
    pub blackjacks: usize,
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for round counts"
)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn frequencies(counts: &BTreeMap<u8, usize>) -> BTreeMap<u8, f64> {
    let total: usize = counts.values().sum();
    counts
        .iter()
        .map(|(&value, &count)| (value, ratio(count, total)))
        .collect()
}

impl Summary {
    /// Summarises `records`, pricing each round at `stake`.
    ///
    /// A blackjack pays 1.5 times the stake, a win pays the stake, a push
    /// returns nothing and a loss costs the stake.
    #[must_use]
    pub fn from_records(records: &[Record], stake: usize) -> Self {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let stake = stake as f64;
        let mut summary = Self {
            rounds: records.len(),
            ..Self::default()
        };

        for record in records {
            let entry = summary
                .wins_by_initial_sum
                .entry(record.player_initial_sum)
                .or_insert((0, 0));
            entry.0 += usize::from(record.player_won);
            entry.1 += 1;

            for &value in &record.cards {
                *summary.player_card_counts.entry(value).or_insert(0) += 1;
            }
            for &value in &record.dealer_cards {
                *summary.dealer_card_counts.entry(value).or_insert(0) += 1;
            }

            summary.payouts.push(match record.outcome() {
                Outcome::Blackjack => stake * 1.5,
                Outcome::Win => stake,
                Outcome::Push => 0.0,
                Outcome::Lose => -stake,
            });

            summary.blackjacks += usize::from(record.blackjack);

            match record.bust {
                BustKind::None => summary.busts.none += 1,
                BustKind::PlayerBust => summary.busts.player += 1,
                BustKind::DealerBust => summary.busts.dealer += 1,
            }
        }

        summary
    }

    /// Returns the fraction of rounds won for each two-card total.
    #[must_use]
    pub fn win_probability_by_initial_sum(&self) -> BTreeMap<u8, f64> {
        self.wins_by_initial_sum
            .iter()
            .map(|(&sum, &(wins, rounds))| (sum, ratio(wins, rounds)))
            .collect()
    }

    /// Returns the relative frequency of each card value dealt to the player.
    #[must_use]
    pub fn player_card_frequency(&self) -> BTreeMap<u8, f64> {
        frequencies(&self.player_card_counts)
    }

    /// Returns the relative frequency of each card value dealt to the dealer.
    #[must_use]
    pub fn dealer_card_frequency(&self) -> BTreeMap<u8, f64> {
        frequencies(&self.dealer_card_counts)
    }

    /// Returns the fraction of rounds in which the player busted.
    #[must_use]
    pub fn player_bust_rate(&self) -> f64 {
        ratio(self.busts.player, self.rounds)
    }

    /// Returns the fraction of rounds in which the dealer busted.
    #[must_use]
    pub fn dealer_bust_rate(&self) -> f64 {
        ratio(self.busts.dealer, self.rounds)
    }

    /// Returns the fraction of rounds logged as a blackjack.
    #[must_use]
    pub fn blackjack_rate(&self) -> f64 {
        ratio(self.blackjacks, self.rounds)
    }

    /// Returns the mean payout per round, or 0 with no rounds.
    #[must_use]
    pub fn mean_payout(&self) -> f64 {
        if self.payouts.is_empty() {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for round counts"
        )]
        let rounds = self.payouts.len() as f64;
        self.payouts.iter().sum::<f64>() / rounds
    }
}
