//! Round logs: the CSV rows written after each round and read back for
//! analysis.
//!
//! Two layouts are understood. The compact layout is the one written here:
//!
//! ```text
//! playerwin,blackjack,bust,ply2cardsum,cards,dealcards
//! 1,0,DlBust,16,[7, 9],[10, 6, 8]
//! ```
//!
//! Commas inside `[...]` or double quotes do not split a field, so the
//! bracketed lists need no quoting. Quoted lists (`"7,9"`) are read too.
//!
//! The wide layout spreads the hands over fixed `card1..card5` and
//! `dealcard1..dealcard5` columns, padded with `0`, and spells the flags out
//! (`winloss` is `Win` for a player win, `blkjck` is `nowin` when the player
//! had no blackjack). Only reading is supported for it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::error::{ParseError, ParseErrorKind};
use crate::result::{BustKind, Outcome, RoundResult};

/// Header of the compact log layout.
pub const HEADER: &str = "playerwin,blackjack,bust,ply2cardsum,cards,dealcards";

/// Card slots per hand in the wide layout.
const WIDE_SLOTS: usize = 5;
const WIDE_PLAYER: [&str; WIDE_SLOTS] = ["card1", "card2", "card3", "card4", "card5"];
const WIDE_DEALER: [&str; WIDE_SLOTS] = [
    "dealcard1",
    "dealcard2",
    "dealcard3",
    "dealcard4",
    "dealcard5",
];

/// One logged round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Whether the player won (a push is not a win).
    pub player_won: bool,
    /// Whether the player was dealt a natural 21.
    pub blackjack: bool,
    /// Which hand busted.
    pub bust: BustKind,
    /// Total of the player's first two cards.
    pub player_initial_sum: u8,
    /// Per-card values of the player's final hand.
    pub cards: Vec<u8>,
    /// Per-card values of the dealer's final hand.
    pub dealer_cards: Vec<u8>,
}

impl From<&RoundResult> for Record {
    fn from(result: &RoundResult) -> Self {
        Self {
            player_won: result.player_won,
            blackjack: result.was_blackjack,
            bust: result.bust,
            player_initial_sum: result.player_initial_sum,
            cards: result.player_card_values.clone(),
            dealer_cards: result.dealer_card_values.clone(),
        }
    }
}

fn join_values(out: &mut String, values: &[u8]) {
    out.push('[');
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{value}");
    }
    out.push(']');
}

fn sum(values: &[u8]) -> u32 {
    values.iter().map(|&v| u32::from(v)).sum()
}

impl Record {
    /// Formats the record as a compact-layout row, without a line break.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{BustKind, Record};
    ///
    /// let record = Record {
    ///     player_won: true,
    ///     blackjack: false,
    ///     bust: BustKind::DealerBust,
    ///     player_initial_sum: 16,
    ///     cards: vec![7, 9],
    ///     dealer_cards: vec![10, 6, 8],
    /// };
    /// assert_eq!(record.to_csv_row(), "1,0,DlBust,16,[7, 9],[10, 6, 8]");
    /// ```
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{},{},{},{},",
            u8::from(self.player_won),
            u8::from(self.blackjack),
            self.bust.as_log_str(),
            self.player_initial_sum
        );
        join_values(&mut out, &self.cards);
        out.push(',');
        join_values(&mut out, &self.dealer_cards);
        out
    }

    /// Returns the final player total (sum of the logged card values).
    #[must_use]
    pub fn player_value(&self) -> u32 {
        sum(&self.cards)
    }

    /// Returns the final dealer total (sum of the logged card values).
    #[must_use]
    pub fn dealer_value(&self) -> u32 {
        sum(&self.dealer_cards)
    }

    /// Recovers the outcome from the logged fields.
    ///
    /// The log has no push column; a round the player did not win with equal
    /// totals and no bust was a push.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.player_won {
            if self.blackjack {
                Outcome::Blackjack
            } else {
                Outcome::Win
            }
        } else if self.bust == BustKind::None && self.player_value() == self.dealer_value() {
            Outcome::Push
        } else {
            Outcome::Lose
        }
    }
}

/// Splits one CSV line into fields, honouring double quotes and keeping
/// `[...]` groups whole.
fn split_fields(line: &str) -> Result<Vec<String>, ParseErrorKind> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut in_list = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            '[' if !quoted => {
                in_list = true;
                field.push(c);
            }
            ']' if !quoted => {
                in_list = false;
                field.push(c);
            }
            ',' if !quoted && !in_list => fields.push(core::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if quoted {
        return Err(ParseErrorKind::UnterminatedQuote);
    }
    if in_list {
        return Err(ParseErrorKind::UnterminatedList);
    }
    fields.push(field);
    Ok(fields)
}

/// Column positions of one of the two layouts.
enum Layout {
    Compact {
        playerwin: usize,
        blackjack: usize,
        bust: usize,
        sum: usize,
        cards: usize,
        dealcards: usize,
    },
    Wide {
        winloss: usize,
        blkjck: usize,
        bust: usize,
        sum: usize,
        cards: [usize; WIDE_SLOTS],
        dealcards: [usize; WIDE_SLOTS],
    },
}

impl Layout {
    fn detect(header: &[String]) -> Result<Self, ParseErrorKind> {
        let find = |name: &'static str| {
            header
                .iter()
                .position(|column| column.trim() == name)
                .ok_or(ParseErrorKind::MissingField(name))
        };

        if find("playerwin").is_ok() {
            return Ok(Self::Compact {
                playerwin: find("playerwin")?,
                blackjack: find("blackjack")?,
                bust: find("bust")?,
                sum: find("ply2cardsum")?,
                cards: find("cards")?,
                dealcards: find("dealcards")?,
            });
        }

        if find("winloss").is_ok() {
            let mut cards = [0; WIDE_SLOTS];
            let mut dealcards = [0; WIDE_SLOTS];
            for slot in 0..WIDE_SLOTS {
                cards[slot] = find(WIDE_PLAYER[slot])?;
                dealcards[slot] = find(WIDE_DEALER[slot])?;
            }
            return Ok(Self::Wide {
                winloss: find("winloss")?,
                blkjck: find("blkjck")?,
                bust: find("plybustbeat")?,
                sum: find("ply2cardsum")?,
                cards,
                dealcards,
            });
        }

        Err(ParseErrorKind::UnknownHeader)
    }

    fn parse_row(&self, fields: &[String]) -> Result<Record, ParseErrorKind> {
        let field = |index: usize, name: &'static str| {
            fields
                .get(index)
                .map(|value| value.trim())
                .ok_or(ParseErrorKind::MissingField(name))
        };
        let number = |index: usize, name: &'static str| -> Result<u8, ParseErrorKind> {
            field(index, name)?
                .parse::<u8>()
                .map_err(|_| ParseErrorKind::InvalidNumber(name))
        };

        match self {
            Self::Compact {
                playerwin,
                blackjack,
                bust,
                sum,
                cards,
                dealcards,
            } => Ok(Record {
                player_won: number(*playerwin, "playerwin")? != 0,
                blackjack: number(*blackjack, "blackjack")? != 0,
                bust: parse_bust(field(*bust, "bust")?),
                player_initial_sum: number(*sum, "ply2cardsum")?,
                cards: parse_values(field(*cards, "cards")?, "cards")?,
                dealer_cards: parse_values(field(*dealcards, "dealcards")?, "dealcards")?,
            }),
            Self::Wide {
                winloss,
                blkjck,
                bust,
                sum,
                cards,
                dealcards,
            } => {
                let player_won = field(*winloss, "winloss")? == "Win";
                let mut player = Vec::with_capacity(WIDE_SLOTS);
                let mut dealer = Vec::with_capacity(WIDE_SLOTS);
                for slot in 0..WIDE_SLOTS {
                    let card = number(cards[slot], WIDE_PLAYER[slot])?;
                    if card != 0 {
                        player.push(card);
                    }
                    let card = number(dealcards[slot], WIDE_DEALER[slot])?;
                    if card != 0 {
                        dealer.push(card);
                    }
                }

                Ok(Record {
                    player_won,
                    // Only a winning natural counts as a blackjack here.
                    blackjack: player_won && field(*blkjck, "blkjck")? != "nowin",
                    bust: parse_bust(field(*bust, "plybustbeat")?),
                    player_initial_sum: number(*sum, "ply2cardsum")?,
                    cards: player,
                    dealer_cards: dealer,
                })
            }
        }
    }
}

fn parse_bust(value: &str) -> BustKind {
    match value {
        "Bust" => BustKind::PlayerBust,
        "DlBust" => BustKind::DealerBust,
        _ => BustKind::None,
    }
}

fn parse_values(value: &str, name: &'static str) -> Result<Vec<u8>, ParseErrorKind> {
    value
        .trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<u8>().map_err(|_| ParseErrorKind::InvalidNumber(name)))
        .collect()
}

/// Parses a whole round log in either layout.
///
/// Blank lines are skipped. The header decides the layout and columns are
/// found by name, so their order does not matter. Every row must have as
/// many fields as the header.
///
/// # Errors
///
/// Returns the first malformed line, or a header error if the log is empty
/// or its header is not recognised.
pub fn parse_log(text: &str) -> Result<Vec<Record>, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(ParseError {
        line: 1,
        kind: ParseErrorKind::MissingHeader,
    })?;
    let at = |line: usize| move |kind: ParseErrorKind| ParseError { line, kind };

    let header = split_fields(header).map_err(at(header_line))?;
    let layout = Layout::detect(&header).map_err(at(header_line))?;

    lines
        .map(|(line, text)| {
            split_fields(text)
                .and_then(|fields| {
                    if fields.len() == header.len() {
                        layout.parse_row(&fields)
                    } else {
                        Err(ParseErrorKind::FieldCount {
                            expected: header.len(),
                            found: fields.len(),
                        })
                    }
                })
                .map_err(at(line))
        })
        .collect()
}

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::Write as _;
    use std::path::{Path, PathBuf};

    use tracing::debug;

    use super::{HEADER, Record, parse_log};
    use crate::error::RecordError;
    use crate::result::RoundResult;

    /// A round log file in the compact layout.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CsvLog {
        path: PathBuf,
    }

    impl CsvLog {
        /// Points at a log file; nothing is touched until the first append.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Returns the log file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Appends one round, writing the header first if the file is new
        /// or empty.
        ///
        /// # Errors
        ///
        /// Returns an error if the file cannot be opened or written.
        pub fn append(&self, result: &RoundResult) -> Result<(), RecordError> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;

            if file.metadata()?.len() == 0 {
                writeln!(file, "{HEADER}")?;
            }
            writeln!(file, "{}", Record::from(result).to_csv_row())?;

            debug!(path = %self.path.display(), "appended round to log");
            Ok(())
        }

        /// Reads every record back, in either layout.
        ///
        /// # Errors
        ///
        /// Returns an error if the file cannot be read or is malformed.
        pub fn read(&self) -> Result<Vec<Record>, RecordError> {
            let text = fs::read_to_string(&self.path)?;
            Ok(parse_log(&text)?)
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use file::CsvLog;
