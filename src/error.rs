//! Error types for round operations and round logs.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out.
    #[error("cannot draw: {0}")]
    NoCards(#[from] DeckError),
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// The deck ran out while the dealer had to draw.
    #[error("dealer cannot draw: {0}")]
    NoCards(#[from] DeckError),
}

/// Errors that can end a driven round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or showdown failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}

/// Why a round log line could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The header matches neither known log layout.
    #[error("unrecognised header")]
    UnknownHeader,
    /// The log has no header line.
    #[error("missing header")]
    MissingHeader,
    /// A column is absent from the row.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A column that should hold an integer does not.
    #[error("invalid number in field `{0}`")]
    InvalidNumber(&'static str),
    /// A quoted field is never closed.
    #[error("unterminated quoted field")]
    UnterminatedQuote,
    /// A `[` list is never closed.
    #[error("unterminated bracketed list")]
    UnterminatedList,
    /// The row has a different number of fields than the header.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields in the header.
        expected: usize,
        /// Fields in the row.
        found: usize,
    },
}

/// A malformed line in a round log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number, counting the header.
    pub line: usize,
    /// What was wrong with the line.
    pub kind: ParseErrorKind,
}

/// Errors that can occur while writing or reading a round log file.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Error)]
pub enum RecordError {
    /// The log file could not be opened, read or written.
    #[error("round log i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The log contents are malformed.
    #[error("malformed round log: {0}")]
    Parse(#[from] ParseError),
}
