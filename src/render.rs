//! ASCII-art rendering of hands and the table.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::card::Card;
use crate::play::TableView;
use crate::result::Outcome;

/// Number of text rows in a rendered card.
pub const CARD_ROWS: usize = 7;

const BACK: [&str; CARD_ROWS] = [
    "┌───────┐",
    "│░░░░░░░│",
    "│░░░░░░░│",
    "│░░░░░░░│",
    "│░░░░░░░│",
    "│░░░░░░░│",
    "└───────┘",
];

fn face(card: &Card) -> [String; CARD_ROWS] {
    let rank = card.rank.label();
    let suit = card.suit.symbol();
    [
        String::from("┌───────┐"),
        format!("│{rank:>2}     │"),
        format!("│ {suit}     │"),
        String::from("│       │"),
        format!("│     {suit} │"),
        format!("│    {rank:>2} │"),
        String::from("└───────┘"),
    ]
}

/// Renders cards side by side, followed by `hidden` face-down cards.
///
/// Returns an empty string when there is nothing to draw.
///
/// # Example
///
/// ```
/// use bjround::{Card, Rank, Suit, render};
///
/// let art = render::cards(&[Card::new(Suit::Spades, Rank::Ten)], 1);
/// let rows: Vec<&str> = art.lines().collect();
/// assert_eq!(rows[1], "│10     ││░░░░░░░│");
/// assert_eq!(rows[4], "│     ♠ ││░░░░░░░│");
/// ```
#[must_use]
pub fn cards(cards: &[Card], hidden: usize) -> String {
    if cards.is_empty() && hidden == 0 {
        return String::new();
    }

    let faces: Vec<[String; CARD_ROWS]> = cards.iter().map(face).collect();
    let mut rows: Vec<String> = Vec::with_capacity(CARD_ROWS);

    for (row, back) in BACK.iter().enumerate() {
        let mut line = String::new();
        for card in &faces {
            line.push_str(&card[row]);
        }
        for _ in 0..hidden {
            line.push_str(back);
        }
        rows.push(line);
    }

    rows.join("\n")
}

/// Returns the closing line printed for an outcome.
#[must_use]
pub const fn banner(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "Blackjack! You win x3/2",
        Outcome::Win => "Congratulations! You win!",
        Outcome::Push => "Nobody wins.",
        Outcome::Lose => "Dealer wins. Try again.",
    }
}

/// Renders both hands with their values, and the outcome once settled.
#[must_use]
pub fn table(view: &TableView<'_>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\nPlayer's Hand (Value: {}):", view.player_value);
    let _ = writeln!(out, "{}", cards(view.player_cards, 0));
    let _ = writeln!(out, "\nDealer's Hand (Value: {}):", view.dealer_value);
    let _ = writeln!(out, "{}", cards(view.dealer_cards, view.dealer_hidden));

    if let Some(outcome) = view.outcome {
        let _ = writeln!(out, "{}", banner(outcome));
    }

    out
}

/// A [`Renderer`](crate::Renderer) that prints the ASCII table to a writer.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct AsciiRenderer<W> {
    out: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> AsciiRenderer<W> {
    /// Creates a renderer writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> crate::play::Renderer for AsciiRenderer<W> {
    fn show(&mut self, view: &TableView<'_>) {
        let text = table(view);
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            tracing::warn!(%err, "failed to render table");
        }
    }
}
