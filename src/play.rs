//! Driving a round with pluggable decision and display collaborators.

use tracing::debug;

use crate::card::Card;
use crate::error::PlayError;
use crate::result::{Outcome, RoundResult};
use crate::round::{Round, RoundState};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Input that was neither; the player is asked again.
    Invalid,
}

impl Choice {
    /// Reads a typed answer: `h`/`hit` or `s`/`stand`, any case.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Choice;
    ///
    /// assert_eq!(Choice::parse(" Hit\n"), Choice::Hit);
    /// assert_eq!(Choice::parse("s"), Choice::Stand);
    /// assert_eq!(Choice::parse("double"), Choice::Invalid);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hit") {
            Self::Hit
        } else if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("stand") {
            Self::Stand
        } else {
            Self::Invalid
        }
    }
}

/// What the player can see of the table at one point in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current round state.
    pub state: RoundState,
    /// The player's cards.
    pub player_cards: &'a [Card],
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's face-up cards.
    pub dealer_cards: &'a [Card],
    /// How many dealer cards are still face down.
    pub dealer_hidden: usize,
    /// Value of the dealer's face-up cards.
    pub dealer_value: u8,
    /// The outcome, once the round is settled.
    pub outcome: Option<Outcome>,
}

impl TableView<'_> {
    /// Returns whether the dealer's hand is fully shown.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        self.dealer_hidden == 0
    }
}

/// Supplies the player's decisions.
pub trait Decider {
    /// Chooses the next action for the table as shown.
    fn choose(&mut self, view: &TableView<'_>) -> Choice;
}

impl<F> Decider for F
where
    F: FnMut(&TableView<'_>) -> Choice,
{
    fn choose(&mut self, view: &TableView<'_>) -> Choice {
        self(view)
    }
}

/// Shows the table to the player.
pub trait Renderer {
    /// Called before every player decision and once more at settlement.
    fn show(&mut self, view: &TableView<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&TableView<'_>),
{
    fn show(&mut self, view: &TableView<'_>) {
        self(view);
    }
}

/// Plays a round to completion.
///
/// Deals if the round has not been dealt yet, asks `decider` for a choice
/// until the player stands, reaches 21 or busts, lets the dealer play, shows
/// the settled table once to `renderer`, and reports the result. The table
/// is shown before every decision, including repeats after invalid input.
///
/// # Errors
///
/// Returns an error if a transition fails, which only happens when the deck
/// runs out or the round was already past the point being driven.
///
/// # Example
///
/// ```
/// use bjround::{Choice, Deck, Round, RoundOptions, TableView, play_round};
///
/// let mut round = Round::new(Deck::new(7), RoundOptions::default());
/// let mut stand = |_: &TableView<'_>| Choice::Stand;
/// let mut quiet = |_: &TableView<'_>| {};
///
/// let result = play_round(&mut round, &mut stand, &mut quiet).unwrap();
/// assert_eq!(result.player_card_values.len(), 2);
/// ```
pub fn play_round<D, R>(
    round: &mut Round,
    decider: &mut D,
    renderer: &mut R,
) -> Result<RoundResult, PlayError>
where
    D: Decider + ?Sized,
    R: Renderer + ?Sized,
{
    if round.state() == RoundState::Dealing {
        round.deal()?;
    }

    while round.state() == RoundState::PlayerTurn {
        let choice = {
            let view = round.view();
            renderer.show(&view);
            decider.choose(&view)
        };

        if let Some(card) = round.apply(choice)? {
            debug!(%card, "dealt to player");
        }
    }

    if round.state() == RoundState::DealerTurn {
        round.dealer_play()?;
    }

    renderer.show(&round.view());

    Ok(round.showdown()?)
}
