//! CLI blackjack example.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bjround::render::AsciiRenderer;
use bjround::{Choice, CsvLog, Deck, Decider, Round, RoundOptions, TableView, play_round};
use clap::Parser;

/// Play blackjack against the dealer in the terminal.
#[derive(Parser, Debug)]
#[command(name = "cli_blackjack")]
struct Args {
    /// Append each round to this CSV log
    log: Option<PathBuf>,

    /// Shuffle seed; each round uses seed + round number
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u64,

    /// Stake each round is played for
    #[arg(long, default_value_t = 100)]
    stake: usize,

    /// Print engine debug events to stderr
    #[arg(long)]
    verbose: bool,
}

struct StdinDecider<R> {
    input: R,
}

impl<R: BufRead> Decider for StdinDecider<R> {
    fn choose(&mut self, _view: &TableView<'_>) -> Choice {
        print!("Do you want to hit(h) or stand(s)? ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // Closed input: stop drawing rather than spin on empty answers.
            Ok(0) | Err(_) => return Choice::Stand,
            Ok(_) => {}
        }

        let choice = Choice::parse(&line);
        if choice == Choice::Invalid {
            println!("Invalid choice. Please enter 'hit' or 'stand'.");
        }
        choice
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let options = RoundOptions::default().with_stake(args.stake);
    let log = args.log.map(CsvLog::new);
    let mut decider = StdinDecider {
        input: io::stdin().lock(),
    };
    let mut renderer = AsciiRenderer::new(io::stdout());
    let mut net: isize = 0;

    for number in 0..args.rounds {
        let deck = args
            .seed
            .map_or_else(Deck::from_entropy, |seed| Deck::new(seed.wrapping_add(number)));
        let mut round = Round::new(deck, options.clone());

        let result = play_round(&mut round, &mut decider, &mut renderer)
            .with_context(|| format!("round {} failed", number + 1))?;
        net += result.payout;

        if let Some(log) = &log {
            log.append(&result)
                .with_context(|| format!("failed to log round to {}", log.path().display()))?;
        }
    }

    if args.rounds > 1 {
        println!("\nNet after {} rounds: {net}", args.rounds);
    }

    Ok(())
}
