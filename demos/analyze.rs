//! Summarise a round log written by `cli_blackjack` (or the wide layout).

use std::path::PathBuf;

use anyhow::{Context, Result};
use bjround::{CsvLog, Summary};
use clap::Parser;

/// Print win rates, card frequencies, payouts, busts and blackjacks from a
/// round log.
#[derive(Parser, Debug)]
#[command(name = "analyze")]
struct Args {
    /// Round log to read
    log: PathBuf,

    /// Stake used to price each round
    #[arg(long, default_value_t = 100)]
    stake: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let log = CsvLog::new(&args.log);
    let records = log
        .read()
        .with_context(|| format!("failed to read {}", args.log.display()))?;
    let summary = Summary::from_records(&records, args.stake);

    println!("Rounds: {}", summary.rounds);

    println!("\nWin probability by sum of first 2 cards:");
    for (sum, probability) in summary.win_probability_by_initial_sum() {
        println!("  {sum:>2}: {probability:.3}");
    }

    println!("\nCard value frequency (player / dealer):");
    let player = summary.player_card_frequency();
    let dealer = summary.dealer_card_frequency();
    for value in 1..=11u8 {
        let p = player.get(&value).copied().unwrap_or(0.0);
        let d = dealer.get(&value).copied().unwrap_or(0.0);
        println!("  {value:>2}: {p:.3} / {d:.3}");
    }

    println!(
        "\nAverage win amount for a ${} bet: {:.2}",
        args.stake,
        summary.mean_payout()
    );

    println!("\nBusts:");
    println!("  none:   {}", summary.busts.none);
    println!("  player: {}", summary.busts.player);
    println!("  dealer: {}", summary.busts.dealer);

    println!("\nProbabilities:");
    println!("  player bust:      {:.3}", summary.player_bust_rate());
    println!("  dealer bust:      {:.3}", summary.dealer_bust_rate());
    println!("  player blackjack: {:.3}", summary.blackjack_rate());

    Ok(())
}
