//! Log statistics tests.

use bjround::Summary;
use bjround::record::parse_log;
use bjround::stats::BustCounts;

const LOG: &str = "\
playerwin,blackjack,bust,ply2cardsum,cards,dealcards
1,1,_,21,[11, 10],[10, 7]
1,0,DlBust,16,[7, 9],[10, 6, 8]
0,0,Bust,16,[10, 6, 9],[10, 2]
0,0,_,18,[10, 8],[10, 8]
0,0,_,16,\"7,9\",\"10,9\"
";

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn summary_counts_rounds_and_busts() {
    let records = parse_log(LOG).unwrap();
    let summary = Summary::from_records(&records, 100);

    assert_eq!(summary.rounds, 5);
    assert_eq!(
        summary.busts,
        BustCounts {
            none: 3,
            player: 1,
            dealer: 1,
        }
    );
    assert_eq!(summary.wins_by_initial_sum.get(&16), Some(&(1, 3)));
    assert_eq!(summary.wins_by_initial_sum.get(&21), Some(&(1, 1)));
}

#[test]
fn win_probability_by_initial_sum() {
    let records = parse_log(LOG).unwrap();
    let probabilities = Summary::from_records(&records, 100).win_probability_by_initial_sum();

    assert_eq!(probabilities.len(), 3);
    assert!(approx(probabilities[&16], 1.0 / 3.0));
    assert!(approx(probabilities[&18], 0.0));
    assert!(approx(probabilities[&21], 1.0));
}

#[test]
fn payouts_follow_outcomes() {
    let records = parse_log(LOG).unwrap();
    let summary = Summary::from_records(&records, 100);

    assert_eq!(summary.payouts, vec![150.0, 100.0, -100.0, 0.0, -100.0]);
    assert!(approx(summary.mean_payout(), 10.0));
    assert!(approx(Summary::default().mean_payout(), 0.0));
}

#[test]
fn card_frequencies_sum_to_one() {
    let records = parse_log(LOG).unwrap();
    let summary = Summary::from_records(&records, 100);

    let player = summary.player_card_frequency();
    let dealer = summary.dealer_card_frequency();
    assert!(approx(player.values().sum::<f64>(), 1.0));
    assert!(approx(dealer.values().sum::<f64>(), 1.0));

    // Player cards: 11 10 7 9 10 6 9 10 8 7 9
    assert_eq!(summary.player_card_counts[&10], 3);
    assert!(approx(player[&9], 3.0 / 11.0));
    assert_eq!(summary.dealer_card_counts[&10], 5);
}

#[test]
fn bust_and_blackjack_rates() {
    let records = parse_log(LOG).unwrap();
    let summary = Summary::from_records(&records, 100);

    assert_eq!(summary.blackjacks, 1);
    assert!(approx(summary.player_bust_rate(), 0.2));
    assert!(approx(summary.dealer_bust_rate(), 0.2));
    assert!(approx(summary.blackjack_rate(), 0.2));

    let empty = Summary::default();
    assert!(approx(empty.player_bust_rate(), 0.0));
    assert!(approx(empty.blackjack_rate(), 0.0));
}
