//! Round log writing and reading tests.

use std::fs;

use bjround::error::ParseErrorKind;
use bjround::record::{HEADER, parse_log};
use bjround::{
    BustKind, Card, CsvLog, Deck, Outcome, ParseError, Rank, Record, RecordError, Round,
    RoundOptions, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn settled_round(draws: &[Card]) -> bjround::RoundResult {
    let mut round = Round::new(Deck::from_draws(draws), RoundOptions::default());
    round.deal().unwrap();
    if round.state() == bjround::RoundState::PlayerTurn {
        round.stand().unwrap();
    }
    round.dealer_play().unwrap();
    round.showdown().unwrap()
}

fn dealer_bust_result() -> bjround::RoundResult {
    settled_round(&[
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Eight),
    ])
}

#[test]
fn record_row_matches_log_columns() {
    let record = Record::from(&dealer_bust_result());
    assert_eq!(record.to_csv_row(), "1,0,DlBust,16,[7, 9],[10, 6, 8]");

    let two_aces = settled_round(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
    ]);
    let record = Record::from(&two_aces);
    assert!(!record.blackjack);
    assert_eq!(record.player_initial_sum, 12);
    assert_eq!(record.to_csv_row(), "0,0,_,12,[11, 1],[10, 9]");
}

#[test]
fn append_writes_header_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.csv");
    let log = CsvLog::new(&path);

    log.append(&dealer_bust_result()).unwrap();
    log.append(&dealer_bust_result()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "1,0,DlBust,16,[7, 9],[10, 6, 8]");
    assert_eq!(lines[1], lines[2]);
}

#[test]
fn append_to_empty_file_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.csv");
    fs::write(&path, "").unwrap();

    CsvLog::new(&path).append(&dealer_bust_result()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with(HEADER));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn appended_rounds_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let log = CsvLog::new(dir.path().join("rounds.csv"));
    let result = dealer_bust_result();

    log.append(&result).unwrap();
    let records = log.read().unwrap();

    assert_eq!(records, vec![Record::from(&result)]);
    assert_eq!(records[0].outcome(), Outcome::Win);
}

#[test]
fn reading_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let log = CsvLog::new(dir.path().join("missing.csv"));
    assert!(matches!(log.read(), Err(RecordError::Io(_))));
}

#[test]
fn wide_layout_is_understood() {
    let text = "\
winloss,blkjck,plybustbeat,ply2cardsum,card1,card2,card3,card4,card5,dealcard1,dealcard2,dealcard3,dealcard4,dealcard5
Win,blkjck,_,21,11,10,0,0,0,10,7,0,0,0
Loss,nowin,Bust,14,10,4,9,0,0,6,10,0,0,0
Win,nowin,DlBust,17,10,7,0,0,0,10,2,10,0,0
Push,blkjck,_,21,10,11,0,0,0,10,11,0,0,0
";

    let records = parse_log(text).unwrap();
    assert_eq!(records.len(), 4);

    assert!(records[0].player_won);
    assert!(records[0].blackjack);
    assert_eq!(records[0].cards, vec![11, 10]);
    assert_eq!(records[0].outcome(), Outcome::Blackjack);

    assert_eq!(records[1].bust, BustKind::PlayerBust);
    assert_eq!(records[1].cards, vec![10, 4, 9]);
    assert_eq!(records[1].outcome(), Outcome::Lose);

    assert_eq!(records[2].bust, BustKind::DealerBust);
    assert_eq!(records[2].dealer_cards, vec![10, 2, 10]);
    assert!(!records[2].blackjack);

    // A natural that did not win is not logged as a blackjack.
    assert!(!records[3].blackjack);
    assert_eq!(records[3].outcome(), Outcome::Push);
}

#[test]
fn compact_columns_found_by_name() {
    let text = "\
dealcards,cards,ply2cardsum,bust,blackjack,playerwin
\"10,8\",\"10,9\",19,_,0,1
";
    let records = parse_log(text).unwrap();
    assert_eq!(
        records,
        vec![Record {
            player_won: true,
            blackjack: false,
            bust: BustKind::None,
            player_initial_sum: 19,
            cards: vec![10, 9],
            dealer_cards: vec![10, 8],
        }]
    );
}

#[test]
fn bracketed_value_lists_are_accepted() {
    let text = format!("{HEADER}\n1,0,DlBust,16,[7, 9],[10, 6, 8]\n");
    let records = parse_log(&text).unwrap();
    assert_eq!(
        records,
        vec![Record {
            player_won: true,
            blackjack: false,
            bust: BustKind::DealerBust,
            player_initial_sum: 16,
            cards: vec![7, 9],
            dealer_cards: vec![10, 6, 8],
        }]
    );
    assert_eq!(records[0].dealer_value(), 24);

    let text = format!("{HEADER}\n0,0,_,18,\"[10, 8]\",\"[10, 8]\"\n");
    let records = parse_log(&text).unwrap();
    assert_eq!(records[0].cards, vec![10, 8]);
    assert_eq!(records[0].outcome(), Outcome::Push);
}

#[test]
fn rows_must_match_header_width() {
    let text = format!("{HEADER}\n1,0,DlBust,16,7,9,10,6,8\n");
    assert_eq!(
        parse_log(&text).unwrap_err(),
        ParseError {
            line: 2,
            kind: ParseErrorKind::FieldCount {
                expected: 6,
                found: 9,
            },
        }
    );

    let text = format!("{HEADER}\n1,0,DlBust,16,[7, 9\n");
    assert_eq!(
        parse_log(&text).unwrap_err().kind,
        ParseErrorKind::UnterminatedList
    );
}

#[test]
fn malformed_logs_report_the_line() {
    assert_eq!(
        parse_log("").unwrap_err(),
        ParseError {
            line: 1,
            kind: ParseErrorKind::MissingHeader,
        }
    );

    assert_eq!(
        parse_log("a,b,c\n1,2,3\n").unwrap_err(),
        ParseError {
            line: 1,
            kind: ParseErrorKind::UnknownHeader,
        }
    );

    let text = format!("{HEADER}\n1,0,_,16,[7, 9],[10, 6, 8]\n1,0,_,x,[7, 9],[10, 6, 8]\n");
    assert_eq!(
        parse_log(&text).unwrap_err(),
        ParseError {
            line: 3,
            kind: ParseErrorKind::InvalidNumber("ply2cardsum"),
        }
    );

    let text = format!("{HEADER}\n1,0,_,16,\"7,9\n");
    assert_eq!(
        parse_log(&text).unwrap_err().kind,
        ParseErrorKind::UnterminatedQuote
    );

    let text = format!("{HEADER}\n1,0,_\n");
    assert_eq!(
        parse_log(&text).unwrap_err().kind,
        ParseErrorKind::FieldCount {
            expected: 6,
            found: 3,
        }
    );
}
