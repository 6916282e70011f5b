use bridge_core::auction::Auction;
use bridge_core::board::Position;
use bridge_core::call::Call;
use bridge_core::hand::Hand;
use bridge_engine::{select_call, select_call_with_trace};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

type Suites = BTreeMap<String, Vec<Vec<String>>>;

fn load_suites() -> Suites {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/vectors.yaml");
    let content = fs::read_to_string(path).expect("Failed to read test vectors");
    serde_yaml::from_str(&content).expect("Failed to parse YAML")
}

fn parse_auction(history: &str) -> Auction {
    let mut auction = Auction::new();
    let mut position = Position::North;
    for token in history.split_whitespace() {
        let call: Call = token
            .parse()
            .unwrap_or_else(|e| panic!("bad call {token:?} in {history:?}: {e}"));
        auction.add_call(call, position);
        position = position.next();
    }
    auction
}

#[test]
fn run_bidding_vectors() {
    let mut failures = Vec::new();
    let mut total = 0;

    for (suite_name, cases) in load_suites() {
        for case in cases {
            total += 1;
            let (hand_str, expected_str, history, seat) = match case.as_slice() {
                [hand, expected] => (hand.as_str(), expected.as_str(), "", None),
                [hand, expected, history] => (hand.as_str(), expected.as_str(), history.as_str(), None),
                [hand, expected, history, seat] => (
                    hand.as_str(),
                    expected.as_str(),
                    history.as_str(),
                    Some(seat.parse::<Position>().expect("bad seat")),
                ),
                _ => panic!("{suite_name}: malformed case {case:?}"),
            };

            let hand = Hand::parse(hand_str).unwrap_or_else(|e| panic!("{hand_str}: {e}"));
            let auction = parse_auction(history);
            let seat = seat
                .or_else(|| auction.next_position())
                .unwrap_or(Position::North);
            let expected: Call = expected_str.parse().expect("bad expected call");

            let actual = select_call(&hand, &auction, seat);
            if actual != expected {
                let trace = select_call_with_trace(&hand, &auction, seat);
                failures.push(format!(
                    "{suite_name}: {hand_str} after [{history}] as {seat}: expected {expected}, got {actual} ({})",
                    trace.rule_name
                ));
            }
        }
    }

    assert!(total > 0, "no vectors loaded");
    if !failures.is_empty() {
        for f in &failures {
            println!("{f}");
        }
        panic!("{} of {} bidding vectors failed", failures.len(), total);
    }
}

#[test]
fn vectors_only_produce_legal_calls() {
    for cases in load_suites().into_values() {
        for case in cases {
            let hand = Hand::parse(&case[0]).unwrap();
            let auction = parse_auction(case.get(2).map(String::as_str).unwrap_or(""));
            let seat = auction.next_position().unwrap_or(Position::North);
            let call = select_call(&hand, &auction, seat);
            assert!(auction.is_valid_call(call));
        }
    }
}
