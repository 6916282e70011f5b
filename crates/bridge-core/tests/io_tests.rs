use bridge_core::auction::Auction;
use bridge_core::board::Position;
use bridge_core::call::Call;
use bridge_core::hand::Hand;
use bridge_core::io::hand_parser::{format_hand, parse_hand};
use bridge_core::strain::Strain;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct HandVector {
    name: String,
    hand: String,
    hcp: u8,
    shape: [u8; 4],
    balanced: bool,
}

fn load_vectors() -> Vec<HandVector> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/hands.yaml");
    let content = fs::read_to_string(path).expect("Failed to read hand vectors");
    serde_yaml::from_str(&content).expect("Failed to parse hand vectors")
}

#[test]
fn test_hand_vectors() {
    for v in load_vectors() {
        let hand = parse_hand(&v.hand).unwrap_or_else(|e| panic!("{}: {}", v.name, e));
        let eval = hand.evaluate();
        assert_eq!(hand.len(), 13, "{}", v.name);
        assert_eq!(eval.hcp, v.hcp, "hcp mismatch for {}", v.name);
        assert_eq!(eval.distribution.shape(), v.shape, "shape mismatch for {}", v.name);
        assert_eq!(hand.is_balanced(), v.balanced, "balance mismatch for {}", v.name);
        assert_eq!(format_hand(&hand), v.hand, "format roundtrip for {}", v.name);
    }
}

#[test]
fn test_hand_json_roundtrip() {
    let hand = Hand::parse("AK2.QJ3.T98.7654").unwrap();
    let json = serde_json::to_string(&hand).unwrap();
    let back: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hand);
}

#[test]
fn test_auction_json_shape() {
    let auction = Auction::bidding(Position::North, "1NT P");
    let value = serde_json::to_value(&auction).unwrap();
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["position"], "North");
    let first: Call = serde_json::from_value(entries[0]["call"].clone()).unwrap();
    assert_eq!(first, Call::bid(1, Strain::NoTrump));
}
