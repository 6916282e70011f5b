//! One table with a human seat and three engine seats.

use bridge_core::{deal, Auction, Call, Hand, ParseCallError, Position};
use bridge_engine::{select_call_with_trace, BidTrace};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TutorError {
    #[error("couldn't read that call: {0}")]
    Parse(#[from] ParseCallError),
    #[error("{call} must outrank {last}")]
    Insufficient { call: Call, last: Call },
    #[error("it's {0}'s turn")]
    NotYourTurn(Position),
    #[error("the auction is over")]
    Finished,
}

#[derive(Debug, Clone)]
pub struct Tutor {
    hands: [Hand; 4],
    auction: Auction,
    dealer: Position,
    human: Position,
    to_act: Position,
}

impl Tutor {
    pub fn new(hands: [Hand; 4], dealer: Position, human: Position) -> Self {
        Self {
            hands,
            auction: Auction::new(),
            dealer,
            human,
            to_act: dealer,
        }
    }

    pub fn deal<R: Rng + ?Sized>(rng: &mut R, dealer: Position, human: Position) -> Self {
        Self::new(deal::deal(rng), dealer, human)
    }

    pub fn hands(&self) -> &[Hand; 4] {
        &self.hands
    }

    pub fn hand(&self, position: Position) -> &Hand {
        &self.hands[position.idx()]
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn dealer(&self) -> Position {
        self.dealer
    }

    pub fn human(&self) -> Position {
        self.human
    }

    /// The seat on turn, or `None` once the auction is over.
    pub fn to_act(&self) -> Option<Position> {
        (!self.auction.is_finished()).then_some(self.to_act)
    }

    pub fn is_human_turn(&self) -> bool {
        self.to_act() == Some(self.human)
    }

    /// What the engine would bid for the seat on turn.
    pub fn hint(&self) -> BidTrace {
        select_call_with_trace(self.hand(self.to_act), &self.auction, self.to_act)
    }

    /// Plays one engine seat. Returns `None` when it is the human's turn or the auction is over.
    pub fn engine_turn(&mut self) -> Option<(Position, BidTrace)> {
        if self.to_act().is_none() || self.is_human_turn() {
            return None;
        }
        let seat = self.to_act;
        let trace = self.hint();
        debug!(seat = %seat, call = %trace.selected, rule = trace.rule_name, "engine call");
        self.auction.add_call(trace.selected, seat);
        self.to_act = seat.next();
        Some((seat, trace))
    }

    /// Parses and checks the human's call, recording it if it is legal.
    pub fn human_call(&mut self, input: &str) -> Result<Call, TutorError> {
        match self.to_act() {
            None => return Err(TutorError::Finished),
            Some(seat) if seat != self.human => return Err(TutorError::NotYourTurn(seat)),
            Some(_) => {}
        }
        let call: Call = input.parse()?;
        if !self.auction.is_valid_call(call) {
            let last = self.auction.last_bid().map_or(Call::Pass, |(_, c)| c);
            return Err(TutorError::Insufficient { call, last });
        }
        info!(seat = %self.human, call = %call, "human call");
        self.auction.add_call(call, self.human);
        self.to_act = self.human.next();
        Ok(call)
    }

    /// Final contract with its scoring band, or "Passed out".
    pub fn outcome(&self) -> String {
        match self.auction.final_contract() {
            Some(contract) => {
                let band = if contract.is_slam() {
                    "slam"
                } else if contract.is_game() {
                    "game"
                } else {
                    "part score"
                };
                format!("{contract} ({band})")
            }
            None => "Passed out".to_string(),
        }
    }
}

/// Builds an auction from space or comma separated calls, seats rotating from `first`.
pub fn parse_auction(first: Position, text: &str) -> Result<Auction, ParseCallError> {
    let mut auction = Auction::new();
    let mut position = first;
    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        auction.add_call(token.parse()?, position);
        position = position.next();
    }
    Ok(auction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::Strain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tutor() -> Tutor {
        let hands = [
            "A32.K32.AQ2.Q432",
            "9876.9876.543.65",
            "K54.QJ5.K76.KJ98",
            "QJT.AT4.JT98.AT7",
        ]
        .map(|h| Hand::parse(h).unwrap());
        Tutor::new(hands, Position::North, Position::South)
    }

    #[test]
    fn test_engine_stops_at_human_seat() {
        let mut t = tutor();
        let (seat, trace) = t.engine_turn().unwrap();
        assert_eq!(seat, Position::North);
        assert_eq!(trace.selected, Call::bid(1, Strain::NoTrump));
        assert!(t.engine_turn().is_some());
        assert!(t.is_human_turn());
        assert!(t.engine_turn().is_none());
    }

    #[test]
    fn test_human_errors_are_distinct() {
        let mut t = tutor();
        assert_eq!(
            t.human_call("P"),
            Err(TutorError::NotYourTurn(Position::North))
        );
        t.engine_turn();
        t.engine_turn();
        assert!(matches!(t.human_call("9C"), Err(TutorError::Parse(_))));
        assert_eq!(
            t.human_call("1s"),
            Err(TutorError::Insufficient {
                call: Call::bid(1, Strain::Spades),
                last: Call::bid(1, Strain::NoTrump),
            })
        );
        assert_eq!(t.human_call("2c"), Ok(Call::bid(2, Strain::Clubs)));
        assert_eq!(t.to_act(), Some(Position::West));
    }

    #[test]
    fn test_hint_matches_engine() {
        let mut t = tutor();
        t.engine_turn();
        t.engine_turn();
        // South holds 13 HCP with four spades over 1NT.
        assert_eq!(t.hint().selected, Call::bid(2, Strain::Clubs));
    }

    #[test]
    fn test_full_auction_on_random_deals() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut t = Tutor::deal(&mut rng, Position::East, Position::South);
            let mut guard = 0;
            while t.to_act().is_some() {
                if t.is_human_turn() {
                    t.human_call("pass").unwrap();
                } else {
                    t.engine_turn().unwrap();
                }
                guard += 1;
                assert!(guard < 200);
            }
            assert!(t.auction().is_finished());
            assert_eq!(t.human_call("P"), Err(TutorError::Finished));
            assert!(!t.outcome().is_empty());
        }
    }

    #[test]
    fn test_outcome_names_the_scoring_band() {
        let mut t = tutor();
        for (calls, expected) in [
            ("1NT P 3NT P P P", "3NT by North (game)"),
            ("P 2C P P P", "2C by East (part score)"),
            ("1S P 6S P P P", "6S by North (slam)"),
            ("1D P 5D X P P P", "5DX by North (game)"),
        ] {
            t.auction = parse_auction(Position::North, calls).unwrap();
            assert_eq!(t.outcome(), expected, "{calls}");
        }
    }

    #[test]
    fn test_passed_out_outcome() {
        let mut t = tutor();
        t.auction = parse_auction(Position::North, "P P P P").unwrap();
        assert_eq!(t.outcome(), "Passed out");
    }

    #[test]
    fn test_parse_auction() {
        let auction = parse_auction(Position::West, "1C, P 1d").unwrap();
        assert_eq!(auction.len(), 3);
        assert_eq!(auction.entries()[2].position, Position::East);
        assert!(parse_auction(Position::North, "1C 8X").is_err());
    }
}
