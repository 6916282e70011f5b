use crate::select_call_with_trace;
use bridge_core::{Auction, Call, Hand, Position};
use serde::Serialize;

/// How a submitted call compares with the engine's choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub recommended: Call,
    pub rule_name: &'static str,
    pub matches: bool,
    pub hcp: u8,
    pub explanation: Option<String>,
}

pub fn recommend(hand: &Hand, auction: &Auction, seat: Position, submitted: Call) -> Recommendation {
    let trace = select_call_with_trace(hand, auction, seat);
    let matches = trace.selected == submitted;
    let explanation = (!matches).then(|| {
        format!(
            "With {} HCP, the recommended bid is {}",
            trace.context.hcp,
            trace.selected.describe()
        )
    });
    Recommendation {
        recommended: trace.selected,
        rule_name: trace.rule_name,
        matches,
        hcp: trace.context.hcp,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::Strain;

    #[test]
    fn test_matching_call_has_no_explanation() {
        let hand = Hand::parse("A32.K32.AQ2.Q432").unwrap();
        let rec = recommend(&hand, &Auction::new(), Position::North, Call::bid(1, Strain::NoTrump));
        assert!(rec.matches);
        assert_eq!(rec.rule_name, "1NT Opening");
        assert_eq!(rec.explanation, None);
    }

    #[test]
    fn test_mismatch_explains_with_hcp() {
        let hand = Hand::parse("A32.K32.AQ2.Q432").unwrap();
        let rec = recommend(&hand, &Auction::new(), Position::North, Call::Pass);
        assert!(!rec.matches);
        assert_eq!(rec.recommended, Call::bid(1, Strain::NoTrump));
        assert_eq!(
            rec.explanation.as_deref(),
            Some("With 15 HCP, the recommended bid is 1NT")
        );
    }
}
