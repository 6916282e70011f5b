use bridge_core::{Auction, Call, Distribution, Hand, Position, Strain, Suit};
use serde::Serialize;

/// Which rule table applies to the seat about to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContextKind {
    /// The seat has not bid and partner has not just acted.
    Opening,
    /// The seat has not bid; partner made the latest non-pass call.
    Response,
    /// The seat has bid before and partner made the latest non-pass call.
    Rebid,
    /// An opponent made the latest non-pass call after we had bid.
    Competitive,
}

/// Everything a rule may look at, derived from a hand and an auction snapshot.
///
/// Passes are transparent throughout: "last call" means the most recent call
/// that wasn't a pass.
#[derive(Debug, Clone)]
pub struct BiddingContext<'a> {
    pub seat: Position,
    pub hand: &'a Hand,
    pub auction: &'a Auction,
    pub hcp: u8,
    pub distribution: Distribution,
    pub balanced: bool,
    pub my_last: Option<Call>,
    pub partner_last: Option<Call>,
    pub kind: ContextKind,
}

impl<'a> BiddingContext<'a> {
    pub fn new(hand: &'a Hand, auction: &'a Auction, seat: Position) -> Self {
        let eval = hand.evaluate();
        let partner = seat.partner();
        let my_last = auction.last_call_by(seat);
        let partner_last = auction.last_call_by(partner);
        let partner_just_acted = auction
            .last_action()
            .is_some_and(|entry| entry.position == partner);

        let kind = match (my_last.is_some(), partner_just_acted) {
            (false, false) => ContextKind::Opening,
            (false, true) => ContextKind::Response,
            (true, true) => ContextKind::Rebid,
            (true, false) => ContextKind::Competitive,
        };

        Self {
            seat,
            hand,
            auction,
            hcp: eval.hcp,
            distribution: eval.distribution,
            balanced: hand.is_balanced(),
            my_last,
            partner_last,
            kind,
        }
    }

    pub fn len(&self, suit: Suit) -> u8 {
        self.distribution.get(suit)
    }

    pub fn hcp_in(&self, min: u8, max: u8) -> bool {
        (min..=max).contains(&self.hcp)
    }

    pub fn partner_bid(&self, level: u8, strain: Strain) -> bool {
        self.partner_last == Some(Call::bid(level, strain))
    }

    pub fn i_bid(&self, level: u8, strain: Strain) -> bool {
        self.my_last == Some(Call::bid(level, strain))
    }

    /// Partner's non-pass calls in auction order.
    pub fn partner_calls(&self) -> Vec<Call> {
        let partner = self.seat.partner();
        self.auction
            .entries()
            .iter()
            .filter(|e| e.position == partner && !e.call.is_pass())
            .map(|e| e.call)
            .collect()
    }

    /// Partner's first non-pass call was `level`-`strain`.
    pub fn partner_opened(&self, level: u8, strain: Strain) -> bool {
        self.partner_calls().first() == Some(&Call::bid(level, strain))
    }

    /// Partner's call before their latest one.
    pub fn partner_previous(&self) -> Option<Call> {
        let calls = self.partner_calls();
        calls.len().checked_sub(2).map(|i| calls[i])
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            seat: self.seat,
            kind: self.kind,
            hcp: self.hcp,
            distribution: self.distribution,
            balanced: self.balanced,
            my_last: self.my_last,
            partner_last: self.partner_last,
        }
    }
}

/// Owned snapshot of a [`BiddingContext`] for traces and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSummary {
    pub seat: Position,
    pub kind: ContextKind,
    pub hcp: u8,
    pub distribution: Distribution,
    pub balanced: bool,
    pub my_last: Option<Call>,
    pub partner_last: Option<Call>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand() -> Hand {
        Hand::parse("AK2.QJ3.T98.7654").unwrap()
    }

    #[test]
    fn test_empty_auction_is_opening() {
        let hand = hand();
        let auction = Auction::new();
        let ctx = BiddingContext::new(&hand, &auction, Position::North);
        assert_eq!(ctx.kind, ContextKind::Opening);
        assert_eq!(ctx.my_last, None);
        assert_eq!(ctx.hcp, 10);
    }

    #[test]
    fn test_after_partner_opening_is_response() {
        let hand = hand();
        let auction = Auction::bidding(Position::North, "1C P");
        let ctx = BiddingContext::new(&hand, &auction, Position::South);
        assert_eq!(ctx.kind, ContextKind::Response);
        assert!(ctx.partner_bid(1, Strain::Clubs));
        assert!(ctx.partner_opened(1, Strain::Clubs));
    }

    #[test]
    fn test_after_opponent_opening_is_opening() {
        let hand = hand();
        let auction = Auction::bidding(Position::East, "1H");
        let ctx = BiddingContext::new(&hand, &auction, Position::South);
        assert_eq!(ctx.kind, ContextKind::Opening);
    }

    #[test]
    fn test_partner_reply_is_rebid() {
        let hand = hand();
        let auction = Auction::bidding(Position::North, "1C P 1D P");
        let ctx = BiddingContext::new(&hand, &auction, Position::North);
        assert_eq!(ctx.kind, ContextKind::Rebid);
        assert!(ctx.i_bid(1, Strain::Clubs));
        assert!(ctx.partner_bid(1, Strain::Diamonds));
    }

    #[test]
    fn test_opponent_overcall_is_competitive() {
        let hand = hand();
        let auction = Auction::bidding(Position::North, "1C 1S 1NT 2H");
        let ctx = BiddingContext::new(&hand, &auction, Position::North);
        assert_eq!(ctx.kind, ContextKind::Competitive);
    }

    #[test]
    fn test_partner_previous() {
        let hand = hand();
        let auction = Auction::bidding(Position::North, "1NT P 2C P 2H P");
        let ctx = BiddingContext::new(&hand, &auction, Position::South);
        assert_eq!(ctx.partner_previous(), Some(Call::bid(1, Strain::NoTrump)));
        assert_eq!(ctx.partner_last, Some(Call::bid(2, Strain::Hearts)));
    }
}
