//! First response to partner's call.

use crate::context::BiddingContext;
use crate::rules::{bid, when};
use bridge_core::{Call, Strain, Suit};

fn last_bid_strain(ctx: &BiddingContext<'_>) -> Option<Strain> {
    ctx.auction.last_bid().and_then(|(_, call)| call.strain())
}

bidding_rule! {
    struct SlamTry;
    name: "Key-card Ask",
    description: "16+ HCP over a bid at the three level or higher: 4C Gerber over notrump, else 4NT Blackwood",
    applies: |ctx| {
        ctx.hcp >= 16
            && ctx
                .auction
                .last_bid()
                .and_then(|(_, call)| call.level())
                .is_some_and(|level| level >= 3)
    },
    calls: |ctx| match last_bid_strain(ctx) {
        Some(Strain::NoTrump) => vec![bid(4, Strain::Clubs)],
        _ => vec![bid(4, Strain::NoTrump)],
    },
}

bidding_rule! {
    struct JacobyTransfer;
    name: "Jacoby Transfer",
    description: "5+ HCP with a five-card major over 1NT: 2D shows hearts, 2H shows spades",
    applies: |ctx| ctx.partner_bid(1, Strain::NoTrump) && ctx.hcp >= 5,
    calls: |ctx| when([
        (ctx.len(Suit::Hearts) >= 5, bid(2, Strain::Diamonds)),
        (ctx.len(Suit::Spades) >= 5, bid(2, Strain::Hearts)),
    ]),
}

bidding_rule! {
    struct Stayman;
    name: "Stayman",
    description: "8+ HCP with a four-card major over 1NT",
    applies: |ctx| {
        ctx.partner_bid(1, Strain::NoTrump)
            && ctx.hcp >= 8
            && (ctx.len(Suit::Hearts) >= 4 || ctx.len(Suit::Spades) >= 4)
    },
    calls: |_| vec![bid(2, Strain::Clubs)],
}

bidding_rule! {
    struct NoTrumpPass;
    name: "Pass 1NT",
    description: "Under 8 HCP without a major to transfer into",
    applies: |ctx| ctx.partner_bid(1, Strain::NoTrump) && ctx.hcp < 8,
    calls: |_| vec![Call::Pass],
}

bidding_rule! {
    struct NegativeDiamond;
    name: "Negative 1D",
    description: "0-6 HCP facing 1C",
    applies: |ctx| ctx.partner_bid(1, Strain::Clubs) && ctx.hcp <= 6,
    calls: |_| vec![bid(1, Strain::Diamonds)],
}

bidding_rule! {
    struct PositiveClubResponse;
    name: "Positive Response to 1C",
    description: "7+ HCP facing 1C: a four-card major, spades first, else 1NT with 7-10 balanced",
    applies: |ctx| ctx.partner_bid(1, Strain::Clubs) && ctx.hcp >= 7,
    calls: |ctx| when([
        (ctx.len(Suit::Spades) >= 4, bid(1, Strain::Spades)),
        (ctx.len(Suit::Hearts) >= 4, bid(1, Strain::Hearts)),
        (ctx.hcp <= 10 && ctx.balanced, bid(1, Strain::NoTrump)),
    ]),
}

bidding_rule! {
    struct SingleRaise;
    name: "Single Raise",
    description: "6-9 HCP with three-card support for partner's suit",
    applies: |ctx| ctx.hcp_in(6, 9),
    calls: |ctx| match ctx.partner_last {
        Some(Call::Bid { level, strain }) if level < 7 => match strain.to_suit() {
            Some(suit) if ctx.len(suit) >= 3 => vec![bid(level + 1, strain)],
            _ => vec![],
        },
        _ => vec![],
    },
}
