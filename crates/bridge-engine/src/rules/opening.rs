//! Opening bids, Polish Club style.

use crate::rules::{bid, when};
use bridge_core::{Strain, Suit};

bidding_rule! {
    struct StrongClub;
    name: "Strong 1C",
    description: "18+ HCP, any shape",
    applies: |ctx| ctx.hcp >= 18,
    calls: |_| vec![bid(1, Strain::Clubs)],
}

bidding_rule! {
    struct WeakClub;
    name: "Weak 1C",
    description: "11-14 HCP balanced without a five-card major",
    applies: |ctx| {
        ctx.hcp_in(11, 14)
            && ctx.balanced
            && ctx.len(Suit::Hearts) < 5
            && ctx.len(Suit::Spades) < 5
    },
    calls: |_| vec![bid(1, Strain::Clubs)],
}

bidding_rule! {
    struct OneNoTrump;
    name: "1NT Opening",
    description: "15-17 HCP balanced",
    applies: |ctx| ctx.balanced && ctx.hcp_in(15, 17),
    calls: |_| vec![bid(1, Strain::NoTrump)],
}

bidding_rule! {
    struct MajorOpening;
    name: "Major Opening",
    description: "11-17 HCP with a five-card major, spades first",
    applies: |ctx| ctx.hcp_in(11, 17),
    calls: |ctx| when([
        (ctx.len(Suit::Spades) >= 5, bid(1, Strain::Spades)),
        (ctx.len(Suit::Hearts) >= 5, bid(1, Strain::Hearts)),
    ]),
}

bidding_rule! {
    struct DiamondOpening;
    name: "1D Opening",
    description: "11-17 HCP with four or more diamonds",
    applies: |ctx| ctx.hcp_in(11, 17) && ctx.len(Suit::Diamonds) >= 4,
    calls: |_| vec![bid(1, Strain::Diamonds)],
}
