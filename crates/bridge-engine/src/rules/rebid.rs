//! Continuations once both partners have spoken.
//!
//! Each rule is keyed on the pair (my last call, partner's last call), with
//! a few also looking further back in partner's calls.

use crate::context::BiddingContext;
use crate::rules::{bid, when};
use bridge_core::{Call, Hand, Rank, Strain, Suit};

/// Trump suit for a key-card count: the contract bid made just before
/// partner's 4NT. `None` when that bid was in notrump.
fn blackwood_trump(ctx: &BiddingContext<'_>) -> Option<Suit> {
    let partner = ctx.seat.partner();
    let entries = ctx.auction.entries();
    let ask = entries
        .iter()
        .rposition(|e| e.position == partner && e.call == bid(4, Strain::NoTrump))?;
    entries[..ask]
        .iter()
        .rev()
        .find(|e| e.call.is_bid())
        .and_then(|e| e.call.suit())
}

/// Aces plus the trump King.
pub fn key_cards(hand: &Hand, trump: Option<Suit>) -> u8 {
    let trump_king = trump.is_some_and(|suit| hand.has_card(suit, Rank::King));
    hand.aces() + u8::from(trump_king)
}

/// 5C shows 0 or 4, 5D 1, 5H 2, 5S 3.
pub fn blackwood_answer(key_cards: u8) -> Call {
    let strain = match key_cards % 4 {
        0 => Strain::Clubs,
        1 => Strain::Diamonds,
        2 => Strain::Hearts,
        _ => Strain::Spades,
    };
    bid(5, strain)
}

/// 4D shows 0 or 4 aces, 4H 1, 4S 2, 4NT 3.
pub fn gerber_answer(aces: u8) -> Call {
    let strain = match aces % 4 {
        0 => Strain::Diamonds,
        1 => Strain::Hearts,
        2 => Strain::Spades,
        _ => Strain::NoTrump,
    };
    bid(4, strain)
}

fn partner_major(ctx: &BiddingContext<'_>) -> Option<Suit> {
    ctx.partner_last
        .and_then(|call| call.suit())
        .filter(|suit| suit.is_major())
}

bidding_rule! {
    struct BlackwoodResponse;
    name: "Blackwood Response",
    description: "Key cards (aces and the trump king) in answer to 4NT",
    applies: |ctx| ctx.partner_bid(4, Strain::NoTrump),
    calls: |ctx| vec![blackwood_answer(key_cards(ctx.hand, blackwood_trump(ctx)))],
}

bidding_rule! {
    struct GerberResponse;
    name: "Gerber Response",
    description: "Aces in answer to 4C over our notrump",
    applies: |ctx| {
        ctx.partner_bid(4, Strain::Clubs)
            && ctx.my_last.and_then(|call| call.strain()) == Some(Strain::NoTrump)
    },
    calls: |ctx| vec![gerber_answer(ctx.hand.aces())],
}

bidding_rule! {
    struct TransferCompletion;
    name: "Complete Transfer",
    description: "Accept the transfer, jumping with three-card support and 16+ HCP",
    applies: |ctx| {
        ctx.i_bid(1, Strain::NoTrump)
            && (ctx.partner_bid(2, Strain::Diamonds) || ctx.partner_bid(2, Strain::Hearts))
    },
    calls: |ctx| {
        let major = if ctx.partner_bid(2, Strain::Diamonds) {
            Strain::Hearts
        } else {
            Strain::Spades
        };
        let support = major.to_suit().map_or(0, |suit| ctx.len(suit));
        when([
            (support >= 3 && ctx.hcp >= 16, bid(3, major)),
            (true, bid(2, major)),
        ])
    },
}

bidding_rule! {
    struct StaymanAnswer;
    name: "Stayman Answer",
    description: "Show a four-card major, hearts first, else deny with 2D",
    applies: |ctx| ctx.i_bid(1, Strain::NoTrump) && ctx.partner_bid(2, Strain::Clubs),
    calls: |ctx| when([
        (ctx.len(Suit::Hearts) >= 4, bid(2, Strain::Hearts)),
        (ctx.len(Suit::Spades) >= 4, bid(2, Strain::Spades)),
        (true, bid(2, Strain::Diamonds)),
    ]),
}

bidding_rule! {
    struct StaymanFollowUp;
    name: "After Stayman",
    description: "Responder places the contract once opener has answered Stayman",
    applies: |ctx| {
        ctx.i_bid(2, Strain::Clubs)
            && ctx.partner_previous() == Some(bid(1, Strain::NoTrump))
            && (ctx.partner_bid(2, Strain::Diamonds)
                || ctx.partner_bid(2, Strain::Hearts)
                || ctx.partner_bid(2, Strain::Spades))
    },
    calls: |ctx| {
        let shown = partner_major(ctx);
        if shown.is_some() && ctx.hcp <= 7 {
            return vec![Call::Pass];
        }
        let mut calls = Vec::new();
        if let Some(major) = shown.filter(|&suit| ctx.len(suit) >= 4) {
            if ctx.hcp >= 8 {
                calls.push(bid(4, Strain::from(major)));
            }
        }
        calls.extend(when([
            (ctx.hcp_in(8, 9), bid(2, Strain::NoTrump)),
            (ctx.hcp >= 16, bid(4, Strain::NoTrump)),
            (ctx.hcp_in(10, 15), bid(3, Strain::NoTrump)),
            (true, Call::Pass),
        ]));
        calls
    },
}

bidding_rule! {
    struct PuppetAnswer;
    name: "Puppet Stayman Answer",
    description: "Over 3C show a five-card major, else 3D",
    applies: |ctx| ctx.i_bid(2, Strain::NoTrump) && ctx.partner_bid(3, Strain::Clubs),
    calls: |ctx| when([
        (ctx.len(Suit::Hearts) >= 5, bid(3, Strain::Hearts)),
        (ctx.len(Suit::Spades) >= 5, bid(3, Strain::Spades)),
        (true, bid(3, Strain::Diamonds)),
        (true, Call::Pass),
    ]),
}

bidding_rule! {
    struct PuppetFollowUp;
    name: "After Puppet Stayman",
    description: "Slam, game or 3NT depending on fit and strength",
    applies: |ctx| {
        ctx.i_bid(3, Strain::Clubs) && ctx.partner_last.and_then(|call| call.level()) == Some(3)
    },
    calls: |ctx| {
        if let Some(major) = partner_major(ctx) {
            if ctx.len(major) >= 3 {
                let strain = Strain::from(major);
                return when([
                    (ctx.hcp >= 13, bid(6, strain)),
                    (ctx.hcp >= 8, bid(4, strain)),
                    (true, bid(3, Strain::NoTrump)),
                    (true, Call::Pass),
                ]);
            }
        }
        if ctx.partner_bid(3, Strain::Diamonds) || partner_major(ctx).is_some() {
            when([(ctx.hcp >= 8, bid(3, Strain::NoTrump)), (true, Call::Pass)])
        } else {
            vec![]
        }
    },
}

bidding_rule! {
    struct ResponderSecondTurn;
    name: "Responder After Strong Rebid",
    description: "Responder's second call after 1C-1D and a two-level rebid",
    applies: |ctx| {
        ctx.i_bid(1, Strain::Diamonds)
            && ctx.partner_last.and_then(|call| call.level()) == Some(2)
            && ctx.partner_opened(1, Strain::Clubs)
    },
    calls: |ctx| {
        let hearts = ctx.len(Suit::Hearts);
        let spades = ctx.len(Suit::Spades);
        match ctx.partner_last.and_then(|call| call.strain()) {
            Some(Strain::NoTrump) => when([
                (hearts >= 5 || spades >= 5, bid(3, Strain::Clubs)),
                (ctx.hcp >= 12, bid(4, Strain::Clubs)),
                (ctx.hcp >= 8, bid(3, Strain::NoTrump)),
                (true, Call::Pass),
            ]),
            Some(Strain::Clubs) => when([
                (hearts >= 4, bid(2, Strain::Hearts)),
                (spades >= 4, bid(2, Strain::Spades)),
                (true, bid(2, Strain::Diamonds)),
                (true, Call::Pass),
            ]),
            Some(Strain::Hearts) => when([
                (hearts >= 3, bid(3, Strain::Hearts)),
                (ctx.hcp >= 6, bid(2, Strain::NoTrump)),
                (true, Call::Pass),
            ]),
            Some(Strain::Spades) => when([
                (spades >= 3, bid(3, Strain::Spades)),
                (ctx.hcp >= 6, bid(2, Strain::NoTrump)),
                (true, Call::Pass),
            ]),
            Some(Strain::Diamonds) => when([
                (ctx.len(Suit::Diamonds) >= 3 && ctx.hcp >= 6, bid(3, Strain::Diamonds)),
                (ctx.hcp >= 6, bid(2, Strain::NoTrump)),
                (true, Call::Pass),
            ]),
            None => vec![],
        }
    },
}

bidding_rule! {
    struct StrongClubRebid;
    name: "1C Rebid After 1D",
    description: "1NT with the weak balanced club; with 18+ show shape",
    applies: |ctx| ctx.i_bid(1, Strain::Clubs) && ctx.partner_bid(1, Strain::Diamonds),
    calls: |ctx| {
        let strong = ctx.hcp >= 18;
        when([
            (ctx.hcp_in(11, 14) && ctx.balanced, bid(1, Strain::NoTrump)),
            (strong && ctx.balanced && ctx.hcp <= 19, bid(2, Strain::NoTrump)),
            (strong && ctx.len(Suit::Clubs) >= 5, bid(2, Strain::Clubs)),
            (strong && ctx.len(Suit::Hearts) >= 4, bid(2, Strain::Hearts)),
            (strong && ctx.len(Suit::Spades) >= 4, bid(2, Strain::Spades)),
            (strong && ctx.len(Suit::Diamonds) >= 4, bid(2, Strain::Diamonds)),
        ])
    },
}

bidding_rule! {
    struct ClubMajorContinuation;
    name: "1C Rebid After Major",
    description: "Raise with support, else 1NT balanced minimum, else a real minor",
    applies: |ctx| {
        ctx.i_bid(1, Strain::Clubs) && (ctx.partner_bid(1, Strain::Hearts) || ctx.partner_bid(1, Strain::Spades))
    },
    calls: |ctx| {
        let Some(major) = partner_major(ctx) else {
            return vec![];
        };
        let support = ctx.len(major);
        let strain = Strain::from(major);
        if support >= 4 || (support >= 3 && ctx.hcp >= 13) {
            let level = if support >= 4 || ctx.hcp >= 14 { 3 } else { 2 };
            return vec![bid(level, strain)];
        }
        when([
            (ctx.balanced && ctx.hcp_in(11, 14), bid(1, Strain::NoTrump)),
            (ctx.len(Suit::Clubs) >= 5, bid(2, Strain::Clubs)),
            (ctx.len(Suit::Diamonds) >= 4, bid(2, Strain::Diamonds)),
        ])
    },
}

bidding_rule! {
    struct ClubNoTrumpContinuation;
    name: "1C Rebid After 1NT",
    description: "Long clubs, then diamonds, then 2NT with 18+ balanced",
    applies: |ctx| ctx.i_bid(1, Strain::Clubs) && ctx.partner_bid(1, Strain::NoTrump),
    calls: |ctx| when([
        (ctx.len(Suit::Clubs) >= 5, bid(2, Strain::Clubs)),
        (ctx.len(Suit::Diamonds) >= 4, bid(2, Strain::Diamonds)),
        (ctx.balanced && ctx.hcp >= 18, bid(2, Strain::NoTrump)),
    ]),
}
