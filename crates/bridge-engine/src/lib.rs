//! Polish Club bidding engine.
//!
//! The engine is a pure function of a hand and an auction snapshot: it
//! classifies the auction from the acting seat's point of view, then walks
//! that context's rule table and returns the first legal candidate. It
//! never fails; when nothing applies the answer is Pass.

pub mod context;
pub mod rules;
pub mod recommend;
pub mod trace;

pub use context::{BiddingContext, ContextKind, ContextSummary};
pub use recommend::{recommend, Recommendation};
pub use rules::registry::RuleRegistry;
pub use rules::Rule;
pub use trace::{BidTrace, TraceStep};

use bridge_core::{Auction, Call, Hand, Position};
use tracing::{debug, trace};

/// The call `seat` should make holding `hand` at this point of `auction`.
pub fn select_call(hand: &Hand, auction: &Auction, seat: Position) -> Call {
    select_call_with_trace(hand, auction, seat).selected
}

/// Like [`select_call`], also recording every rule and candidate considered.
pub fn select_call_with_trace(hand: &Hand, auction: &Auction, seat: Position) -> BidTrace {
    let ctx = BiddingContext::new(hand, auction, seat);
    debug!(
        seat = %seat,
        kind = ?ctx.kind,
        hcp = ctx.hcp,
        my_last = ?ctx.my_last,
        partner_last = ?ctx.partner_last,
        "classified auction"
    );

    let registry = RuleRegistry::for_context(ctx.kind);
    let mut steps = Vec::new();
    let mut silent_rules = Vec::new();

    for rule in registry.rules() {
        if !rule.applies(&ctx) {
            continue;
        }
        let candidates = rule.calls(&ctx);
        if candidates.is_empty() {
            silent_rules.push(rule.name());
            continue;
        }
        for call in candidates {
            let legal = auction.is_valid_call(call);
            steps.push(TraceStep {
                rule: rule.name(),
                call,
                legal,
            });
            if legal {
                debug!(seat = %seat, rule = rule.name(), call = %call, "selected call");
                return BidTrace {
                    context: ctx.summary(),
                    silent_rules,
                    steps,
                    selected: call,
                    rule_name: rule.name(),
                };
            }
            trace!(rule = rule.name(), call = %call, "candidate rejected as insufficient");
        }
    }

    BidTrace {
        context: ctx.summary(),
        silent_rules,
        steps,
        selected: Call::Pass,
        rule_name: "Pass",
    }
}
