//! Ordered rule tables for each bidding context.
//!
//! A rule looks at a [`BiddingContext`] and proposes candidate calls in
//! preference order. The selector takes the first legal candidate of the
//! first rule that proposes one; a rule that proposes nothing lets the walk
//! continue to the next rule.

use crate::context::BiddingContext;
use bridge_core::{Call, Strain};

#[macro_use]
pub mod macros;
pub mod opening;
pub mod rebid;
pub mod registry;
pub mod response;

/// A bidding rule.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether this rule is relevant to the auction at all.
    fn applies(&self, ctx: &BiddingContext<'_>) -> bool;

    /// Candidate calls, most preferred first. Only consulted when `applies`
    /// holds. An explicit `Call::Pass` candidate ends the walk.
    fn calls(&self, ctx: &BiddingContext<'_>) -> Vec<Call>;
}

pub(crate) fn bid(level: u8, strain: Strain) -> Call {
    Call::bid(level, strain)
}

/// Keeps the calls whose guard holds, in order.
pub(crate) fn when<const N: usize>(options: [(bool, Call); N]) -> Vec<Call> {
    options
        .into_iter()
        .filter_map(|(guard, call)| guard.then_some(call))
        .collect()
}

bidding_rule! {
    /// Closes every table.
    struct PassByDefault;
    name: "Pass",
    description: "No rule applies",
    applies: |_| true,
    calls: |_| vec![Call::Pass],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when_keeps_order_and_guards() {
        let calls = when([
            (false, bid(1, Strain::Spades)),
            (true, bid(1, Strain::Hearts)),
            (true, Call::Pass),
        ]);
        assert_eq!(calls, vec![bid(1, Strain::Hearts), Call::Pass]);
    }
}
