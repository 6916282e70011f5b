use crate::context::ContextSummary;
use bridge_core::Call;
use serde::Serialize;

/// One candidate call a rule proposed, and whether the auction allowed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub rule: &'static str,
    pub call: Call,
    pub legal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BidTrace {
    pub context: ContextSummary,
    /// Rules that applied but proposed nothing are listed here, in order.
    pub silent_rules: Vec<&'static str>,
    pub steps: Vec<TraceStep>,
    pub selected: Call,
    pub rule_name: &'static str,
}
