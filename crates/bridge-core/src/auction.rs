use crate::board::Position;
use crate::call::Call;
use crate::contract::{Contract, DoubleStatus};
use serde::{Deserialize, Serialize};

/// One recorded call and the seat that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub call: Call,
    pub position: Position,
}

/// Append-only record of the calls made so far.
///
/// Every query is a pure function of the recorded entries, so an `Auction`
/// can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Auction {
    entries: Vec<Entry>,
}

impl Auction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a call. Legality is the caller's concern; see [`Auction::is_valid_call`].
    pub fn add_call(&mut self, call: Call, position: Position) {
        self.entries.push(Entry { call, position });
    }

    /// Build an auction from space-separated calls like "1C P 1D", seating
    /// them in rotation starting with `first`.
    /// Panics on invalid input, so use it for tests and known-good data only.
    pub fn bidding(first: Position, calls: &str) -> Self {
        let mut auction = Self::new();
        let mut position = first;
        for token in calls.split_whitespace() {
            auction.add_call(token.parse().expect("invalid call"), position);
            position = position.next();
        }
        auction
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Seat following whoever called last. `None` before the first call.
    pub fn next_position(&self) -> Option<Position> {
        self.last_entry().map(|e| e.position.next())
    }

    /// The most recent contract bid and who made it.
    pub fn last_bid(&self) -> Option<(Position, Call)> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.call.is_bid())
            .map(|e| (e.position, e.call))
    }

    /// Most recent call by `position` that wasn't a pass.
    pub fn last_call_by(&self, position: Position) -> Option<Call> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.position == position && !e.call.is_pass())
            .map(|e| e.call)
    }

    /// Most recent entry that wasn't a pass, from any seat.
    pub fn last_action(&self) -> Option<&Entry> {
        self.entries.iter().rev().find(|e| !e.call.is_pass())
    }

    /// Pass, Double and Redouble are always accepted; a bid must outrank the
    /// current highest bid.
    pub fn is_valid_call(&self, call: Call) -> bool {
        let Some(rank) = call.rank() else {
            return true;
        };
        match self.last_bid().and_then(|(_, last)| last.rank()) {
            Some(current) => rank > current,
            None => true,
        }
    }

    /// At least one non-pass call followed by three passes.
    pub fn is_complete(&self) -> bool {
        let n = self.entries.len();
        n >= 4
            && self.entries[n - 3..].iter().all(|e| e.call.is_pass())
            && self.entries.iter().any(|e| !e.call.is_pass())
    }

    /// Four passes from the start.
    pub fn is_passed_out(&self) -> bool {
        self.entries.len() == 4 && self.entries.iter().all(|e| e.call.is_pass())
    }

    pub fn is_finished(&self) -> bool {
        self.is_complete() || self.is_passed_out()
    }

    /// The contract the auction currently stands in. The declarer is the
    /// first player of the declaring side to have named the final strain.
    pub fn final_contract(&self) -> Option<Contract> {
        let last_idx = self.entries.iter().rposition(|e| e.call.is_bid())?;
        let last = self.entries[last_idx];
        let Call::Bid { level, strain } = last.call else {
            return None;
        };

        let double_status =
            self.entries[last_idx + 1..]
                .iter()
                .fold(DoubleStatus::Undoubled, |status, e| match e.call {
                    Call::Double => DoubleStatus::Doubled,
                    Call::Redouble => DoubleStatus::Redoubled,
                    _ => status,
                });

        let side = last.position.partnership();
        let declarer = self
            .entries
            .iter()
            .find(|e| side.contains(e.position) && e.call.strain() == Some(strain))
            .map(|e| e.position)
            .unwrap_or(last.position);

        Some(Contract {
            level,
            strain,
            double_status,
            declarer,
        })
    }
}
