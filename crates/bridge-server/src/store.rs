//! In-memory tables behind one reader/writer lock.

use crate::error::AppError;
use bridge_core::{deal, Auction, Call, Hand, Position, Suit};
use bridge_engine::select_call_with_trace;
use parking_lot::RwLock;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// One dealt board and its auction.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: Uuid,
    pub hands: [Hand; 4],
    pub auction: Auction,
    pub dealer: Position,
    pub to_act: Position,
}

impl Table {
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_hands(deal::deal(rng))
    }

    pub fn with_hands(hands: [Hand; 4]) -> Self {
        Self {
            id: Uuid::new_v4(),
            hands,
            auction: Auction::new(),
            dealer: Position::North,
            to_act: Position::North,
        }
    }

    pub fn hand(&self, position: Position) -> &Hand {
        &self.hands[position.idx()]
    }

    /// Checks turn order, parses and legality-checks `bid`, then records it.
    pub fn submit(&mut self, position: Position, bid: &str) -> Result<Call, AppError> {
        if self.auction.is_finished() {
            return Err(AppError::AuctionComplete);
        }
        if position != self.to_act {
            return Err(AppError::OutOfTurn {
                expected: self.to_act,
            });
        }
        let call: Call = bid.parse()?;
        self.record(call)?;
        Ok(call)
    }

    /// Lets the engine make the call for whoever is on turn.
    pub fn auto_bid(&mut self) -> Result<(Position, Call, &'static str), AppError> {
        if self.auction.is_finished() {
            return Err(AppError::AuctionComplete);
        }
        let seat = self.to_act;
        let trace = select_call_with_trace(self.hand(seat), &self.auction, seat);
        self.record(trace.selected)?;
        Ok((seat, trace.selected, trace.rule_name))
    }

    fn record(&mut self, call: Call) -> Result<(), AppError> {
        if !self.auction.is_valid_call(call) {
            let detail = match self.auction.last_bid() {
                Some((_, last)) => format!("{call} does not outrank {last}"),
                None => format!("{call} is not allowed here"),
            };
            return Err(AppError::IllegalBid { detail });
        }
        self.auction.add_call(call, self.to_act);
        self.to_act = self.to_act.next();
        Ok(())
    }

    pub fn view(&self) -> SessionView {
        let finished = self.auction.is_finished();
        SessionView {
            id: self.id,
            dealer: self.dealer,
            to_act: (!finished).then_some(self.to_act),
            players: Position::ALL
                .iter()
                .map(|&position| PlayerView::new(position, self.hand(position)))
                .collect(),
            auction: self
                .auction
                .entries()
                .iter()
                .map(|e| CallView {
                    position: e.position,
                    call: e.call.render(),
                })
                .collect(),
            complete: self.auction.is_complete(),
            passed_out: self.auction.is_passed_out(),
            contract: self.auction.final_contract().map(|c| c.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub dealer: Position,
    pub to_act: Option<Position>,
    pub players: Vec<PlayerView>,
    pub auction: Vec<CallView>,
    pub complete: bool,
    pub passed_out: bool,
    pub contract: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub position: Position,
    pub hcp: u8,
    pub spades: String,
    pub hearts: String,
    pub diamonds: String,
    pub clubs: String,
}

impl PlayerView {
    fn new(position: Position, hand: &Hand) -> Self {
        Self {
            position,
            hcp: hand.hcp(),
            spades: hand.holding(Suit::Spades),
            hearts: hand.holding(Suit::Hearts),
            diamonds: hand.holding(Suit::Diamonds),
            clubs: hand.holding(Suit::Clubs),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallView {
    pub position: Position,
    pub call: String,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    tables: RwLock<HashMap<Uuid, Table>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, table: Table) -> SessionView {
        let view = table.view();
        self.tables.write().insert(table.id, table);
        info!(session_id = %view.id, "session created");
        view
    }

    pub fn create(&self) -> SessionView {
        self.insert(Table::deal(&mut rand::thread_rng()))
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` against a table under the shared lock.
    pub fn with_table<T>(&self, id: &str, f: impl FnOnce(&Table) -> T) -> Result<T, AppError> {
        let key = parse_id(id)?;
        let tables = self.tables.read();
        let table = tables
            .get(&key)
            .ok_or_else(|| AppError::session_not_found(id))?;
        Ok(f(table))
    }

    /// Runs `f` against a table under the exclusive lock.
    pub fn with_table_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Table) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let key = parse_id(id)?;
        let mut tables = self.tables.write();
        let table = tables
            .get_mut(&key)
            .ok_or_else(|| AppError::session_not_found(id))?;
        f(table)
    }
}

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::session_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> Table {
        Table::deal(&mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_new_table() {
        let t = table();
        assert_eq!(t.dealer, Position::North);
        assert_eq!(t.to_act, Position::North);
        assert!(t.hands.iter().all(|h| h.len() == 13));
        let view = t.view();
        assert_eq!(view.players.len(), 4);
        assert_eq!(view.players.iter().map(|p| p.hcp as u32).sum::<u32>(), 40);
        assert!(!view.complete);
    }

    #[test]
    fn test_submit_advances_turn() {
        let mut t = table();
        assert_eq!(t.submit(Position::North, "1c").unwrap(), Call::bid(1, bridge_core::Strain::Clubs));
        assert_eq!(t.to_act, Position::East);
        assert_eq!(t.view().auction[0].call, "1C");
    }

    #[test]
    fn test_submit_errors() {
        let mut t = table();
        assert!(matches!(
            t.submit(Position::South, "P"),
            Err(AppError::OutOfTurn { expected: Position::North })
        ));
        assert!(matches!(
            t.submit(Position::North, "8C"),
            Err(AppError::BadRequest { code: "INVALID_CALL", .. })
        ));
        t.submit(Position::North, "2H").unwrap();
        assert!(matches!(
            t.submit(Position::East, "1S"),
            Err(AppError::IllegalBid { .. })
        ));
        assert_eq!(t.to_act, Position::East);
    }

    #[test]
    fn test_finished_auction_rejects_calls() {
        let mut t = table();
        for seat in Position::ALL {
            t.submit(seat, "pass").unwrap();
        }
        let view = t.view();
        assert!(view.passed_out);
        assert!(view.to_act.is_none());
        assert!(matches!(
            t.submit(Position::North, "P"),
            Err(AppError::AuctionComplete)
        ));
        assert!(matches!(t.auto_bid(), Err(AppError::AuctionComplete)));
    }

    #[test]
    fn test_auto_bid_runs_to_completion() {
        let mut t = table();
        let mut guard = 0;
        while !t.auction.is_finished() {
            let (seat, call, _rule) = t.auto_bid().unwrap();
            assert_eq!(t.auction.last_entry().map(|e| (e.position, e.call)), Some((seat, call)));
            guard += 1;
            assert!(guard < 200);
        }
    }

    #[test]
    fn test_store_lookup() {
        let store = SessionStore::new();
        let view = store.create();
        assert_eq!(store.len(), 1);
        let id = view.id.to_string();
        assert_eq!(store.with_table(&id, |t| t.to_act).unwrap(), Position::North);
        assert!(matches!(
            store.with_table("not-a-uuid", |_| ()),
            Err(AppError::NotFound { code: "SESSION_NOT_FOUND", .. })
        ));
        let missing = Uuid::new_v4().to_string();
        assert!(store.with_table_mut(&missing, |_| Ok(())).is_err());
    }
}
