pub mod auction;
pub mod board;
pub mod call;
pub mod card;
pub mod contract;
pub mod deal;
pub mod error;
pub mod hand;
pub mod io;
pub mod rank;
pub mod strain;
pub mod suit;

pub use auction::{Auction, Entry};
pub use board::{Partnership, Position};
pub use call::Call;
pub use card::Card;
pub use contract::{Contract, DoubleStatus};
pub use deal::Deck;
pub use error::{ParseCallError, ParseHandError, ParsePositionError};
pub use hand::{Distribution, Evaluation, Hand};
pub use rank::Rank;
pub use strain::Strain;
pub use suit::Suit;
