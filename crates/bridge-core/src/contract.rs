use crate::board::Position;
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DoubleStatus {
    #[default]
    Undoubled,
    Doubled,
    Redoubled,
}

/// The final contract of a completed auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contract {
    pub level: u8,
    pub strain: Strain,
    pub double_status: DoubleStatus,
    pub declarer: Position,
}

impl Contract {
    pub fn is_game(&self) -> bool {
        match self.strain {
            Strain::NoTrump => self.level >= 3,
            Strain::Hearts | Strain::Spades => self.level >= 4,
            Strain::Clubs | Strain::Diamonds => self.level >= 5,
        }
    }

    pub fn is_slam(&self) -> bool {
        self.level >= 6
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.double_status {
            DoubleStatus::Undoubled => "",
            DoubleStatus::Doubled => "X",
            DoubleStatus::Redoubled => "XX",
        };
        write!(f, "{}{}{} by {}", self.level, self.strain, suffix, self.declarer)
    }
}
