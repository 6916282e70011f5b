use crate::error::ParseCallError;
use crate::strain::Strain;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn bid(level: u8, strain: Strain) -> Self {
        Call::Bid { level, strain }
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    /// Returns the level of this call, if it's a bid.
    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Returns the strain of this call, if it's a bid.
    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    /// Returns the suit of this call, if it's a suited bid.
    pub fn suit(&self) -> Option<Suit> {
        self.strain().and_then(|s| s.to_suit())
    }

    /// Comparable rank of a contract bid: `level * 5 + strain ordinal`.
    ///
    /// Five strains fit under one level step, so the order is total over
    /// every (level, strain) pair.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Call::Bid { level, strain } => Some(level * 5 + strain.idx() as u8),
            _ => None,
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain),
        }
    }

    /// Long form used in prose, e.g. "Pass" or "3NT".
    pub fn describe(self) -> String {
        match self {
            Call::Pass => "Pass".to_string(),
            Call::Double => "Double".to_string(),
            Call::Redouble => "Redouble".to_string(),
            bid => bid.render(),
        }
    }
}

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        match s.as_str() {
            "" => return Err(ParseCallError::Empty),
            "P" | "PASS" => return Ok(Call::Pass),
            "X" | "DBL" | "DOUBLE" => return Ok(Call::Double),
            "XX" | "RDBL" | "REDOUBLE" => return Ok(Call::Redouble),
            _ => {}
        }

        let mut chars = s.chars();
        let (Some(level_char), rest) = (chars.next(), chars.as_str()) else {
            return Err(ParseCallError::Empty);
        };
        if rest.is_empty() {
            return Err(ParseCallError::TooShort(s.clone()));
        }
        let level = level_char
            .to_digit(10)
            .ok_or(ParseCallError::InvalidLevel(level_char))? as u8;
        if !(1..=7).contains(&level) {
            return Err(ParseCallError::LevelOutOfRange(level));
        }
        let strain = match rest {
            "C" => Strain::Clubs,
            "D" => Strain::Diamonds,
            "H" => Strain::Hearts,
            "S" => Strain::Spades,
            "NT" | "N" => Strain::NoTrump,
            other => return Err(ParseCallError::InvalidStrain(other.to_string())),
        };
        Ok(Call::Bid { level, strain })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        for s in ["pass", "P", " Pass "] {
            assert_eq!(s.parse::<Call>(), Ok(Call::Pass));
        }
        for s in ["double", "dbl", "x", "X"] {
            assert_eq!(s.parse::<Call>(), Ok(Call::Double));
        }
        for s in ["redouble", "rdbl", "xx"] {
            assert_eq!(s.parse::<Call>(), Ok(Call::Redouble));
        }
    }

    #[test]
    fn test_parse_bids() {
        assert_eq!("1c".parse::<Call>(), Ok(Call::bid(1, Strain::Clubs)));
        assert_eq!("3NT".parse::<Call>(), Ok(Call::bid(3, Strain::NoTrump)));
        assert_eq!("2n".parse::<Call>(), Ok(Call::bid(2, Strain::NoTrump)));
        assert_eq!("7S".parse::<Call>(), Ok(Call::bid(7, Strain::Spades)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Call>(), Err(ParseCallError::Empty));
        assert_eq!("   ".parse::<Call>(), Err(ParseCallError::Empty));
        assert_eq!(
            "1".parse::<Call>(),
            Err(ParseCallError::TooShort("1".to_string()))
        );
        assert_eq!("8H".parse::<Call>(), Err(ParseCallError::LevelOutOfRange(8)));
        assert_eq!("0C".parse::<Call>(), Err(ParseCallError::LevelOutOfRange(0)));
        assert_eq!("AH".parse::<Call>(), Err(ParseCallError::InvalidLevel('A')));
        assert_eq!(
            "2Z".parse::<Call>(),
            Err(ParseCallError::InvalidStrain("Z".to_string()))
        );
        assert_eq!(
            "1NTX".parse::<Call>(),
            Err(ParseCallError::InvalidStrain("NTX".to_string()))
        );
    }

    #[test]
    fn test_rank_orders_bids() {
        assert_eq!(Call::bid(1, Strain::Clubs).rank(), Some(5));
        assert_eq!(Call::bid(1, Strain::NoTrump).rank(), Some(9));
        assert_eq!(Call::bid(2, Strain::Clubs).rank(), Some(10));
        assert_eq!(Call::Pass.rank(), None);
        assert!(Call::bid(1, Strain::NoTrump).rank() < Call::bid(2, Strain::Clubs).rank());
    }

    #[test]
    fn test_render() {
        assert_eq!(Call::bid(3, Strain::NoTrump).to_string(), "3NT");
        assert_eq!(Call::bid(4, Strain::Hearts).to_string(), "4H");
        assert_eq!(Call::Redouble.to_string(), "XX");
        assert_eq!(Call::Pass.describe(), "Pass");
        assert_eq!(Call::bid(2, Strain::Spades).describe(), "2S");
    }

    #[test]
    fn test_render_parses_back() {
        for level in 1..=7 {
            for strain in Strain::ALL {
                let call = Call::bid(level, strain);
                assert_eq!(call.render().parse::<Call>(), Ok(call));
            }
        }
    }
}
