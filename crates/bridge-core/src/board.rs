use crate::error::ParsePositionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl Partnership {
    pub fn contains(self, pos: Position) -> bool {
        pos.partnership() == self
    }
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    pub fn partnership(self) -> Partnership {
        match self {
            Position::North | Position::South => Partnership::NS,
            Position::East | Position::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        Position::ALL[(self.idx() + 1) % 4]
    }

    pub fn idx(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    /// The seat two places around the table.
    pub fn partner(self) -> Self {
        Position::ALL[(self.idx() + 2) % 4]
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Position::North => "North",
            Position::East => "East",
            Position::South => "South",
            Position::West => "West",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts full seat names or their initial, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let position = match trimmed.to_ascii_lowercase().as_str() {
            "north" | "n" => Position::North,
            "east" | "e" => Position::East,
            "south" | "s" => Position::South,
            "west" | "w" => Position::West,
            _ => return Err(ParsePositionError(trimmed.to_string())),
        };
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_next() {
        assert_eq!(Position::North.next(), Position::East);
        assert_eq!(Position::West.next(), Position::North);
    }

    #[test]
    fn test_partner_is_two_seats_away() {
        for pos in Position::ALL {
            assert_eq!(pos.partner(), pos.next().next());
            assert_eq!(pos.partner().partner(), pos);
        }
        assert_eq!(Position::East.partner(), Position::West);
    }

    #[test]
    fn test_position_char() {
        assert_eq!(Position::North.to_char(), 'N');
        assert_eq!(Position::from_char('w'), Some(Position::West));
        assert_eq!(Position::from_char('X'), None);
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!("North".parse::<Position>(), Ok(Position::North));
        assert_eq!(" south ".parse::<Position>(), Ok(Position::South));
        assert_eq!("E".parse::<Position>(), Ok(Position::East));
        assert_eq!(
            "middle".parse::<Position>(),
            Err(ParsePositionError("middle".to_string()))
        );
    }

    #[test]
    fn test_partnership() {
        assert_eq!(Position::North.partnership(), Partnership::NS);
        assert_eq!(Position::West.partnership(), Partnership::EW);
        assert!(Partnership::NS.contains(Position::South));
        assert!(!Partnership::NS.contains(Position::East));
    }
}
