use thiserror::Error;

/// Why a piece of call text could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCallError {
    #[error("empty call")]
    Empty,
    #[error("invalid call format: {0:?}")]
    TooShort(String),
    #[error("invalid bid level {0:?}")]
    InvalidLevel(char),
    #[error("bid level must be between 1 and 7, got {0}")]
    LevelOutOfRange(u8),
    #[error("invalid strain: {0}")]
    InvalidStrain(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid position: {0}")]
pub struct ParsePositionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHandError {
    #[error("expected 4 dot-separated suits, got {0}")]
    SuitCount(usize),
    #[error("invalid rank {rank:?} in {suit}")]
    InvalidRank { suit: crate::suit::Suit, rank: char },
    #[error("duplicate card {0}")]
    DuplicateCard(crate::card::Card),
}
