use crate::card::Card;
use crate::error::ParseHandError;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};

/// Per-suit card counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    pub clubs: u8,
    pub diamonds: u8,
    pub hearts: u8,
    pub spades: u8,
}

impl Distribution {
    pub fn get(&self, suit: Suit) -> u8 {
        match suit {
            Suit::Clubs => self.clubs,
            Suit::Diamonds => self.diamonds,
            Suit::Hearts => self.hearts,
            Suit::Spades => self.spades,
        }
    }

    fn bump(&mut self, suit: Suit) {
        match suit {
            Suit::Clubs => self.clubs += 1,
            Suit::Diamonds => self.diamonds += 1,
            Suit::Hearts => self.hearts += 1,
            Suit::Spades => self.spades += 1,
        }
    }

    pub fn total(&self) -> u8 {
        self.clubs + self.diamonds + self.hearts + self.spades
    }

    /// Lengths ordered spades first, the way shapes are usually written.
    pub fn shape(&self) -> [u8; 4] {
        [self.spades, self.hearts, self.diamonds, self.clubs]
    }
}

/// Point count and shape, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub hcp: u8,
    pub distribution: Distribution,
}

/// A player's cards, kept sorted by suit (spades first) then descending rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    /// Parses the "C.D.H.S" holding format, e.g. `"AK2.QJ3.T98.7654"`.
    pub fn parse(s: &str) -> Result<Self, ParseHandError> {
        crate::io::hand_parser::parse_hand(s)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| b.suit.cmp(&a.suit).then_with(|| b.rank.cmp(&a.rank)));
    }

    pub fn evaluate(&self) -> Evaluation {
        let mut hcp = 0;
        let mut distribution = Distribution::default();
        for card in &self.cards {
            hcp += card.rank.hcp();
            distribution.bump(card.suit);
        }
        Evaluation { hcp, distribution }
    }

    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    pub fn distribution(&self) -> Distribution {
        self.evaluate().distribution
    }

    /// No void or singleton, and at most one doubleton.
    pub fn is_balanced(&self) -> bool {
        let dist = self.distribution();
        let lengths = dist.shape();
        let doubletons = lengths.iter().filter(|&&l| l == 2).count();
        lengths.iter().all(|&l| l >= 2) && doubletons <= 1
    }

    /// Ace, guarded King (Kx+) or twice-guarded Queen (Qxx+).
    pub fn has_stopper(&self, suit: Suit) -> bool {
        let len = self.length(suit);
        (self.has_card(suit, Rank::Ace))
            || (self.has_card(suit, Rank::King) && len >= 2)
            || (self.has_card(suit, Rank::Queen) && len >= 3)
    }

    pub fn has_card(&self, suit: Suit, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.suit == suit && c.rank == rank)
    }

    pub fn aces(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::Ace).count() as u8
    }

    /// Rank characters held in `suit`, highest first. Empty for a void.
    pub fn holding(&self, suit: Suit) -> String {
        self.cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank.to_char())
            .collect()
    }
}
