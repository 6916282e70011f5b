use crate::card::Card;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::suit::Suit;
use rand::seq::SliceRandom;
use rand::Rng;

/// A full 52-card pack.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Shuffles and deals 13 cards to each seat, indexed by `Position::idx`.
    pub fn deal<R: Rng + ?Sized>(mut self, rng: &mut R) -> [Hand; 4] {
        self.shuffle(rng);
        let mut piles: [Vec<Card>; 4] = Default::default();
        for (i, card) in self.cards.into_iter().enumerate() {
            piles[i % 4].push(card);
        }
        piles.map(Hand::new)
    }
}

/// Convenience wrapper dealing a fresh deck.
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> [Hand; 4] {
    Deck::new().deal(rng)
}
