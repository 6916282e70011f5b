use crate::card::Card;
use crate::error::ParseHandError;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::suit::Suit;

/// Parses a hand string in the format "Clubs.Diamonds.Hearts.Spades".
///
/// Suits are listed in ascending order of rank (C, D, H, S); an empty
/// section is a void. Card count is not enforced here so test fixtures can
/// describe partial hands.
pub fn parse_hand(s: &str) -> Result<Hand, ParseHandError> {
    let sections: Vec<&str> = s.trim().split('.').collect();
    if sections.len() != 4 {
        return Err(ParseHandError::SuitCount(sections.len()));
    }

    let mut cards: Vec<Card> = Vec::with_capacity(13);
    for (suit, section) in Suit::ALL.into_iter().zip(sections) {
        for c in section.chars().filter(|c| !c.is_whitespace()) {
            let rank = Rank::from_char(c).ok_or(ParseHandError::InvalidRank { suit, rank: c })?;
            let card = Card::new(suit, rank);
            if cards.contains(&card) {
                return Err(ParseHandError::DuplicateCard(card));
            }
            cards.push(card);
        }
    }
    Ok(Hand::new(cards))
}

/// Renders a hand back into the "C.D.H.S" format.
pub fn format_hand(hand: &Hand) -> String {
    Suit::ALL
        .iter()
        .map(|&suit| hand.holding(suit))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_hand() {
        let hand = parse_hand("AK2.QJ3.T98.7654").unwrap();
        assert_eq!(hand.len(), 13);
        assert_eq!(hand.length(Suit::Clubs), 3);
        assert_eq!(hand.length(Suit::Spades), 4);
        assert_eq!(hand.hcp(), 10);
    }

    #[test]
    fn test_parse_void() {
        let hand = parse_hand("AKQJT98765432...").unwrap();
        assert_eq!(hand.length(Suit::Clubs), 13);
        assert_eq!(hand.length(Suit::Hearts), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hand("AK.QJ"), Err(ParseHandError::SuitCount(2)));
        assert_eq!(
            parse_hand("AZ...").unwrap_err(),
            ParseHandError::InvalidRank {
                suit: Suit::Clubs,
                rank: 'Z'
            }
        );
        assert!(matches!(
            parse_hand("AA..."),
            Err(ParseHandError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_format_hand() {
        let hand = parse_hand("2KA.3JQ.89T.4567").unwrap();
        assert_eq!(format_hand(&hand), "AK2.QJ3.T98.7654");
    }
}
