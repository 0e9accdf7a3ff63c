// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is an immutable rank and suit pair, cards are copied by value and
/// two cards are equal when both their rank and suit are equal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// The joker card used to pad a deck.
    ///
    /// Jokers have the [Suit::Joker] suit and a placeholder rank, they never
    /// make a flush.
    pub const JOKER: Card = Card::new(Rank::Deuce, Suit::Joker);

    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if this is a joker.
    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "JK")
        } else {
            write!(f, "{}{}", self.rank, self.suit)
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing cards from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// A card must be exactly a rank and a suit character.
    #[error("invalid card {0:?}, expected a rank and a suit like AS or td")]
    InvalidLength(String),
    /// Unknown rank character.
    #[error("invalid rank {0:?}")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
}

/// Parses a card like `AS`, `td` or `7h`.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength(s.to_string()));
        };

        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }
}

/// Parses a run of cards, whitespace and commas between cards are ignored.
///
/// ```
/// # use headsup_cards::{parse_cards, Card, Rank, Suit};
/// let cards = parse_cards("As Kd,7c").unwrap();
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(parse_cards("AsKd").unwrap(), cards[..2]);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    let chars = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<Vec<_>>();

    chars
        .chunks(2)
        .map(|pair| match *pair {
            [r, s] => Ok(Card::new(Rank::try_from(r)?, Suit::try_from(s)?)),
            _ => Err(ParseCardError::InvalidLength(pair.iter().collect())),
        })
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank ordinal, 0 for deuce up to 12 for ace.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(c)),
        };

        Ok(rank)
    }
}

/// Card suit.
///
/// Suits have no value in a hand, their order is only used to sort cards
/// deterministically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Placeholder suit for deck padding.
    Joker = 0,
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The number of suits including the joker suit.
    pub const COUNT: usize = 5;

    /// Returns the four playing suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit ordinal, 0 for the joker suit up to 4 for spades.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Joker => '*',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let suit = match c.to_ascii_uppercase() {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit(c)),
        };

        Ok(suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        assert_eq!(Card::JOKER.to_string(), "JK");
        assert_eq!(format!("{:?}", Card::new(Rank::Ace, Suit::Hearts)), "Card(AH)");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("AH".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!("td".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("2c".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        assert_eq!(
            "A".parse::<Card>(),
            Err(ParseCardError::InvalidLength("A".to_string()))
        );
        assert_eq!(
            "AHS".parse::<Card>(),
            Err(ParseCardError::InvalidLength("AHS".to_string()))
        );
        assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
        assert_eq!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
    }

    #[test]
    fn card_display_parse_all() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            }
        }
    }

    #[test]
    fn parse_cards_separators() {
        let expected = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
        ];

        assert_eq!(parse_cards("AsKs"), Ok(expected.clone()));
        assert_eq!(parse_cards(" As Ks "), Ok(expected.clone()));
        assert_eq!(parse_cards("As,Ks"), Ok(expected));
        assert_eq!(parse_cards(""), Ok(vec![]));

        assert_eq!(
            parse_cards("AsK"),
            Err(ParseCardError::InvalidLength("K".to_string()))
        );
        assert_eq!(parse_cards("AsKz"), Err(ParseCardError::InvalidSuit('z')));
    }

    #[test]
    fn rank_and_suit_order() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
        assert_eq!(Rank::ranks().count(), Rank::COUNT);
        assert_eq!(Rank::Ace.index(), 12);

        assert!(Suit::Spades > Suit::Hearts);
        assert!(Suit::Hearts > Suit::Diamonds);
        assert!(Suit::Diamonds > Suit::Clubs);
        assert!(Suit::Clubs > Suit::Joker);
        assert!(Suit::suits().all(|s| s != Suit::Joker));
    }
}
