// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranked hand types.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use headsup_cards::{Card, Rank};

/// The hand category from the lowest to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the lowest to the highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category ordinal, 0 for high card up to 8 for straight flush.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The best five cards of a hand and their category.
///
/// The cards that make the category come first and the kickers last, each
/// group from the highest to the lowest rank. A wheel straight is laid out as
/// `5 4 3 2 A` as its ace plays low.
///
/// Equality compares suits too, use [RankedHand::strength_cmp] or
/// [compare_hands] to compare the value of two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedHand {
    category: HandCategory,
    cards: [Card; 5],
}

impl RankedHand {
    /// Creates a ranked hand from cards already laid out by significance.
    pub fn new(category: HandCategory, cards: [Card; 5]) -> Self {
        Self { category, cards }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards of the hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The ranks of the five cards in hand order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().map(Card::rank)
    }

    /// Compares the value of two hands.
    ///
    /// Categories are compared first, hands with the same category are
    /// compared card by card by rank.
    pub fn strength_cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks().cmp(other.ranks()))
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand is stronger.
    FirstWins,
    /// The second hand is stronger.
    SecondWins,
    /// The hands have the same value.
    Tie,
}

/// Compares two hands and returns which one wins.
pub fn compare_hands(a: &RankedHand, b: &RankedHand) -> Outcome {
    match a.strength_cmp(b) {
        Ordering::Greater => Outcome::FirstWins,
        Ordering::Less => Outcome::SecondWins,
        Ordering::Equal => Outcome::Tie,
    }
}
