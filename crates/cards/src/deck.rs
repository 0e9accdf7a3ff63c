// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use ahash::AHashSet;
use rand::prelude::*;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Errors returned by deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card is not in the deck.
    #[error("card {0} is not in the deck")]
    MissingCard(Card),
    /// Tried to draw more cards than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards {
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// A cards Deck.
///
/// The top of the deck is the last card, [Deck::deal] and [Deck::draw] take
/// cards from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck without jokers.
    pub const SIZE: usize = 52;

    /// Creates an ordered deck padded with the given number of jokers.
    pub fn with_jokers(jokers: usize) -> Self {
        let mut deck = Self::default();
        deck.cards.extend(std::iter::repeat_n(Card::JOKER, jokers));
        deck
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the deck with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The deck cards from the bottom to the top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck, returns false if it was not there.
    pub fn remove(&mut self, card: Card) -> bool {
        let len = self.cards.len();
        self.cards.retain(|c| c != &card);
        self.cards.len() != len
    }

    /// Takes the given cards out of the deck.
    ///
    /// All the cards must be in the deck, on error the deck is unchanged.
    pub fn take(&mut self, cards: &[Card]) -> Result<Vec<Card>, DeckError> {
        let mut seen = AHashSet::with_capacity(cards.len());
        let mut indices = Vec::with_capacity(cards.len());

        for &card in cards {
            // A repeated card can only be taken once.
            if !seen.insert(card) {
                return Err(DeckError::MissingCard(card));
            }

            let idx = self
                .cards
                .iter()
                .position(|c| *c == card)
                .ok_or(DeckError::MissingCard(card))?;
            indices.push(idx);
        }

        indices.sort_unstable_by(|a, b| b.cmp(a));
        for idx in indices {
            self.cards.remove(idx);
        }

        Ok(cards.to_vec())
    }

    /// Draws `n` cards from the top of the deck.
    ///
    /// Returns the drawn cards in deal order and the remaining deck.
    pub fn draw(mut self, n: usize) -> Result<(Vec<Card>, Deck), DeckError> {
        let available = self.cards.len();
        if n > available {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                available,
            });
        }

        let mut drawn = self.cards.split_off(available - n);
        drawn.reverse();
        Ok((drawn, self))
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Positions of the current combination in increasing order.
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = self.cards[..k].to_vec();

        loop {
            f(&hand);

            // Rightmost position that has not reached its last value.
            let Some(i) = (0..k).rev().find(|&i| pos[i] != i + n - k) else {
                return;
            };

            pos[i] += 1;
            for j in i + 1..k {
                pos[j] = pos[j - 1] + 1;
            }

            for j in i..k {
                hand[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
