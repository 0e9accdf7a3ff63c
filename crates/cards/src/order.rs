// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical cards ordering.
//!
//! Cards are ordered by rank from ace down to deuce, cards with the same rank
//! are ordered by suit from spades down to clubs so that a sorted hand has a
//! single deterministic layout.
use std::cmp::Ordering;

use crate::{Card, Rank};

/// Compares two cards by descending rank then descending suit.
pub fn compare_cards(a: &Card, b: &Card) -> Ordering {
    b.rank()
        .cmp(&a.rank())
        .then_with(|| b.suit().cmp(&a.suit()))
}

/// Returns a copy of the cards sorted with [compare_cards].
pub fn sort_descending(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(compare_cards);
    sorted
}

/// Keeps the first card of each rank.
///
/// The input must be sorted by descending rank, the output keeps that order
/// and has no two cards with the same rank.
pub fn distinct_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut seen = [false; Rank::COUNT];
    cards
        .iter()
        .filter(|c| !std::mem::replace(&mut seen[c.rank().index()], true))
        .copied()
        .collect()
}

/// Splits the cards in the ones with the given rank and all the others.
///
/// Both sides keep the input order.
pub fn partition(cards: &[Card], rank: Rank) -> (Vec<Card>, Vec<Card>) {
    cards.iter().partition(|c| c.rank() == rank)
}
