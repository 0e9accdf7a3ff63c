// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand evaluation.
use thiserror::Error;

use headsup_cards::{Card, Rank, Suit, distinct_by_rank, partition, sort_descending};

use super::hand::{HandCategory, RankedHand};

/// The minimum number of cards in an evaluated hand.
pub const MIN_CARDS: usize = 5;

/// The maximum number of cards in an evaluated hand.
pub const MAX_CARDS: usize = 7;

/// Evaluation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have between 5 and 7 cards.
    #[error("invalid hand size {0}, expected 5 to 7 cards")]
    InvalidInputSize(usize),
}

/// Evaluates a 5, 6 or 7 cards hand and returns its best five cards.
///
/// The cards can be in any order, the result only depends on the cards in the
/// hand. The evaluator doesn't check for duplicated cards.
///
/// ```
/// # use headsup_cards::parse_cards;
/// # use headsup_eval::{evaluate, HandCategory};
/// let cards = parse_cards("Ah 5h 4c 3d 2s Kd Kc").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::Straight);
/// assert_eq!(hand.to_string(), "Straight [5H 4C 3D 2S AH]");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<RankedHand, EvalError> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidInputSize(cards.len()));
    }

    let sorted = sort_descending(cards);

    let flush = find_flush(&sorted);
    if let Some(straight) = flush.as_deref().and_then(find_straight) {
        return Ok(ranked(HandCategory::StraightFlush, straight));
    }

    let multiples = find_multiples(&sorted);
    if let Some(hand) = multiples.filter(|h| {
        matches!(
            h.category(),
            HandCategory::FourOfAKind | HandCategory::FullHouse
        )
    }) {
        return Ok(hand);
    }

    if let Some(flush) = flush {
        return Ok(ranked(HandCategory::Flush, flush));
    }

    if let Some(straight) = find_straight(&sorted) {
        return Ok(ranked(HandCategory::Straight, straight));
    }

    Ok(multiples.unwrap_or_else(|| ranked(HandCategory::HighCard, sorted)))
}

/// Builds a ranked hand from the first five cards.
fn ranked<I>(category: HandCategory, cards: I) -> RankedHand
where
    I: IntoIterator<Item = Card>,
{
    let mut five = [Card::JOKER; 5];
    let mut len = 0;
    for (slot, card) in five.iter_mut().zip(cards) {
        *slot = card;
        len += 1;
    }

    debug_assert_eq!(len, 5, "a ranked hand needs five cards");
    RankedHand::new(category, five)
}

/// Returns the cards of the suit with at least five cards in rank order.
fn find_flush(sorted: &[Card]) -> Option<Vec<Card>> {
    let mut counts = [0usize; Suit::COUNT];
    for card in sorted.iter().filter(|c| !c.is_joker()) {
        counts[card.suit().index()] += 1;
    }

    let suit = Suit::suits().find(|s| counts[s.index()] >= 5)?;
    Some(sorted.iter().filter(|c| c.suit() == suit).copied().collect())
}

/// Returns the highest straight in rank sorted cards.
///
/// A wheel is only returned when there is no other straight and has its ace
/// as the last card.
fn find_straight(sorted: &[Card]) -> Option<Vec<Card>> {
    let cards = distinct_by_rank(sorted);
    if cards.len() < 5 {
        return None;
    }

    let run = cards.windows(5).find(|w| {
        w.windows(2)
            .all(|p| p[0].rank().index() == p[1].rank().index() + 1)
    });
    if let Some(run) = run {
        return Some(run.to_vec());
    }

    let (head, tail) = (cards[0], &cards[cards.len() - 4..]);
    let wheel = [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];
    if head.rank() == Rank::Ace && tail.iter().map(Card::rank).eq(wheel) {
        let mut straight = tail.to_vec();
        straight.push(head);
        return Some(straight);
    }

    None
}

/// Returns the best pairs, trips, or quads hand.
fn find_multiples(sorted: &[Card]) -> Option<RankedHand> {
    let mut counts = [0usize; Rank::COUNT];
    for card in sorted {
        counts[card.rank().index()] += 1;
    }

    // Ranks grouped by count from the highest rank, groups[2] are pairs.
    let mut groups: [Vec<Rank>; 5] = Default::default();
    for rank in Rank::ranks().rev() {
        let count = counts[rank.index()].min(4);
        if count >= 2 {
            groups[count].push(rank);
        }
    }

    let [_, _, pairs, trips, quads] = &groups;

    if let Some(&quad) = quads.first() {
        let (quad, rest) = partition(sorted, quad);
        let cards = quad.into_iter().take(4).chain(rest.into_iter().take(1));
        return Some(ranked(HandCategory::FourOfAKind, cards));
    }

    if let Some(&trip) = trips.first() {
        let (trip, rest) = partition(sorted, trip);

        // A second trip or the highest pair makes a full house.
        if let Some(&pair) = trips.get(1).or(pairs.first()) {
            let (pair, _) = partition(&rest, pair);
            let cards = trip.into_iter().take(3).chain(pair.into_iter().take(2));
            return Some(ranked(HandCategory::FullHouse, cards));
        }

        let cards = trip.into_iter().chain(rest.into_iter().take(2));
        return Some(ranked(HandCategory::ThreeOfAKind, cards));
    }

    match pairs.as_slice() {
        [high, low, ..] => {
            let (high, rest) = partition(sorted, *high);
            let (low, rest) = partition(&rest, *low);
            let cards = high.into_iter().chain(low).chain(rest.into_iter().take(1));
            Some(ranked(HandCategory::TwoPair, cards))
        }
        [pair] => {
            let (pair, rest) = partition(sorted, *pair);
            let cards = pair.into_iter().chain(rest.into_iter().take(3));
            Some(ranked(HandCategory::OnePair, cards))
        }
        [] => None,
    }
}
