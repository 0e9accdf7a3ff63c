// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Brute force evaluator used to cross check [evaluate].
//!
//! It classifies every 5 cards subset on its own and keeps the strongest one,
//! it shares no code with the evaluator except the card types.
use rand::prelude::*;

use headsup_cards::{Card, Deck, Rank};

use super::{HandCategory, RankedHand, eval::evaluate};

/// A hand value as a category and the ranks in comparison order.
type Value = (HandCategory, Vec<Rank>);

/// Classifies exactly five cards.
fn classify(cards: &[Card]) -> Value {
    let mut counts = [0usize; Rank::COUNT];
    for c in cards {
        counts[c.rank().index()] += 1;
    }

    // (count, rank) from the most frequent then highest rank.
    let mut groups = Rank::ranks()
        .filter(|r| counts[r.index()] > 0)
        .map(|r| (counts[r.index()], r))
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.cmp(a));

    let ranks = groups
        .iter()
        .flat_map(|&(n, r)| std::iter::repeat_n(r, n))
        .collect::<Vec<_>>();

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let distinct = groups.len() == 5;
    let is_wheel = distinct
        && ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];
    let is_straight =
        distinct && (ranks[0].index() - ranks[4].index() == 4 || is_wheel);

    let straight_ranks = if is_wheel {
        vec![Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace]
    } else {
        ranks.clone()
    };

    let counts = groups.iter().map(|g| g.0).collect::<Vec<_>>();
    match (is_straight, is_flush, counts.as_slice()) {
        (true, true, _) => (HandCategory::StraightFlush, straight_ranks),
        (_, _, [4, 1]) => (HandCategory::FourOfAKind, ranks),
        (_, _, [3, 2]) => (HandCategory::FullHouse, ranks),
        (_, true, _) => (HandCategory::Flush, ranks),
        (true, _, _) => (HandCategory::Straight, straight_ranks),
        (_, _, [3, 1, 1]) => (HandCategory::ThreeOfAKind, ranks),
        (_, _, [2, 2, 1]) => (HandCategory::TwoPair, ranks),
        (_, _, [2, 1, 1, 1]) => (HandCategory::OnePair, ranks),
        _ => (HandCategory::HighCard, ranks),
    }
}

/// The best value over all the 5 cards subsets.
fn best_value(cards: &[Card]) -> Value {
    let n = cards.len();
    let mut best: Option<Value> = None;

    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }

        let five = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| cards[i])
            .collect::<Vec<_>>();

        let value = classify(&five);
        if best.as_ref().is_none_or(|b| value > *b) {
            best = Some(value);
        }
    }

    best.unwrap()
}

fn value_of(hand: &RankedHand) -> Value {
    (hand.category(), hand.ranks().collect())
}

#[test]
fn matches_reference_on_samples() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in 5..=7 {
        for _ in 0..20_000 {
            let deck = Deck::new_and_shuffled(&mut rng);
            let hand = &deck.cards()[..len];
            let ranked = evaluate(hand).unwrap();
            assert_eq!(value_of(&ranked), best_value(hand), "{hand:?}");
        }
    }
}

#[test]
fn matches_reference_on_crowded_ranks() {
    // Few ranks make many pairs, trips and straights around the wheel.
    let mut deck = Deck::default();
    for card in Deck::default() {
        if !matches!(
            card.rank(),
            Rank::Ace | Rank::Deuce | Rank::Trey | Rank::Four | Rank::Five | Rank::Six
        ) {
            deck.remove(card);
        }
    }

    let mut count = 0;
    deck.for_each(7, |hand| {
        count += 1;
        let ranked = evaluate(hand).unwrap();
        assert_eq!(value_of(&ranked), best_value(hand), "{hand:?}");
    });

    // 24 choose 7.
    assert_eq!(count, 346_104);
}

#[test]
fn comparison_matches_reference() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20_000 {
        let deck = Deck::new_and_shuffled(&mut rng);
        let (h1, h2) = (&deck.cards()[..7], &deck.cards()[7..14]);
        let (r1, r2) = (evaluate(h1).unwrap(), evaluate(h2).unwrap());
        assert_eq!(r1.strength_cmp(&r2), best_value(h1).cmp(&best_value(h2)));
    }
}

#[test]
fn comparison_is_a_weak_order() {
    let mut rng = StdRng::seed_from_u64(12);

    let hands = (0..100)
        .map(|_| {
            let deck = Deck::new_and_shuffled(&mut rng);
            evaluate(&deck.cards()[..7]).unwrap()
        })
        .collect::<Vec<_>>();

    for a in &hands {
        assert!(a.strength_cmp(a).is_eq());
        for b in &hands {
            assert_eq!(a.strength_cmp(b), b.strength_cmp(a).reverse());
            for c in &hands {
                if a.strength_cmp(b).is_le() && b.strength_cmp(c).is_le() {
                    assert!(a.strength_cmp(c).is_le());
                }
            }
        }
    }
}

// This takes a while to run in debug mode as it goes through 133M hands.
#[test]
#[ignore]
fn all_7cards_category_counts() {
    let mut counts = [0usize; HandCategory::COUNT];
    Deck::default().for_each(7, |hand| {
        let ranked = evaluate(hand).unwrap();
        counts[ranked.category().index()] += 1;
    });

    assert_eq!(
        counts,
        [
            23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184,
            224_848, 41_584,
        ]
    );
}
