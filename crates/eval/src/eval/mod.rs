// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator sorts a 5, 6 or 7 cards hand by descending rank and checks
//! for flushes and straights, then for quads, full houses, trips and pairs,
//! and applies the poker category precedence to pick the best five cards.
//!
//! The returned [RankedHand] lays out the cards so that two hands with the
//! same category compare card by card, see [compare_hands].

mod eval;
pub use eval::{EvalError, MAX_CARDS, MIN_CARDS, evaluate};

mod hand;
pub use hand::{HandCategory, Outcome, RankedHand, compare_hands};

#[cfg(test)]
mod reference;
