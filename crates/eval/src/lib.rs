// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up Hold'em hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator returns the
//! category of the best five cards hand and the cards themselves, laid out so
//! that two hands can be compared card by card.
//!
//! To use the evaluator pass the hole and community cards to [evaluate] and
//! compare the results with [compare_hands]:
//!
//! ```
//! # use headsup_eval::*;
//! let board = parse_cards("Ks 9h 7d 3c 2s").unwrap();
//! let p1 = [parse_cards("AsKd").unwrap(), board.clone()].concat();
//! let p2 = [parse_cards("9c9d").unwrap(), board].concat();
//!
//! let h1 = evaluate(&p1).unwrap();
//! let h2 = evaluate(&p2).unwrap();
//! assert_eq!(h1.category(), HandCategory::OnePair);
//! assert_eq!(h2.category(), HandCategory::ThreeOfAKind);
//! assert_eq!(compare_hands(&h1, &h2), Outcome::SecondWins);
//! ```
//!
//! The evaluator is a pure function, hands can be evaluated from any number
//! of threads without synchronization.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandCategory, Outcome, RankedHand, compare_hands, evaluate};

// Reexport cards types.
pub use headsup_cards::{Card, Deck, Rank, Suit, parse_cards};
