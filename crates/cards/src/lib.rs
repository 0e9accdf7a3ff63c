// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up Hold'em cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use headsup_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! the canonical descending order used to lay out a hand:
//!
//! ```
//! # use headsup_cards::{parse_cards, sort_descending};
//! let cards = parse_cards("2c As 9h 9s").unwrap();
//! assert_eq!(sort_descending(&cards), parse_cards("As 9s 9h 2c").unwrap());
//! ```
//!
//! and a [Deck] type for shuffling with an injected random source, taking
//! known cards out, and drawing cards with ownership of the remaining deck:
//!
//! ```
//! # use headsup_cards::{Card, Deck, Rank, Suit};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
//! let hole = deck.take(&[Card::new(Rank::Ace, Suit::Spades)]).unwrap();
//! let (flop, deck) = deck.draw(3).unwrap();
//! assert_eq!(flop.len(), 3);
//! assert_eq!(deck.count(), Deck::SIZE - 4);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};

mod deck;
pub use deck::{Deck, DeckError};

mod order;
pub use order::{compare_cards, distinct_by_rank, partition, sort_descending};
