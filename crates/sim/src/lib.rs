// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up Hold'em deals simulator.
//!
//! Plays many independent deals between two fixed hole cards hands and counts
//! the wins, ties and hand categories of each player:
//!
//! ```
//! # use headsup_sim::{Config, parse_hole_cards, run};
//! let config = Config {
//!     hands: [parse_hole_cards("AsKs").unwrap(), parse_hole_cards("2h2d").unwrap()],
//!     deals: 100,
//!     tasks: 2,
//!     seed: 1,
//! };
//!
//! let tally = run(&config).unwrap();
//! assert_eq!(tally.wins[0] + tally.wins[1] + tally.ties, 100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};

use headsup_cards::{Card, parse_cards};

pub mod deal;
pub mod runner;
pub use runner::{Config, Tally, run};

/// Parses two hole cards like `AsKs`.
pub fn parse_hole_cards(s: &str) -> Result<[Card; 2]> {
    match parse_cards(s)?.as_slice() {
        [c1, c2] => Ok([*c1, *c2]),
        cards => bail!("Expected 2 hole cards found {}", cards.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_cards::{Rank, Suit};

    #[test]
    fn hole_cards() {
        assert_eq!(
            parse_hole_cards("As Kd").unwrap(),
            [
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds)
            ]
        );

        let err = parse_hole_cards("AsKdQc").unwrap_err();
        assert_eq!(err.to_string(), "Expected 2 hole cards found 3");

        let err = parse_hole_cards("Ax").unwrap_err();
        assert_eq!(err.to_string(), "invalid suit 'x'");
    }
}
