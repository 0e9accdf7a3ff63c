// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single heads-up deal.
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use headsup_cards::{Card, Deck};
use headsup_eval::{Outcome, RankedHand, compare_hands, evaluate};

/// The hole cards of the two players.
pub type HoleCards = [[Card; 2]; 2];

/// A completed deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// The flop, turn and river cards.
    pub board: [Card; 5],
    /// The players best hands.
    pub hands: [RankedHand; 2],
    /// Which player won the deal.
    pub outcome: Outcome,
}

impl Deal {
    /// Deals a board for the given hole cards and evaluates both hands.
    ///
    /// The hole cards are taken out of a new deck that is shuffled with the
    /// given random source, a card is burnt before the flop, the turn and the
    /// river.
    pub fn play<R: Rng + ?Sized>(holes: &HoleCards, rng: &mut R) -> Result<Deal> {
        let mut deck = Deck::default();
        for hole in holes {
            deck.take(hole)?;
        }

        deck.shuffle(rng);

        let board = deal_board(deck)?;
        let hands = [evaluate_player(&holes[0], &board)?, evaluate_player(&holes[1], &board)?];
        let outcome = compare_hands(&hands[0], &hands[1]);

        Ok(Deal {
            board,
            hands,
            outcome,
        })
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board")?;
        for card in &self.board {
            write!(f, " {card}")?;
        }

        write!(f, ", p1 {}, p2 {}, {:?}", self.hands[0], self.hands[1], self.outcome)
    }
}

/// Burns and deals the flop, turn and river.
fn deal_board(deck: Deck) -> Result<[Card; 5]> {
    let (_, deck) = deck.draw(1)?;
    let (flop, deck) = deck.draw(3)?;
    let (_, deck) = deck.draw(1)?;
    let (turn, deck) = deck.draw(1)?;
    let (_, deck) = deck.draw(1)?;
    let (river, _) = deck.draw(1)?;

    let mut board = [Card::JOKER; 5];
    for (slot, card) in board.iter_mut().zip(flop.into_iter().chain(turn).chain(river)) {
        *slot = card;
    }

    Ok(board)
}

fn evaluate_player(hole: &[Card; 2], board: &[Card; 5]) -> Result<RankedHand> {
    let cards = [hole.as_slice(), board.as_slice()].concat();
    Ok(evaluate(&cards)?)
}
