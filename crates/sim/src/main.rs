// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Heads-up Hold'em simulator entry point.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use headsup_cards::Card;
use headsup_eval::HandCategory;
use headsup_sim::{Config, parse_hole_cards};

#[derive(Debug, Parser)]
struct Cli {
    /// The first player hole cards.
    #[arg(long, default_value = "AsKs", value_parser = parse_hole_cards)]
    hand1: [Card; 2],
    /// The second player hole cards.
    #[arg(long, default_value = "2h2d", value_parser = parse_hole_cards)]
    hand2: [Card; 2],
    /// Number of deals to play.
    #[arg(long, short, default_value_t = 100)]
    deals: usize,
    /// Number of parallel tasks.
    #[arg(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for the random generator, a random seed is used if not set.
    #[arg(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");

    let config = Config {
        hands: [cli.hand1, cli.hand2],
        deals: cli.deals,
        tasks: cli.tasks as usize,
        seed,
    };

    let tally = headsup_sim::run(&config)?;

    for (player, hand) in config.hands.iter().enumerate() {
        println!(
            "Player {} ({} {}) won {} times ({:.1}%)",
            player + 1,
            hand[0],
            hand[1],
            tally.wins[player],
            tally.win_rate(player) * 100.0
        );
    }
    println!("There were {} ties\n", tally.ties);

    println!("{:<17}{:>10}{:>10}", "", "Player 1", "Player 2");
    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!(
            "{label:<17}{:>10}{:>10}",
            tally.categories[0][category.index()],
            tally.categories[1][category.index()]
        );
    }

    Ok(())
}
