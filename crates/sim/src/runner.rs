// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation of independent deals.
use ahash::AHashSet;
use anyhow::{Result, anyhow, bail};
use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::thread;

use headsup_eval::{HandCategory, Outcome};

use crate::deal::{Deal, HoleCards};

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The two players hole cards.
    pub hands: HoleCards,
    /// The number of deals to play.
    pub deals: usize,
    /// The number of parallel tasks.
    pub tasks: usize,
    /// The base seed, each task seeds its generator with `seed + task_id`.
    pub seed: u64,
}

impl Config {
    /// Checks the config can run.
    pub fn validate(&self) -> Result<()> {
        if self.deals == 0 {
            bail!("The number of deals must be positive");
        }

        if self.tasks == 0 {
            bail!("The number of tasks must be positive");
        }

        let mut seen = AHashSet::with_capacity(4);
        for card in self.hands.iter().flatten() {
            if !seen.insert(*card) {
                bail!("Card {card} is dealt more than once");
            }
        }

        Ok(())
    }
}

/// The deals results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// The number of deals played.
    pub deals: u64,
    /// The deals won by each player.
    pub wins: [u64; 2],
    /// The deals that ended in a tie.
    pub ties: u64,
    /// Each player hand categories counts indexed by category.
    pub categories: [[u64; HandCategory::COUNT]; 2],
}

impl Tally {
    /// Adds a deal result.
    pub fn record(&mut self, deal: &Deal) {
        self.deals += 1;

        match deal.outcome {
            Outcome::FirstWins => self.wins[0] += 1,
            Outcome::SecondWins => self.wins[1] += 1,
            Outcome::Tie => self.ties += 1,
        }

        for (counts, hand) in self.categories.iter_mut().zip(&deal.hands) {
            counts[hand.category().index()] += 1;
        }
    }

    /// Adds the results of another tally.
    pub fn merge(&mut self, other: &Tally) {
        self.deals += other.deals;
        self.ties += other.ties;

        for (w, o) in self.wins.iter_mut().zip(other.wins) {
            *w += o;
        }

        for (counts, other) in self.categories.iter_mut().zip(&other.categories) {
            for (c, o) in counts.iter_mut().zip(other) {
                *c += o;
            }
        }
    }

    /// The fraction of deals won by the first (0) or second (1) player.
    ///
    /// Panics if player is not 0 or 1.
    pub fn win_rate(&self, player: usize) -> f64 {
        if self.deals == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.deals as f64
        }
    }
}

/// Plays the configured deals and returns the results.
///
/// The deals are split between the tasks, the results only depend on the
/// config so a run with the same seed and tasks gives the same tally.
pub fn run(config: &Config) -> Result<Tally> {
    config.validate()?;

    let deals_per_task = config.deals.div_ceil(config.tasks);

    info!(
        "Playing {} deals with {} tasks and seed {}",
        config.deals, config.tasks, config.seed
    );

    let tally = thread::scope(|s| {
        let handles = (0..config.tasks)
            .map(|task_id| {
                let start = task_id * deals_per_task;
                let count = deals_per_task.min(config.deals.saturating_sub(start));
                s.spawn(move || run_task(config, task_id, count))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .try_fold(Tally::default(), |mut tally, handle| {
                let task_tally = handle
                    .join()
                    .map_err(|_| anyhow!("Simulation task panicked"))??;
                tally.merge(&task_tally);
                Ok::<_, anyhow::Error>(tally)
            })
    })?;

    info!(
        "Played {} deals: p1 {} p2 {} ties {}",
        tally.deals, tally.wins[0], tally.wins[1], tally.ties
    );

    Ok(tally)
}

fn run_task(config: &Config, task_id: usize, count: usize) -> Result<Tally> {
    debug!("Task {task_id} playing {count} deals");

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(task_id as u64));
    let mut tally = Tally::default();

    for _ in 0..count {
        let deal = Deal::play(&config.hands, &mut rng)?;
        trace!("Task {task_id} {deal}");
        tally.record(&deal);
    }

    debug!("Task {task_id} done");
    Ok(tally)
}
