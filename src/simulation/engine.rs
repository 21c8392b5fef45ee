//! Simulation engine: plays N independent games and tallies their scores.
//!
//! Trial `i` draws all of its dice from a private `SmallRng` seeded with
//! `seed + i`, so a trial's outcome depends only on the master seed and its
//! index. Sequential, parallel and sharded runs with the same seed therefore
//! yield identical histograms; only the wall-clock time differs.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::{Configuration, ExecutionMode, SimulationOptions};
use crate::constants::max_score;
use crate::game_mechanics::play_game;

use super::histogram::{AtomicHistogram, Histogram};
use super::statistics::ScoreSummary;

/// Everything a finished run reports.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub config: Configuration,
    pub seed: u64,
    pub mode: ExecutionMode,
    pub histogram: Histogram,
    /// Wall-clock time from just before the first trial to just after the last.
    pub elapsed: Duration,
}

impl SimulationResult {
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_histogram(&self.histogram)
    }
}

/// Play trial number `trial` of a run seeded with `seed`.
#[inline(always)]
pub fn simulate_trial(num_dice: u32, seed: u64, trial: u64) -> u32 {
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(trial));
    play_game(num_dice, &mut rng)
}

/// Run `config` in parallel with a master seed drawn from OS entropy.
pub fn run_simulation(config: &Configuration) -> SimulationResult {
    run_simulation_with(config, &SimulationOptions::from_entropy())
}

/// Run `config` with an explicit seed and execution mode.
pub fn run_simulation_with(
    config: &Configuration,
    options: &SimulationOptions,
) -> SimulationResult {
    let num_dice = config.num_dice();
    let num_games = config.num_simulations();
    let seed = options.seed;
    let max = max_score(num_dice);

    debug!(
        num_dice,
        num_games,
        seed,
        mode = ?options.mode,
        threads = rayon::current_num_threads(),
        "starting simulation"
    );

    let start = Instant::now();
    let histogram = match options.mode {
        ExecutionMode::Sequential => {
            let mut histogram = Histogram::new(max);
            for i in 0..num_games {
                histogram.record(simulate_trial(num_dice, seed, i));
            }
            histogram
        }
        ExecutionMode::Parallel => {
            let buckets = AtomicHistogram::new(max);
            (0..num_games)
                .into_par_iter()
                .for_each(|i| buckets.record(simulate_trial(num_dice, seed, i)));
            buckets.into_histogram()
        }
        ExecutionMode::Sharded => (0..num_games)
            .into_par_iter()
            .fold(
                || Histogram::new(max),
                |mut local, i| {
                    local.record(simulate_trial(num_dice, seed, i));
                    local
                },
            )
            .reduce(
                || Histogram::new(max),
                |mut a, b| {
                    a.merge(&b);
                    a
                },
            ),
    };
    let elapsed = start.elapsed();

    info!(
        num_games,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "simulation finished"
    );

    SimulationResult {
        config: *config,
        seed,
        mode: options.mode,
        histogram,
        elapsed,
    }
}
