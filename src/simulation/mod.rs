//! Monte Carlo harness and its aggregates.
//!
//! - [`engine`]: run N trials sequentially or on the rayon pool
//! - [`histogram`]: atomic accumulation and the finalized score histogram
//! - [`statistics`]: summary statistics derived from a histogram

pub mod engine;
pub mod histogram;
pub mod statistics;

pub use engine::{run_simulation, run_simulation_with, simulate_trial, SimulationResult};
pub use histogram::{AtomicHistogram, Histogram};
pub use statistics::{percentile, PercentileEntry, ScoreSummary};
