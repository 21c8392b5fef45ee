//! Run configuration: dice count, trial count, seeding and execution mode.
//!
//! [`configure`] is the only way to build a [`Configuration`], so every
//! configuration that reaches the simulation engine is already valid.

use serde::Serialize;

use crate::constants::{DEFAULT_NUM_DICE, DEFAULT_NUM_SIMULATIONS, MAX_FACE};
use crate::error::{Result, ThreesError};

/// Largest dice count whose score bound (`num_dice * 6`) still fits a `u32`.
pub const MAX_NUM_DICE: u32 = u32::MAX / MAX_FACE as u32;

/// Validated simulation parameters. Both values are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Configuration {
    num_dice: u32,
    num_simulations: u64,
}

impl Configuration {
    pub fn num_dice(&self) -> u32 {
        self.num_dice
    }

    pub fn num_simulations(&self) -> u64 {
        self.num_simulations
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            num_dice: DEFAULT_NUM_DICE,
            num_simulations: DEFAULT_NUM_SIMULATIONS,
        }
    }
}

/// Validate raw parameters into a [`Configuration`].
///
/// Fails with [`ThreesError::InvalidConfiguration`] if either value is ≤ 0 or
/// `num_dice` exceeds [`MAX_NUM_DICE`].
pub fn configure(num_dice: i64, num_simulations: i64) -> Result<Configuration> {
    if num_dice <= 0 {
        return Err(ThreesError::invalid("num_dice", num_dice, "must be positive"));
    }
    if num_dice > MAX_NUM_DICE as i64 {
        return Err(ThreesError::invalid(
            "num_dice",
            num_dice,
            "score bound would overflow",
        ));
    }
    if num_simulations <= 0 {
        return Err(ThreesError::invalid(
            "num_simulations",
            num_simulations,
            "must be positive",
        ));
    }
    Ok(Configuration {
        num_dice: num_dice as u32,
        num_simulations: num_simulations as u64,
    })
}

/// How trials are scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// All trials on the calling thread.
    Sequential,
    /// Trials spread over the rayon global pool, counting into shared
    /// atomic buckets.
    #[default]
    Parallel,
    /// Trials spread over the rayon global pool, each worker filling a
    /// private histogram that is merged at the end.
    Sharded,
}

impl ExecutionMode {
    pub fn is_concurrent(self) -> bool {
        !matches!(self, Self::Sequential)
    }
}

/// Per-run knobs that do not affect the game rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Master seed. Trial `i` draws from an RNG seeded with `seed + i`.
    pub seed: u64,
    pub mode: ExecutionMode,
}

impl SimulationOptions {
    pub fn new(seed: u64, mode: ExecutionMode) -> Self {
        Self { seed, mode }
    }

    /// Parallel run with a master seed drawn from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random(), ExecutionMode::Parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_valid() {
        let cfg = configure(5, 10_000).unwrap();
        assert_eq!(cfg.num_dice(), 5);
        assert_eq!(cfg.num_simulations(), 10_000);
    }

    #[test]
    fn test_configure_rejects_zero_dice() {
        let err = configure(0, 10).unwrap_err();
        assert_eq!(err.field(), "num_dice");
    }

    #[test]
    fn test_configure_rejects_negative_dice() {
        let err = configure(-1, 10).unwrap_err();
        assert_eq!(err.field(), "num_dice");
    }

    #[test]
    fn test_configure_rejects_non_positive_simulations() {
        assert_eq!(configure(2, 0).unwrap_err().field(), "num_simulations");
        assert_eq!(configure(2, -7).unwrap_err().field(), "num_simulations");
    }

    #[test]
    fn test_configure_rejects_overflowing_dice() {
        let err = configure(MAX_NUM_DICE as i64 + 1, 1).unwrap_err();
        assert_eq!(err.field(), "num_dice");
        assert!(configure(MAX_NUM_DICE as i64, 1).is_ok());
    }

    #[test]
    fn test_default_matches_cli_defaults() {
        let cfg = Configuration::default();
        assert_eq!(cfg, configure(5, 10_000).unwrap());
    }
}
