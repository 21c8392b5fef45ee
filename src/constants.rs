//! Game constants.
//!
//! A standard six-sided die is used throughout. The neutral face never scores:
//! any round in which it shows is a bust round.

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// Lowest face value.
pub const MIN_FACE: u8 = 1;

/// Highest face value.
pub const MAX_FACE: u8 = DIE_FACES;

/// Face value that triggers a bust round (all such dice discarded, no score).
pub const NEUTRAL_VALUE: u8 = 3;

/// Default number of dice when the caller supplies none.
pub const DEFAULT_NUM_DICE: u32 = 5;

/// Default number of trials when the caller supplies none.
pub const DEFAULT_NUM_SIMULATIONS: u64 = 10_000;

/// Environment variable overriding the master seed.
pub const SEED_ENV_VAR: &str = "THREES_SEED";

/// Largest score a game with `num_dice` dice could reach in principle.
///
/// Every scoring round removes one die and adds at most [`MAX_FACE`], so the
/// sum is bounded by `num_dice * 6`. The true maximum is lower (a die showing
/// the neutral value never scores), but the histogram is sized to this bound.
#[inline(always)]
pub fn max_score(num_dice: u32) -> u32 {
    num_dice * MAX_FACE as u32
}
