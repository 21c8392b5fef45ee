//! Environment configuration shared by the binary.
//!
//! Reads `RAYON_NUM_THREADS` and `THREES_SEED`.

use tracing::{info, warn};

use crate::constants::SEED_ENV_VAR;

/// Thread count: `requested`, else `RAYON_NUM_THREADS`, else rayon's default
/// (logical CPUs). Builds the rayon global pool, tolerating one that is
/// already initialized. Returns the thread count actually in use.
pub fn init_rayon_threads(requested: Option<usize>) -> usize {
    let num_threads = requested
        .filter(|&n| n > 0)
        .or_else(|| {
            std::env::var("RAYON_NUM_THREADS")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(0);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        warn!("rayon global pool already initialized: {}", e);
    }
    let active = rayon::current_num_threads();
    info!(threads = active, "rayon pool ready");
    active
}

/// Master seed from `THREES_SEED`, if set and parseable.
pub fn seed_from_env() -> Option<u64> {
    let raw = std::env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("ignoring unparseable {}={:?}", SEED_ENV_VAR, raw);
            None
        }
    }
}
