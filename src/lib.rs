//! # Threes — Monte Carlo simulator for an elimination dice game
//!
//! Plays many independent games of Threes and reports the empirical
//! distribution of final scores.
//!
//! ## Rules
//!
//! Roll `n` dice. Each round, scan the active dice once:
//!
//! | Pool shows a 3? | Action | Score |
//! |-----------------|--------|-------|
//! | yes | discard **all** 3s (bust round) | +0 |
//! | no | remove **one** die holding the lowest face | +lowest |
//!
//! Then re-roll every remaining die. The game ends when no dice remain.
//! Scores lie in `[0, 6n]`.
//!
//! ## Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`configure`] validates dice/trial counts; execution mode and seed |
//! | [`game_mechanics`] | [`play_game`]: one trial against a [`DieRoller`] |
//! | [`simulation`] | [`run_simulation`]: N trials into a [`Histogram`], timed |
//! | [`report`] | Text and JSON rendering for the binary |
//!
//! Trials are independent. In parallel mode they run on the rayon pool, each
//! with its own `SmallRng`, and counts land in an atomic histogram.

pub mod config;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod game_mechanics;
pub mod report;
pub mod simulation;

pub use config::{configure, Configuration, ExecutionMode, SimulationOptions};
pub use error::{Result, ThreesError};
pub use game_mechanics::{play_game, DicePool, DieRoller};
pub use simulation::{run_simulation, run_simulation_with, Histogram, SimulationResult};
