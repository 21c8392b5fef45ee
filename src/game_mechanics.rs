//! Game rules: one playthrough of Threes with a shrinking pool of dice.
//!
//! Each round scans the active dice once. If any die shows the neutral value
//! ([`NEUTRAL_VALUE`]) every such die is discarded and nothing is scored (a
//! bust round). Otherwise exactly one die holding the lowest face is removed
//! and its face is added to the total. The survivors are then re-rolled. The
//! game ends when the pool is empty.
//!
//! Every round removes at least one die, so a game with `n` dice lasts at most
//! `n` rounds.

use rand::rngs::{SmallRng, StdRng};
use rand::Rng;

use crate::constants::*;

/// Source of independent uniform die faces in `[1, 6]`.
///
/// The engine never shares a roller between trials; each caller owns one.
pub trait DieRoller {
    fn roll_die(&mut self) -> u8;
}

impl DieRoller for SmallRng {
    #[inline(always)]
    fn roll_die(&mut self) -> u8 {
        self.random_range(MIN_FACE..=MAX_FACE)
    }
}

impl DieRoller for StdRng {
    #[inline(always)]
    fn roll_die(&mut self) -> u8 {
        self.random_range(MIN_FACE..=MAX_FACE)
    }
}

/// Result of the single pass over the pool at the start of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolScan {
    /// At least one die shows [`NEUTRAL_VALUE`].
    pub has_neutral: bool,
    /// Lowest face in the pool.
    pub lowest: u8,
    /// First index holding `lowest`.
    pub lowest_index: usize,
}

/// The active dice of one game. Only ever shrinks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DicePool {
    faces: Vec<u8>,
}

impl DicePool {
    /// Roll `num_dice` fresh dice.
    pub fn roll<R: DieRoller + ?Sized>(num_dice: usize, rng: &mut R) -> Self {
        let faces = (0..num_dice).map(|_| rng.roll_die()).collect();
        Self { faces }
    }

    /// Build a pool from known faces.
    pub fn from_faces(faces: Vec<u8>) -> Self {
        debug_assert!(faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)));
        Self { faces }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// One pass: neutral presence plus the lowest face and where it sits.
    /// `None` for an empty pool.
    pub fn scan(&self) -> Option<PoolScan> {
        let mut has_neutral = false;
        let mut lowest = MAX_FACE + 1;
        let mut lowest_index = usize::MAX;
        for (i, &face) in self.faces.iter().enumerate() {
            if face == NEUTRAL_VALUE {
                has_neutral = true;
            }
            if face < lowest {
                lowest = face;
                lowest_index = i;
            }
        }
        if lowest_index == usize::MAX {
            return None;
        }
        Some(PoolScan {
            has_neutral,
            lowest,
            lowest_index,
        })
    }

    /// Discard every die showing the neutral value, compacting in place.
    /// Returns how many were removed.
    pub fn remove_neutral(&mut self) -> usize {
        let before = self.faces.len();
        self.faces.retain(|&face| face != NEUTRAL_VALUE);
        before - self.faces.len()
    }

    /// Remove the die at `index` and return its face. Order of the remaining
    /// dice is not preserved; it is irrelevant once they are re-rolled.
    pub fn remove_at(&mut self, index: usize) -> u8 {
        self.faces.swap_remove(index)
    }

    /// Re-roll every remaining die.
    pub fn reroll<R: DieRoller + ?Sized>(&mut self, rng: &mut R) {
        for face in &mut self.faces {
            *face = rng.roll_die();
        }
    }
}

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Round {
    /// Neutral dice were discarded; nothing scored.
    Bust { removed: usize },
    /// The lowest die was removed and scored.
    Scored { face: u8 },
}

/// Play one round against `pool` (which must be non-empty), including the
/// re-roll of survivors.
pub fn play_round<R: DieRoller + ?Sized>(pool: &mut DicePool, rng: &mut R) -> Option<Round> {
    let scan = pool.scan()?;
    let round = if scan.has_neutral {
        Round::Bust {
            removed: pool.remove_neutral(),
        }
    } else {
        Round::Scored {
            face: pool.remove_at(scan.lowest_index),
        }
    };
    pool.reroll(rng);
    Some(round)
}

/// Play one full game with `num_dice` dice and return its score.
///
/// The result lies in `[0, max_score(num_dice)]`. Zero dice is an empty game
/// scoring 0; callers validate the dice count once up front.
pub fn play_game<R: DieRoller + ?Sized>(num_dice: u32, rng: &mut R) -> u32 {
    let mut pool = DicePool::roll(num_dice as usize, rng);
    let mut total = 0u32;
    while let Some(round) = play_round(&mut pool, rng) {
        if let Round::Scored { face } = round {
            total += face as u32;
        }
    }
    total
}
