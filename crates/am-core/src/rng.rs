//! Per-process and simulation-level RNG wrappers.
//!
//! # Seeding strategy
//!
//! The colony is randomized by default: both wrappers can be seeded from OS
//! entropy.  When a run seed is supplied, each process gets its own
//! independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (process_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive process IDs uniformly across the seed space, so
//! adding processes at the end of the registry does not disturb the streams
//! of existing ones.
//!
//! The maze RNG (`SimRng`) XORs the run seed with a separate salt, because
//! process 0's mix is the run seed itself.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ProcessId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Salt for `SimRng`.  Process 0 mixes to the bare run seed, so the maze RNG
/// must not.
const SIM_SALT: u64 = MIXING_CONSTANT.rotate_left(1);

// ── ProcessRng ────────────────────────────────────────────────────────────────

/// Per-process RNG, stored alongside each registered process.
pub struct ProcessRng(SmallRng);

impl ProcessRng {
    /// Seed deterministically from the run's global seed and a process ID.
    pub fn new(global_seed: u64, process: ProcessId) -> Self {
        let seed = global_seed ^ (process.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ProcessRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (non-reproducible runs).
    pub fn from_entropy() -> Self {
        ProcessRng(SmallRng::from_entropy())
    }

    /// Seeded when `global_seed` is `Some`, entropy otherwise.
    pub fn for_process(global_seed: Option<u64>, process: ProcessId) -> Self {
        match global_seed {
            Some(seed) => Self::new(seed, process),
            None       => Self::from_entropy(),
        }
    }

    /// Expose the inner `SmallRng` for generic `R: Rng` callers.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (maze generation).
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    /// The seed is salted so the maze stream never coincides with the
    /// stream of any `ProcessRng` drawn from the same run seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed ^ SIM_SALT))
    }

    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform integer in `[start, end)`.
    ///
    /// # Panics
    /// Panics if `start >= end`.
    #[inline]
    pub fn randint(&mut self, start: usize, end: usize) -> usize {
        self.0.gen_range(start..end)
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
