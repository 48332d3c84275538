//! Virtual simulation time.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is one
//! simulated millisecond.  Process periods (ant steps, dwarf steps, field
//! updates) are expressed in ticks, so all scheduling arithmetic is exact
//! integer arithmetic and independent of wall-clock speed.
//!
//! The clock never advances one tick at a time: the scheduler jumps
//! `SimClock` straight to the next tick at which some process is due.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute virtual-time instant, in simulated milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The scheduler's notion of "now".
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The most recent tick at which processes fired (or were due).
    pub current_tick: Tick,
    /// Number of distinct ticks at which at least one process fired.
    pub steps: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump forward to `tick`.  Going backwards is ignored.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        if tick > self.current_tick {
            self.current_tick = tick;
        }
    }

    /// Record that processes fired at the current tick.
    #[inline]
    pub fn record_step(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.current_tick.0
    }

    /// Elapsed simulated time in seconds, for human-readable logging.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 / 1_000.0
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s, {} steps)", self.current_tick, self.elapsed_secs(), self.steps)
    }
}
