//! Startup configuration.
//!
//! Only the grid size and the initial population shape the colony.  Periods,
//! seed, run length and snapshot cadence are runner settings with defaults
//! matching the classic colony (12×30 maze, 20 ants, 20 dwarves).

use am_core::Pos;

use crate::{SimError, SimResult};

/// Top-level colony configuration.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature); any missing field takes its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ColonyConfig {
    /// Logical maze rows (`H`).  The cell grid has `2H + 1` rows.
    pub height: usize,

    /// Logical maze columns (`W`).  The cell grid has `2W + 1` columns.
    pub width: usize,

    /// Ants spawned in the top-left room.
    pub ant_count: usize,

    /// Dwarves spawned in the bottom-right room.
    pub dwarf_count: usize,

    /// Master seed.  `None` draws every RNG from OS entropy.
    pub seed: Option<u64>,

    /// Virtual milliseconds between steps of each ant.
    pub ant_period_ms: u64,

    /// Virtual milliseconds between steps of each dwarf.
    pub dwarf_period_ms: u64,

    pub evaporation_period_ms: u64,

    pub diffusion_period_ms: u64,

    /// How long `Sim::run` simulates, in virtual milliseconds.
    pub duration_ms: u64,

    /// Report a field snapshot to the observer every N virtual ms.
    /// 0 disables snapshots.
    pub snapshot_interval_ms: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            height:                12,
            width:                 30,
            ant_count:             20,
            dwarf_count:           20,
            seed:                  None,
            ant_period_ms:         100,
            dwarf_period_ms:       300,
            evaporation_period_ms: 300,
            diffusion_period_ms:   300,
            duration_ms:           60_000,
            snapshot_interval_ms:  1_000,
        }
    }
}

impl ColonyConfig {
    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> SimResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(SimError::Config(format!(
                "maze must be at least 1x1, got {}x{}",
                self.height, self.width
            )));
        }
        let periods = [
            ("ant_period_ms", self.ant_period_ms),
            ("dwarf_period_ms", self.dwarf_period_ms),
            ("evaporation_period_ms", self.evaporation_period_ms),
            ("diffusion_period_ms", self.diffusion_period_ms),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(SimError::Config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    /// Room where ants start: the top-left room.
    pub fn ant_spawn(&self) -> Pos {
        Pos::new(1, 1)
    }

    /// Room where dwarves start: the bottom-right room.
    pub fn dwarf_spawn(&self) -> Pos {
        Pos::new(2 * self.height - 1, 2 * self.width - 1)
    }
}
