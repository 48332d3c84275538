//! Simulation observer trait for progress reporting and data collection.

use am_core::{Pos, ProcessId, Tick};
use am_field::CellField;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points of the event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress logger
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, tick: Tick, fired: usize, _field: &CellField) {
///         log::trace!("{tick}: {fired} processes fired");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when the clock jumps to `tick`, before any process fires.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after every process due at `tick` has fired.
    fn on_step_end(&mut self, _tick: Tick, _fired: usize, _field: &CellField) {}

    /// Called when an ant consumes a dwarf at `at` and becomes a big ant.
    fn on_transform(&mut self, _tick: Tick, _process: ProcessId, _at: Pos) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ms`).
    ///
    /// Read-only access to the full field is the whole rendering contract:
    /// walls, occupancy counts, and raw (unclamped) scents.
    fn on_snapshot(&mut self, _tick: Tick, _field: &CellField) {}

    /// Called once when [`Sim::run`][crate::Sim::run] reaches its end tick.
    fn on_sim_end(&mut self, _final_tick: Tick, _field: &CellField) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
