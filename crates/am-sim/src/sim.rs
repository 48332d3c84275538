//! The `Sim` struct and its event loop.

use am_core::{Pos, ProcessId, SimClock, Tick};
use am_field::CellField;
use am_maze::Maze;
use log::{debug, trace};

use crate::process::{AntProcess, DwarfProcess, Process, StepOutcome};
use crate::{ColonyConfig, ProcessRegistry, SimError, SimObserver, SimResult, WakeQueue};

/// The colony simulation runner.
///
/// `Sim` owns the maze, the shared [`CellField`], and every process.  The
/// event loop repeatedly:
///
/// 1. pops the earliest tick from the [`WakeQueue`] and jumps the clock there;
/// 2. fires each process due at that tick, in queue order, lending it
///    `&mut CellField` for the whole step;
/// 3. re-queues each fired process at `tick + period`.
///
/// Steps never interleave, so every process sees a field that no other step
/// is halfway through updating.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: ColonyConfig,

    /// Virtual clock, parked at the tick of the latest step.
    pub clock: SimClock,

    /// Wall layout the field was built from.
    pub maze: Maze,

    /// Shared per-cell state.
    pub field: CellField,

    /// Agent and field processes, with periods and RNGs.
    pub registry: ProcessRegistry,

    /// Next fire tick of every process.
    pub wake_queue: WakeQueue,

    /// Next tick at which a snapshot is due (`None` when disabled).
    pub(crate) next_snapshot: Option<Tick>,
}

impl Sim {
    // ── Spawning ──────────────────────────────────────────────────────────

    /// Add an ant at `pos`.  Its first step is one ant period from now.
    pub fn spawn_ant(&mut self, pos: Pos) -> SimResult<ProcessId> {
        self.check_spawn(pos)?;
        let ant = AntProcess::spawn(&mut self.field, pos);
        Ok(self.schedule(Process::Ant(ant), self.config.ant_period_ms))
    }

    /// Add a dwarf at `pos`.  Its first step is one dwarf period from now.
    pub fn spawn_dwarf(&mut self, pos: Pos) -> SimResult<ProcessId> {
        self.check_spawn(pos)?;
        let dwarf = DwarfProcess::spawn(&mut self.field, pos);
        Ok(self.schedule(Process::Dwarf(dwarf), self.config.dwarf_period_ms))
    }

    /// Register the evaporation and diffusion processes.
    pub(crate) fn spawn_field_processes(&mut self) -> (ProcessId, ProcessId) {
        let evaporation = self.schedule(Process::Evaporation, self.config.evaporation_period_ms);
        let diffusion = self.schedule(Process::Diffusion, self.config.diffusion_period_ms);
        (evaporation, diffusion)
    }

    fn check_spawn(&self, pos: Pos) -> SimResult<()> {
        if self.field.is_valid(pos) {
            Ok(())
        } else {
            Err(SimError::SpawnOnWall { pos })
        }
    }

    fn schedule(&mut self, process: Process, period: u64) -> ProcessId {
        let id = self.registry.register(process, period, self.config.seed);
        self.wake_queue.push(self.clock.current_tick + period, id);
        id
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Fire everything due at the earliest pending tick.
    ///
    /// Returns the tick processed, or `None` if no process is registered.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Tick> {
        let (now, due) = self.wake_queue.pop_next()?;
        self.clock.advance_to(now);
        observer.on_step_start(now);

        for &id in &due {
            match self.registry.fire(id, &mut self.field) {
                StepOutcome::Transformed { to, .. } => {
                    debug!("{now}: {id} caught a dwarf at {to} and became a big ant");
                    observer.on_transform(now, id, to);
                }
                StepOutcome::Skipped => {
                    if let Some(pos) = self.registry.get(id).and_then(|p| p.position()) {
                        trace!("{now}: {id} found no occupant at {pos}, skipped");
                    }
                }
                StepOutcome::Moved { .. } | StepOutcome::FieldUpdated => {}
            }
            self.wake_queue.push(now + self.registry.period(id), id);
        }

        self.clock.record_step();
        observer.on_step_end(now, due.len(), &self.field);
        self.maybe_snapshot(now, observer);
        Some(now)
    }

    /// Fire every step due at or before `end`, then park the clock at `end`.
    pub fn run_until<O: SimObserver>(&mut self, end: Tick, observer: &mut O) {
        while self.wake_queue.next_tick().is_some_and(|t| t <= end) {
            self.step(observer);
        }
        self.clock.advance_to(end);
    }

    /// Simulate `ms` more virtual milliseconds.
    pub fn run_for<O: SimObserver>(&mut self, ms: u64, observer: &mut O) {
        let end = self.clock.current_tick + ms;
        self.run_until(end, observer);
    }

    /// Run from the current tick to `config.duration_ms`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.config.duration_ms);
        self.run_until(end, observer);
        observer.on_sim_end(self.clock.current_tick, &self.field);
    }

    fn maybe_snapshot<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let Some(due) = self.next_snapshot else {
            return;
        };
        if now < due {
            return;
        }
        observer.on_snapshot(now, &self.field);
        let interval = self.config.snapshot_interval_ms;
        let mut next = due;
        while next <= now {
            next = next + interval;
        }
        self.next_snapshot = Some(next);
    }
}
