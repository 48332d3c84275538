//! Process registry: parallel arrays of process state, period, and RNG.
//!
//! # Why separate arrays?
//!
//! A step needs `&mut Process` and `&mut ProcessRng` for the same id at the
//! same time as the scheduler holds `&self.periods`.  Keeping the three in
//! their own `Vec`s lets the borrow checker see the accesses as disjoint.

use am_core::{ProcessId, ProcessRng};
use am_field::CellField;

use crate::process::{Process, StepOutcome};

/// Every scheduled process, indexed by `ProcessId`.
#[derive(Default)]
pub struct ProcessRegistry {
    pub processes: Vec<Process>,
    /// Virtual ms between consecutive steps, per process.
    pub periods:   Vec<u64>,
    pub rngs:      Vec<ProcessRng>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `process` and return its id (sequential from 0).
    pub fn register(&mut self, process: Process, period: u64, seed: Option<u64>) -> ProcessId {
        let id = ProcessId(self.processes.len() as u32);
        self.processes.push(process);
        self.periods.push(period);
        self.rngs.push(ProcessRng::for_process(seed, id));
        id
    }

    /// Run one step of `id` against `field`.
    pub fn fire(&mut self, id: ProcessId, field: &mut CellField) -> StepOutcome {
        let rng = self.rngs[id.index()].inner();
        self.processes[id.index()].step(field, rng)
    }

    #[inline]
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.index())
    }

    #[inline]
    pub fn period(&self, id: ProcessId) -> u64 {
        self.periods[id.index()]
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// `(id, process)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &Process)> + '_ {
        self.processes
            .iter()
            .enumerate()
            .map(|(i, p)| (ProcessId(i as u32), p))
    }

    /// Agent processes by current kind: (ants, big ants, dwarves).  Eaten
    /// dwarves keep their process and are still counted here.
    pub fn population(&self) -> (usize, usize, usize) {
        use am_field::AgentKind;

        self.processes.iter().fold((0, 0, 0), |(a, b, d), p| match p.agent_kind() {
            Some(AgentKind::Ant)    => (a + 1, b, d),
            Some(AgentKind::BigAnt) => (a, b + 1, d),
            Some(AgentKind::Dwarf)  => (a, b, d + 1),
            None                    => (a, b, d),
        })
    }
}
