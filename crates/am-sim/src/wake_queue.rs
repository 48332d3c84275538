//! `WakeQueue` — the scheduler's priority queue of next fire times.
//!
//! Every registered process has exactly one pending entry: the virtual tick
//! at which it next fires.  The simulation drains the earliest tick, runs
//! each due process once, and pushes it back at `now + period`.
//!
//! Processes due at the same tick fire in the order they were pushed.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) insert and pop where W = number of distinct
//! pending ticks.  With a handful of distinct periods, W stays tiny.

use std::collections::BTreeMap;

use am_core::{ProcessId, Tick};

/// A priority queue mapping virtual ticks → processes due at that tick.
#[derive(Default, Debug)]
pub struct WakeQueue {
    inner: BTreeMap<Tick, Vec<ProcessId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `process` to fire at `tick`.
    pub fn push(&mut self, tick: Tick, process: ProcessId) {
        self.inner.entry(tick).or_default().push(process);
        self.total += 1;
    }

    /// Remove and return the earliest tick and everything due at it.
    pub fn pop_next(&mut self) -> Option<(Tick, Vec<ProcessId>)> {
        let (tick, processes) = self.inner.pop_first()?;
        self.total -= processes.len();
        Some((tick, processes))
    }

    /// The earliest tick with at least one queued process, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of (tick, process) entries.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
