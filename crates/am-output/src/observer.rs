//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use am_core::Tick;
use am_field::CellField;
use am_sim::SimObserver;

use crate::row::{CellSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes cell snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, fired: usize, field: &CellField) {
        let row = TickSummaryRow::new(tick, fired, &field.summary());
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    /// Only open cells are written; walls never change.
    fn on_snapshot(&mut self, tick: Tick, field: &CellField) {
        let rows: Vec<CellSnapshotRow> = field
            .iter()
            .filter(|(_, cell)| !cell.wall)
            .map(|(pos, cell)| CellSnapshotRow::new(tick, pos, cell))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _field: &CellField) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
