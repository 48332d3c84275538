//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CellSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of cell snapshots.
    fn write_snapshots(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
