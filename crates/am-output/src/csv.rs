//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cell_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellSnapshotRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("cell_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "row", "col", "ants", "big_ants", "dwarves",
            "scent_ant", "scent_dwarf", "scent_food",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "fired", "ants", "big_ants", "dwarves",
            "scent_ant", "scent_dwarf", "scent_food",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.ant_count.to_string(),
                row.big_ant_count.to_string(),
                row.dwarf_count.to_string(),
                row.scent_ant.to_string(),
                row.scent_dwarf.to_string(),
                row.scent_food.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.fired.to_string(),
            row.ants.to_string(),
            row.big_ants.to_string(),
            row.dwarves.to_string(),
            row.scent_ant.to_string(),
            row.scent_dwarf.to_string(),
            row.scent_food.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
