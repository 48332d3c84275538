//! Plain data row types written by output backends.

use am_core::{Pos, Tick};
use am_field::{Cell, FieldSummary};

/// One open cell's state at a snapshot tick.  Scents are raw, not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSnapshotRow {
    pub tick:          u64,
    pub row:           u32,
    pub col:           u32,
    pub ant_count:     u32,
    pub big_ant_count: u32,
    pub dwarf_count:   u32,
    pub scent_ant:     f64,
    pub scent_dwarf:   f64,
    pub scent_food:    f64,
}

impl CellSnapshotRow {
    pub fn new(tick: Tick, pos: Pos, cell: &Cell) -> Self {
        Self {
            tick:          tick.0,
            row:           pos.row as u32,
            col:           pos.col as u32,
            ant_count:     cell.ant_count,
            big_ant_count: cell.big_ant_count,
            dwarf_count:   cell.dwarf_count,
            scent_ant:     cell.scent_ant,
            scent_dwarf:   cell.scent_dwarf,
            scent_food:    cell.scent_food,
        }
    }
}

/// Field totals after one scheduler step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    /// Processes fired at this tick.
    pub fired:       u64,
    pub ants:        u64,
    pub big_ants:    u64,
    pub dwarves:     u64,
    pub scent_ant:   f64,
    pub scent_dwarf: f64,
    pub scent_food:  f64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, fired: usize, s: &FieldSummary) -> Self {
        Self {
            tick:        tick.0,
            fired:       fired as u64,
            ants:        s.ants,
            big_ants:    s.big_ants,
            dwarves:     s.dwarves,
            scent_ant:   s.scent_ant,
            scent_dwarf: s.scent_dwarf,
            scent_food:  s.scent_food,
        }
    }
}
