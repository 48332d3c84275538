//! The shared cell field.
//!
//! `CellField` is a flat row-major `Vec<Cell>` covering every position of a
//! materialized maze.  Exactly one process mutates it at a time: the
//! scheduler lends `&mut CellField` for the duration of a single tick.

use std::fmt;

use am_core::{Move, Pos};
use am_maze::Maze;

use crate::Cell;

/// Mutable per-cell state addressed by maze coordinates.
#[derive(Clone, Debug)]
pub struct CellField {
    rows:  usize,
    cols:  usize,
    cells: Vec<Cell>,
}

impl CellField {
    /// Wall flags from `maze`; all counts and scents zero.
    pub fn from_maze(maze: &Maze) -> Self {
        let (rows, cols) = (maze.rows(), maze.cols());
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(if maze.is_wall(Pos::new(r, c)) { Cell::wall() } else { Cell::empty() });
            }
        }
        Self { rows, cols, cells }
    }

    /// Build directly from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cell count does not match {rows}x{cols}");
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, pos: Pos) -> usize {
        pos.row * self.cols + pos.col
    }

    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.idx(pos)]
    }

    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        let i = self.idx(pos);
        &mut self.cells[i]
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.in_bounds(pos).then(|| self.cell(pos))
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// In bounds and not a wall: a legal place to stand.
    #[inline]
    pub fn is_valid(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.cell(pos).wall
    }

    /// Landing cell of `m` from `pos`, if that landing is valid.
    #[inline]
    pub fn step(&self, pos: Pos, m: Move) -> Option<Pos> {
        pos.offset(m, self.rows, self.cols).filter(|&p| !self.cell(p).wall)
    }

    /// Reserved queen marker; has no effect on movement.
    pub fn mark_queen(&mut self, pos: Pos) {
        self.cell_mut(pos).is_queen = true;
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Pos::new(i / cols, i % cols), c))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Population and scent totals over the whole field.
    pub fn summary(&self) -> FieldSummary {
        self.cells.iter().fold(FieldSummary::default(), |mut s, c| {
            s.ants        += c.ant_count as u64;
            s.big_ants    += c.big_ant_count as u64;
            s.dwarves     += c.dwarf_count as u64;
            s.scent_ant   += c.scent_ant;
            s.scent_dwarf += c.scent_dwarf;
            s.scent_food  += c.scent_food;
            s
        })
    }
}

impl fmt::Display for CellField {
    /// One glyph per cell (see [`crate::Occupant::glyph`]), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{}", cell.occupant().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Field-wide totals, used for tick summaries and conservation checks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSummary {
    /// All ants, big ones included.
    pub ants:        u64,
    pub big_ants:    u64,
    pub dwarves:     u64,
    pub scent_ant:   f64,
    pub scent_dwarf: f64,
    pub scent_food:  f64,
}
