//! Whole-field scent dynamics: evaporation and diffusion.

use am_core::{Move, Pos};

use crate::{Cell, CellField};

/// Fraction of ant scent lost per evaporation pass.
pub const ANT_EVAPORATION: f64 = 0.003;
/// Fraction of dwarf scent lost per evaporation pass.
pub const DWARF_EVAPORATION: f64 = 0.01;
/// Fraction of food scent lost per evaporation pass.
pub const FOOD_EVAPORATION: f64 = 0.003;
/// Fraction of a cell's current dwarf scent handed to each open neighbour.
pub const DWARF_DIFFUSION: f64 = 0.03;

#[inline]
fn evaporate_cell(cell: &mut Cell) {
    cell.scent_ant   -= ANT_EVAPORATION * cell.scent_ant;
    cell.scent_dwarf -= DWARF_EVAPORATION * cell.scent_dwarf;
    cell.scent_food  -= FOOD_EVAPORATION * cell.scent_food;
}

/// Decay every scent of every cell by its evaporation rate.
pub fn evaporate(field: &mut CellField) {
    #[cfg(not(feature = "parallel"))]
    {
        field.cells_mut().iter_mut().for_each(evaporate_cell);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        field.cells_mut().par_iter_mut().for_each(evaporate_cell);
    }
}

/// Spread dwarf scent to open neighbours.
///
/// Cells are visited row-major and neighbours in [`Move::DIRECTIONS`] order.
/// Each transfer is applied immediately, so later transfers in the same pass
/// see the already-reduced source and already-increased neighbours.  Results
/// depend on this order; totals are conserved up to rounding.
pub fn diffuse(field: &mut CellField) {
    let (rows, cols) = (field.rows(), field.cols());
    for r in 0..rows {
        for c in 0..cols {
            let src = Pos::new(r, c);
            if !field.is_valid(src) {
                continue;
            }
            for m in Move::DIRECTIONS {
                let Some(dst) = field.step(src, m) else {
                    continue;
                };
                let amount = DWARF_DIFFUSION * field.cell(src).scent_dwarf;
                field.cell_mut(src).scent_dwarf -= amount;
                field.cell_mut(dst).scent_dwarf += amount;
            }
        }
    }
}
