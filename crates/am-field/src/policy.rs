//! Movement policy: how desirable a cell looks to each kind of agent.
//!
//! Every weight function is a pure function of one [`Cell`] and returns a
//! non-negative number, exactly `0.0` for walls.

use crate::Cell;

/// Desirability of a candidate cell.
pub type WeightFn = fn(&Cell) -> f64;

/// Extra exponent an ant gets for a cell currently holding a dwarf.
const DWARF_PRESENCE_BONUS: f64 = 10.0;

/// Ants avoid their own trail and are drawn to dwarf scent, dwarves, and
/// (weakly) food scent.
pub fn ant_weight(cell: &Cell) -> f64 {
    if cell.wall {
        return 0.0;
    }
    let bonus = if cell.dwarf_count > 0 { DWARF_PRESENCE_BONUS } else { 0.0 };
    (-100.0 * cell.scent_ant + 80.0 * cell.scent_dwarf + 10.0 * cell.scent_food + bonus).exp()
}

/// Big ants avoid the food scent they lay and follow ant scent home.
pub fn big_ant_weight(cell: &Cell) -> f64 {
    if cell.wall {
        return 0.0;
    }
    (-120.0 * cell.scent_food + 100.0 * cell.scent_ant).exp()
}

/// Dwarves never step onto a cell holding ants; otherwise they shy away from
/// ant scent and, weakly, from their own.
pub fn dwarf_weight(cell: &Cell) -> f64 {
    if cell.wall || cell.ant_count > 0 {
        return 0.0;
    }
    (-10.0 * cell.scent_ant - cell.scent_dwarf).exp()
}

/// The three agent kinds.  An ant becomes a big ant after catching a dwarf.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Ant,
    BigAnt,
    Dwarf,
}

impl AgentKind {
    /// The movement policy for this kind.
    pub fn weight_fn(self) -> WeightFn {
        match self {
            AgentKind::Ant    => ant_weight,
            AgentKind::BigAnt => big_ant_weight,
            AgentKind::Dwarf  => dwarf_weight,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Ant    => "ant",
            AgentKind::BigAnt => "big_ant",
            AgentKind::Dwarf  => "dwarf",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
