//! Per-cell simulation state.

/// One maze cell: fixed wall/queen flags, occupancy counts, and three scents.
///
/// Scents are non-negative and unbounded; consumers mapping them to display
/// ranges must clamp themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub wall:          bool,
    /// Reserved marker; no movement rule reads it.
    pub is_queen:      bool,
    pub ant_count:     u32,
    pub big_ant_count: u32,
    pub dwarf_count:   u32,
    pub scent_ant:     f64,
    pub scent_dwarf:   f64,
    pub scent_food:    f64,
}

impl Cell {
    pub fn wall() -> Self {
        Self { wall: true, ..Self::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// What a viewer should draw here, by priority: wall, big ant, ant,
    /// dwarf, empty.
    pub fn occupant(&self) -> Occupant {
        if self.wall {
            Occupant::Wall
        } else if self.ant_count > 0 {
            if self.big_ant_count > 0 { Occupant::BigAnt } else { Occupant::Ant }
        } else if self.dwarf_count > 0 {
            Occupant::Dwarf
        } else {
            Occupant::Empty
        }
    }
}

/// Display classification of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Wall,
    BigAnt,
    Ant,
    Dwarf,
    Empty,
}

impl Occupant {
    /// Single-character glyph for text frames.
    pub fn glyph(self) -> char {
        match self {
            Occupant::Wall   => '#',
            Occupant::BigAnt => 'A',
            Occupant::Ant    => 'a',
            Occupant::Dwarf  => 'd',
            Occupant::Empty  => ' ',
        }
    }
}
