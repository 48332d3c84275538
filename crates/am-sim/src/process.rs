//! Scheduled processes: one per agent, plus the two field processes.
//!
//! A process owns only its private state (position, last step, whether it
//! has grown big).  The shared [`CellField`] is lent to it for the duration
//! of one step and never retained.

use am_core::{Move, Pos};
use am_field::{AgentKind, CellField, diffuse, evaporate, pick_next};
use rand::Rng;

/// Ant scent laid on the cell an ant leaves.
pub const ANT_DEPOSIT: f64 = 0.03;
/// Food scent laid on the cell a big ant leaves.
pub const FOOD_DEPOSIT: f64 = 0.03;
/// Dwarf scent laid on the cell a dwarf leaves.
pub const DWARF_DEPOSIT: f64 = 0.1;

/// What a single process step did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The agent found no occupant of its kind at its recorded cell.
    Skipped,
    /// The agent took one step (possibly staying in place).
    Moved { from: Pos, to: Pos },
    /// An ant stepped onto a dwarf, consumed it, and became a big ant.
    Transformed { from: Pos, to: Pos },
    /// A field process updated the whole field.
    FieldUpdated,
}

// ── Ants ──────────────────────────────────────────────────────────────────────

/// Private state of one ant.
#[derive(Clone, Debug, PartialEq)]
pub struct AntProcess {
    pub pos:    Pos,
    /// The previous step; its reverse is suppressed on the next step.
    pub last:   Move,
    pub is_big: bool,
}

impl AntProcess {
    /// Place a new ant at `pos` and count it in the field.
    pub fn spawn(field: &mut CellField, pos: Pos) -> Self {
        field.cell_mut(pos).ant_count += 1;
        Self { pos, last: Move::STAY, is_big: false }
    }

    pub fn kind(&self) -> AgentKind {
        if self.is_big { AgentKind::BigAnt } else { AgentKind::Ant }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, field: &mut CellField, rng: &mut R) -> StepOutcome {
        let from = self.pos;
        let here = field.cell_mut(from);
        if here.ant_count == 0 {
            return StepOutcome::Skipped;
        }
        here.ant_count -= 1;
        if self.is_big {
            here.big_ant_count = here.big_ant_count.saturating_sub(1);
            here.scent_food += FOOD_DEPOSIT;
        } else {
            here.scent_ant += ANT_DEPOSIT;
        }

        let m = pick_next(field, from, self.kind().weight_fn(), self.last, rng);
        self.last = m;
        self.pos = field.step(from, m).unwrap_or(from);

        let there = field.cell_mut(self.pos);
        there.ant_count += 1;
        let mut transformed = false;
        if there.dwarf_count > 0 && !self.is_big {
            there.dwarf_count -= 1;
            self.is_big = true;
            self.last = self.last.reversed();
            transformed = true;
        }
        if self.is_big {
            there.big_ant_count += 1;
        }

        if transformed {
            StepOutcome::Transformed { from, to: self.pos }
        } else {
            StepOutcome::Moved { from, to: self.pos }
        }
    }
}

// ── Dwarves ───────────────────────────────────────────────────────────────────

/// Private state of one dwarf.
#[derive(Clone, Debug, PartialEq)]
pub struct DwarfProcess {
    pub pos: Pos,
}

impl DwarfProcess {
    pub fn spawn(field: &mut CellField, pos: Pos) -> Self {
        field.cell_mut(pos).dwarf_count += 1;
        Self { pos }
    }

    /// Dwarves never suppress backtracking.
    pub fn step<R: Rng + ?Sized>(&mut self, field: &mut CellField, rng: &mut R) -> StepOutcome {
        let from = self.pos;
        let here = field.cell_mut(from);
        if here.dwarf_count == 0 {
            return StepOutcome::Skipped;
        }
        here.scent_dwarf += DWARF_DEPOSIT;
        here.dwarf_count -= 1;

        let m = pick_next(field, from, AgentKind::Dwarf.weight_fn(), Move::UNREACHABLE, rng);
        self.pos = field.step(from, m).unwrap_or(from);
        field.cell_mut(self.pos).dwarf_count += 1;

        StepOutcome::Moved { from, to: self.pos }
    }
}

// ── Process ───────────────────────────────────────────────────────────────────

/// Any schedulable process.
#[derive(Clone, Debug, PartialEq)]
pub enum Process {
    Ant(AntProcess),
    Dwarf(DwarfProcess),
    Evaporation,
    Diffusion,
}

impl Process {
    /// Run one step against the field.
    pub fn step<R: Rng + ?Sized>(&mut self, field: &mut CellField, rng: &mut R) -> StepOutcome {
        match self {
            Process::Ant(ant)     => ant.step(field, rng),
            Process::Dwarf(dwarf) => dwarf.step(field, rng),
            Process::Evaporation  => {
                evaporate(field);
                StepOutcome::FieldUpdated
            }
            Process::Diffusion    => {
                diffuse(field);
                StepOutcome::FieldUpdated
            }
        }
    }

    /// Current agent kind, or `None` for field processes.
    pub fn agent_kind(&self) -> Option<AgentKind> {
        match self {
            Process::Ant(ant)  => Some(ant.kind()),
            Process::Dwarf(_)  => Some(AgentKind::Dwarf),
            _                  => None,
        }
    }

    /// Recorded position, or `None` for field processes.
    pub fn position(&self) -> Option<Pos> {
        match self {
            Process::Ant(ant)     => Some(ant.pos),
            Process::Dwarf(dwarf) => Some(dwarf.pos),
            _                     => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Process::Ant(ant)    => ant.kind().as_str(),
            Process::Dwarf(_)    => "dwarf",
            Process::Evaporation => "evaporation",
            Process::Diffusion   => "diffusion",
        }
    }
}
