//! `am-field` — the shared cell field and everything that reads or evolves it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`cell`]     | `Cell` (walls, occupancy, three scents), `Occupant`           |
//! | [`field`]    | `CellField` (row-major cells over a maze), `FieldSummary`     |
//! | [`policy`]   | `ant_weight`, `big_ant_weight`, `dwarf_weight`, `AgentKind`   |
//! | [`choice`]   | `choose_weighted`, `pick_next`                                |
//! | [`dynamics`] | `evaporate`, `diffuse`                                        |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Evaporation runs on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Cell` and summaries. |

pub mod cell;
pub mod choice;
pub mod dynamics;
pub mod field;
pub mod policy;

#[cfg(test)]
mod tests;

pub use cell::{Cell, Occupant};
pub use choice::{EXPLORATION_PROBABILITY, choose_weighted, pick_next};
pub use dynamics::{diffuse, evaporate};
pub use field::{CellField, FieldSummary};
pub use policy::{AgentKind, WeightFn, ant_weight, big_ant_weight, dwarf_weight};
