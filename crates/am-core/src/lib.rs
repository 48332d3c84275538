//! `am-core` — foundational types for the ant-maze colony simulation.
//!
//! This crate is a dependency of every other `am-*` crate.  It has no `am-*`
//! dependencies and minimal external ones (only `rand`, plus optional
//! `serde`).  Each crate above it defines its own error enum.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ProcessId`, `NodeId`                                 |
//! | [`pos`]         | `Pos` (maze row/col), `Move` (one-cell step)          |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `ProcessRng` (per-process), `SimRng` (global)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{NodeId, ProcessId};
pub use pos::{Move, Pos};
pub use rng::{ProcessRng, SimRng};
pub use time::{SimClock, Tick};
