//! `am-sim` — discrete-event runner for the ant-maze colony.
//!
//! # Event loop
//!
//! ```text
//! loop:
//!   ① Pop     — take the earliest tick T and its due processes from WakeQueue
//!   ② Fire    — for each due process, in queue order:
//!                 ant / big ant → deposit, pick_next, move, maybe eat a dwarf
//!                 dwarf         → deposit, pick_next, move
//!                 evaporation   → decay every scent
//!                 diffusion     → spread dwarf scent
//!   ③ Requeue — push each fired process back at T + period
//!   ④ Observe — step hooks; field snapshot every snapshot_interval_ms
//! ```
//!
//! One tick is one virtual millisecond.  Default periods are 100 ms for
//! ants and 300 ms for dwarves, evaporation, and diffusion.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaporation runs on Rayon's thread pool.               |
//! | `serde`    | `ColonyConfig` derives `Serialize`/`Deserialize`.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use am_sim::{ColonyConfig, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ColonyConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{}", sim.field);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod process;
pub mod registry;
pub mod sim;
pub mod wake_queue;


pub use builder::SimBuilder;
pub use config::ColonyConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use process::{AntProcess, DwarfProcess, Process, StepOutcome};
pub use registry::ProcessRegistry;
pub use sim::Sim;
pub use wake_queue::WakeQueue;
