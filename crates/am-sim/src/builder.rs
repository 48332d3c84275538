//! Fluent builder for constructing a [`Sim`].

use am_core::{SimClock, SimRng, Tick};
use am_field::CellField;
use am_maze::{Maze, MazeGenerator};
use log::info;

use crate::{ColonyConfig, ProcessRegistry, Sim, SimError, SimResult, WakeQueue};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.maze(m)`       | Freshly generated from `config.height × width`   |
/// | `.populate(b)`   | `true`: spawn `ant_count` ants, `dwarf_count` dwarves |
///
/// Field processes (evaporation, diffusion) are always registered, after
/// the agents.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(ColonyConfig::default()).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:   ColonyConfig,
    maze:     Option<Maze>,
    populate: bool,
}

impl SimBuilder {
    pub fn new(config: ColonyConfig) -> Self {
        Self { config, maze: None, populate: true }
    }

    /// Use a pre-built maze instead of generating one.  Its logical size must
    /// match `config.height × config.width`.
    pub fn maze(mut self, maze: Maze) -> Self {
        self.maze = Some(maze);
        self
    }

    /// Whether to spawn the configured ants and dwarves.  Turn off to place
    /// agents by hand with [`Sim::spawn_ant`] / [`Sim::spawn_dwarf`].
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Validate inputs, build the maze and field, register every process,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let maze = match self.maze {
            Some(m) => {
                if m.height() != self.config.height || m.width() != self.config.width {
                    return Err(SimError::DimensionMismatch {
                        expected_h: self.config.height,
                        expected_w: self.config.width,
                        got_h:      m.height(),
                        got_w:      m.width(),
                    });
                }
                m
            }
            None => {
                let mut rng = SimRng::from_seed_opt(self.config.seed);
                MazeGenerator::new(self.config.height, self.config.width).generate(&mut rng)?
            }
        };

        let field = CellField::from_maze(&maze);
        let next_snapshot = (self.config.snapshot_interval_ms > 0)
            .then_some(Tick(self.config.snapshot_interval_ms));

        let mut sim = Sim {
            config:     self.config,
            clock:      SimClock::new(),
            maze,
            field,
            registry:   ProcessRegistry::new(),
            wake_queue: WakeQueue::new(),
            next_snapshot,
        };

        if self.populate {
            let ant_spawn = sim.config.ant_spawn();
            for _ in 0..sim.config.ant_count {
                sim.spawn_ant(ant_spawn)?;
            }
            let dwarf_spawn = sim.config.dwarf_spawn();
            for _ in 0..sim.config.dwarf_count {
                sim.spawn_dwarf(dwarf_spawn)?;
            }
        }
        sim.spawn_field_processes();

        info!(
            "colony ready: {}x{} maze, {} processes ({} ants, {} dwarves)",
            sim.config.height,
            sim.config.width,
            sim.registry.len(),
            if self.populate { sim.config.ant_count } else { 0 },
            if self.populate { sim.config.dwarf_count } else { 0 },
        );
        Ok(sim)
    }
}
