//! colony — runs one ant-maze colony and writes CSV output.
//!
//! ```text
//! colony [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the defaults are used (12×30 maze, 20 ants,
//! 20 dwarves, 60 s of virtual time, entropy seed).  Missing JSON fields
//! fall back to their defaults.  Set `RUST_LOG=debug` to see every
//! transformation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use am_core::{ProcessId, Pos, Tick};
use am_field::CellField;
use am_output::{CsvWriter, OutputWriter, SimOutputObserver};
use am_sim::{ColonyConfig, SimBuilder, SimObserver};

const DEFAULT_OUTPUT_DIR: &str = "output/colony";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    transforms:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, transforms: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_step_end(&mut self, tick: Tick, fired: usize, field: &CellField) {
        self.summary_rows += 1;
        self.inner.on_step_end(tick, fired, field);
    }

    fn on_transform(&mut self, tick: Tick, id: ProcessId, pos: Pos) {
        self.transforms += 1;
        self.inner.on_transform(tick, id, pos);
    }

    fn on_snapshot(&mut self, tick: Tick, field: &CellField) {
        self.snapshot_rows += field.iter().filter(|(_, c)| !c.wall).count();
        let s = field.summary();
        info!(
            "{tick}: {} ants, {} big ants, {} dwarves",
            s.ants, s.big_ants, s.dwarves
        );
        self.inner.on_snapshot(tick, field);
    }

    fn on_sim_end(&mut self, final_tick: Tick, field: &CellField) {
        self.inner.on_sim_end(final_tick, field);
    }
}

fn load_config(path: Option<&Path>) -> Result<ColonyConfig> {
    let Some(path) = path else {
        return Ok(ColonyConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let config = load_config(config_path.as_deref())?;
    println!("=== colony — ants and dwarves in a random maze ===");
    println!(
        "Maze: {}x{}  |  Ants: {}  |  Dwarves: {}  |  Seed: {}",
        config.height,
        config.width,
        config.ant_count,
        config.dwarf_count,
        config.seed.map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
    );
    println!(
        "Run: {} ms, snapshot every {} ms",
        config.duration_ms, config.snapshot_interval_ms
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config).build()?;
    println!("{}", sim.maze);

    // 2. Set up output.
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let s = sim.field.summary();
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  {}/cell_snapshots.csv : {} rows", output_dir.display(), obs.snapshot_rows);
    println!("  {}/tick_summaries.csv : {} rows", output_dir.display(), obs.summary_rows);
    println!("  transformations      : {}", obs.transforms);
    println!("  processes registered : {}", sim.registry.len());
    println!(
        "  population           : {} ants ({} big), {} dwarves",
        s.ants, s.big_ants, s.dwarves
    );
    println!();

    // 5. Final field.
    println!("{}", sim.field);

    Ok(())
}
