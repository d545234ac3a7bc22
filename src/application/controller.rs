use rand::{SeedableRng, rngs::StdRng};

use super::EngineConfig;
use crate::domain::{Cell, Grid, PatternLibrary, Result, SeedKind, StepStats, resize, rules, seeding};

/// Fastest tick interval
pub const MIN_SPEED_MS: u32 = 50;
/// Slowest tick interval
pub const MAX_SPEED_MS: u32 = 500;
/// Interval change per speed command
pub const SPEED_STEP_MS: u32 = 50;

/// Clamp a tick interval into [MIN_SPEED_MS, MAX_SPEED_MS] and round it
/// to the nearest multiple of SPEED_STEP_MS
pub fn clamp_speed(ms: i64) -> u32 {
    let step = i64::from(SPEED_STEP_MS);
    let clamped = ms.clamp(i64::from(MIN_SPEED_MS), i64::from(MAX_SPEED_MS));
    ((clamped + step / 2) / step * step) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Read-only statistics for the info display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationStats {
    /// Starts at 1; advances only on ticks that changed the grid
    pub generation: u64,
    /// Alive cells in the latest stepped grid
    pub live_count: usize,
    /// Label of the last seeding ("random", "empty" or a pattern name)
    pub current_pattern: String,
}

impl SimulationStats {
    fn fresh(label: &str) -> Self {
        Self {
            generation: 1,
            live_count: 0,
            current_pattern: label.to_owned(),
        }
    }
}

/// SimulationController orchestrates the simulation.
/// It owns the current grid, a scratch buffer for double-buffered stepping,
/// the run state and the statistics, so all of them change together.
pub struct SimulationController {
    grid: Grid,
    scratch: Grid,
    library: PatternLibrary,
    stats: SimulationStats,
    run_state: RunState,
    speed_ms: u32,
    alive_probability: f64,
    parallel_threshold: usize,
    revision: u64,
    rng: StdRng,
}

impl SimulationController {
    /// Create a paused controller seeded with a random catalog pattern
    pub fn new(config: &EngineConfig, rows: usize, cols: usize, library: PatternLibrary) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (grid, name) = seeding::seed_from_pattern(&library, rows, cols, &mut rng)?;
        log::info!("Seeded {}x{} grid with pattern '{}'", rows, cols, name);
        let stats = SimulationStats::fresh(name);

        Ok(Self {
            scratch: Grid::blank(rows, cols),
            grid,
            library,
            stats,
            run_state: RunState::Paused,
            speed_ms: clamp_speed(i64::from(config.speed_ms)),
            alive_probability: config.alive_probability,
            parallel_threshold: config.parallel_threshold,
            revision: 0,
            rng,
        })
    }

    /// Initialization step: the simulation starts running once set up
    pub fn start(&mut self) {
        log::info!("Simulation started ({} ms/tick)", self.speed_ms);
        self.run_state = RunState::Running;
    }

    /// Latest published generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Description of the last seeded catalog pattern, if any
    pub fn pattern_description(&self) -> Option<&'static str> {
        self.library.get(&self.stats.current_pattern).map(|p| p.description)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Bumped every time the published grid is replaced or edited
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn pause(&mut self) {
        self.run_state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.run_state = RunState::Running;
    }

    /// Toggle play/pause state
    pub fn toggle_run(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        log::info!("Simulation {:?}", self.run_state);
        self.run_state
    }

    /// Adjust the tick interval by `delta_ms`, clamped to the allowed range
    /// and snapped to whole steps
    pub fn set_speed(&mut self, delta_ms: i32) -> u32 {
        self.speed_ms = clamp_speed(i64::from(self.speed_ms) + i64::from(delta_ms));
        log::info!("Tick interval: {} ms", self.speed_ms);
        self.speed_ms
    }

    /// Shorter interval
    pub fn speed_up(&mut self) -> u32 {
        self.set_speed(-(SPEED_STEP_MS as i32))
    }

    /// Longer interval
    pub fn slow_down(&mut self) -> u32 {
        self.set_speed(SPEED_STEP_MS as i32)
    }

    fn uses_parallel_step(&self) -> bool {
        let (rows, cols) = self.grid.dimensions();
        self.parallel_threshold > 0 && rows * cols >= self.parallel_threshold
    }

    /// Advance one generation. Does nothing while paused.
    pub fn tick(&mut self) -> Option<StepStats> {
        if !self.is_running() {
            return None;
        }

        let stats = if self.uses_parallel_step() {
            rules::step_into_parallel(&self.grid, &mut self.scratch)
        } else {
            rules::step_into(&self.grid, &mut self.scratch)
        };
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.revision += 1;

        self.stats.live_count = stats.live_count;
        if stats.changed {
            self.stats.generation += 1;
        }
        log::debug!(
            "Generation {}: {} alive, changed={}",
            self.stats.generation,
            stats.live_count,
            stats.changed
        );
        Some(stats)
    }

    /// Replace the grid with a freshly seeded one and reset the statistics.
    /// Pattern and Empty leave the simulation paused; Random resumes it.
    pub fn reseed(&mut self, kind: SeedKind) -> Result<()> {
        self.pause();
        let (rows, cols) = self.dimensions();

        let (grid, label) = match kind {
            SeedKind::Pattern => seeding::seed_from_pattern(&self.library, rows, cols, &mut self.rng)?,
            SeedKind::Empty => (seeding::seed_empty(rows, cols)?, seeding::EMPTY_SEED_NAME),
            SeedKind::Random => (
                seeding::seed_random(rows, cols, self.alive_probability, &mut self.rng)?,
                seeding::RANDOM_SEED_NAME,
            ),
        };
        log::info!("Reseeded {}x{} grid: {}", rows, cols, label);

        self.stats = SimulationStats::fresh(label);
        self.install(grid);

        if kind == SeedKind::Random {
            self.resume();
        }
        Ok(())
    }

    /// Remap the grid to new extents, keeping cells that still fit.
    /// The simulation is running afterwards.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        let next = resize::remap(&self.grid, rows, cols)?;
        let (old_rows, old_cols) = self.dimensions();
        log::info!("Resized grid {}x{} -> {}x{}", old_rows, old_cols, rows, cols);

        self.pause();
        self.install(next);
        self.resume();
        Ok(())
    }

    /// Flip one cell by hand, returning its new state
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell> {
        let cell = self.grid.toggle(row, col)?;
        self.revision += 1;
        Ok(cell)
    }

    fn install(&mut self, grid: Grid) {
        self.grid = grid;
        self.revision += 1;
    }
}
