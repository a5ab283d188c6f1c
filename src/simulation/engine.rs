use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::performance::{self, PerformanceStatus, SimPerformanceMonitor};
use super::rules::update_grid;
use crate::config::SimConfig;
use crate::error::EngineResult;
use crate::grid::Grid;
use crate::material::lookup;
use crate::placement::{self, Brush};

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    /// 1-based index of the tick that produced these stats
    pub tick: u64,
    /// Number of cell swaps performed
    pub swaps: u32,
    /// Wall time spent in the pass
    pub duration: Duration,
}

/// Owns the grid and the random source, advances the simulation one tick at a time
pub struct TickEngine {
    grid: Grid,
    rng: StdRng,
    tick: u64,
    target_tick_rate: u32,
    monitor: SimPerformanceMonitor,
}

impl TickEngine {
    /// Build an engine from configuration
    pub fn new(config: &SimConfig) -> EngineResult<Self> {
        config.validate()?;

        let background = lookup(config.background);
        let grid = Grid::new(config.grid_width, config.grid_height, background)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!(
            "Tick engine ready: {}x{} grid, background {}, seed {:?}",
            config.grid_width,
            config.grid_height,
            config.background,
            config.seed
        );

        let mut engine = Self::from_parts(grid, rng);
        engine.target_tick_rate = config.tick_rate;
        Ok(engine)
    }

    /// Build a deterministic engine around an existing grid
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::from_parts(grid, StdRng::seed_from_u64(seed))
    }

    fn from_parts(grid: Grid, rng: StdRng) -> Self {
        let mut monitor = SimPerformanceMonitor::new();
        performance::set_cell_count(&mut monitor, grid.cell_count());
        Self {
            grid,
            rng,
            tick: 0,
            target_tick_rate: crate::constants::timing::TARGET_TICK_RATE,
            monitor,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access between ticks
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn performance(&self) -> &SimPerformanceMonitor {
        &self.monitor
    }

    /// Record the start of a displayed frame for fps tracking
    pub fn begin_frame(&mut self) {
        performance::begin_frame(&mut self.monitor);
    }

    pub fn performance_status(&self) -> PerformanceStatus {
        self.monitor.check_performance(self.target_tick_rate)
    }

    /// Run exactly one pass: begin, apply rules, commit
    pub fn tick(&mut self) -> TickStats {
        let start = Instant::now();

        self.grid.begin_tick();
        let swaps = update_grid(&mut self.grid, &mut self.rng);
        self.grid.commit_tick();

        self.tick += 1;
        let duration = start.elapsed();
        performance::record_tick(&mut self.monitor, duration, swaps);

        log::debug!("Tick {}: {} swaps in {:?}", self.tick, swaps, duration);

        TickStats {
            tick: self.tick,
            swaps,
            duration,
        }
    }

    /// Stamp a random-material brush at simulation coordinates
    pub fn place(&mut self, x: f32, y: f32) -> usize {
        self.place_with(Brush::Random, x, y)
    }

    /// Stamp `brush` at simulation coordinates
    pub fn place_with(&mut self, brush: Brush, x: f32, y: f32) -> usize {
        placement::place(&mut self.grid, &mut self.rng, brush, x, y)
    }

    /// Whether a tick from the current state would perform no swaps
    ///
    /// Runs on copies, so neither the grid nor the random stream advance.
    pub fn is_settled(&self) -> bool {
        let mut grid = self.grid.clone();
        let mut rng = self.rng.clone();
        grid.begin_tick();
        let swaps = update_grid(&mut grid, &mut rng);
        grid.commit_tick();
        swaps == 0
    }
}
