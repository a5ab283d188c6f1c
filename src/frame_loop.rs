//! Per-frame sequencing
//!
//! Each frame applies pending input to the live grid, runs exactly one tick,
//! then hands the live grid to the renderer. Nothing overlaps, so the grid
//! needs no locking.

use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::error::EngineResult;
use crate::input::PointerState;
use crate::simulation::{PerformanceStatus, TickEngine, TickStats};

/// Result of one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameReport {
    pub stats: TickStats,
    /// Cells written by the brush this frame
    pub painted: usize,
}

/// Fixed-rate frame pacing
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    next_deadline: Instant,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        let interval = Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64);
        Self {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep until the next frame is due. Never sleeps when behind schedule,
    /// and does not try to catch up on missed frames.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.interval;
        } else {
            self.next_deadline = now + self.interval;
        }
    }
}

/// Drives the engine from pointer input, one tick per frame
pub struct FrameLoop {
    engine: TickEngine,
    pointer: PointerState,
    clock: TickClock,
    frame: u64,
    stats_every: u64,
}

impl FrameLoop {
    pub fn new(config: &SimConfig) -> EngineResult<Self> {
        let engine = TickEngine::new(config)?;
        Ok(Self {
            engine,
            pointer: PointerState::new(config.scale_factor()),
            clock: TickClock::new(config.tick_rate),
            frame: 0,
            stats_every: config.tick_rate as u64,
        })
    }

    pub fn engine(&self) -> &TickEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TickEngine {
        &mut self.engine
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Input, then one tick. The caller renders from `engine().grid()` afterwards.
    pub fn run_frame(&mut self) -> FrameReport {
        self.engine.begin_frame();

        let mut painted = 0;
        if self.pointer.wants_to_paint() {
            if let Some(pos) = self.pointer.simulation_position() {
                painted = self.engine.place_with(self.pointer.brush(), pos.x, pos.y);
            }
        }

        let stats = self.engine.tick();
        self.frame += 1;

        if self.stats_every > 0 && self.frame % self.stats_every == 0 {
            self.log_stats();
        }

        FrameReport { stats, painted }
    }

    /// Run a frame and then wait for the next frame slot
    pub fn run_paced_frame(&mut self) -> FrameReport {
        let report = self.run_frame();
        self.clock.wait();
        report
    }

    fn log_stats(&self) {
        let metrics = self.engine.performance().get_metrics();
        log::info!(
            "Frame {}: {:.1} fps, tick {:.3} ms, {:.0} swaps/tick",
            self.frame,
            metrics.fps,
            metrics.tick_time_ms,
            metrics.swaps_per_tick
        );
        if self.engine.performance_status() == PerformanceStatus::Poor {
            log::warn!("Tick time exceeds the frame budget");
        }
    }
}
