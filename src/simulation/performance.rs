use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::constants::timing::PERFORMANCE_HISTORY;

/// Rolling performance metrics for the tick loop
#[derive(Debug, Clone)]
pub struct SimPerformanceMetrics {
    /// Average time spent inside `tick()` in milliseconds
    pub tick_time_ms: f32,

    /// Average wall time between frames in milliseconds
    pub frame_time_ms: f32,

    /// Frames per second derived from `frame_time_ms`
    pub fps: f32,

    /// Average swaps per tick
    pub swaps_per_tick: f32,

    /// Grid size in cells
    pub cell_count: usize,
}

impl Default for SimPerformanceMetrics {
    fn default() -> Self {
        Self {
            tick_time_ms: 0.0,
            frame_time_ms: 16.67,
            fps: 60.0,
            swaps_per_tick: 0.0,
            cell_count: 0,
        }
    }
}

/// Performance status against the target tick rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceStatus {
    /// Ticks use at most half of the frame budget
    Good,
    /// Ticks fit in the frame budget
    Acceptable,
    /// Ticks overrun the frame budget
    Poor,
}

/// Performance monitor for the tick engine
#[derive(Debug, Clone)]
pub struct SimPerformanceMonitor {
    tick_times: VecDeque<Duration>,
    frame_times: VecDeque<Duration>,
    swap_counts: VecDeque<u32>,
    history_size: usize,
    last_frame: Instant,
    current_metrics: SimPerformanceMetrics,
}

impl SimPerformanceMonitor {
    pub fn new() -> Self {
        Self::with_history(PERFORMANCE_HISTORY)
    }

    pub fn with_history(history_size: usize) -> Self {
        let history_size = history_size.max(1);
        Self {
            tick_times: VecDeque::with_capacity(history_size),
            frame_times: VecDeque::with_capacity(history_size),
            swap_counts: VecDeque::with_capacity(history_size),
            history_size,
            last_frame: Instant::now(),
            current_metrics: SimPerformanceMetrics::default(),
        }
    }

    pub fn get_metrics(&self) -> &SimPerformanceMetrics {
        &self.current_metrics
    }

    /// Classify the average tick time against the budget of one frame
    pub fn check_performance(&self, target_tick_rate: u32) -> PerformanceStatus {
        let budget_ms = 1000.0 / target_tick_rate.max(1) as f32;
        let tick_ms = self.current_metrics.tick_time_ms;

        if tick_ms <= budget_ms * 0.5 {
            PerformanceStatus::Good
        } else if tick_ms <= budget_ms {
            PerformanceStatus::Acceptable
        } else {
            PerformanceStatus::Poor
        }
    }
}

impl Default for SimPerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded<T>(history: &mut VecDeque<T>, value: T, limit: usize) {
    history.push_back(value);
    if history.len() > limit {
        history.pop_front();
    }
}

/// Start frame timing (DOP)
pub fn begin_frame(monitor: &mut SimPerformanceMonitor) {
    let now = Instant::now();
    let frame_time = now - monitor.last_frame;
    monitor.last_frame = now;

    let limit = monitor.history_size;
    push_bounded(&mut monitor.frame_times, frame_time, limit);
    update_metrics(monitor);
}

/// Record one completed tick (DOP)
pub fn record_tick(monitor: &mut SimPerformanceMonitor, duration: Duration, swaps: u32) {
    let limit = monitor.history_size;
    push_bounded(&mut monitor.tick_times, duration, limit);
    push_bounded(&mut monitor.swap_counts, swaps, limit);
    update_metrics(monitor);
}

/// Update grid size (DOP)
pub fn set_cell_count(monitor: &mut SimPerformanceMonitor, cells: usize) {
    monitor.current_metrics.cell_count = cells;
}

fn average(durations: &VecDeque<Duration>) -> Option<f32> {
    if durations.is_empty() {
        return None;
    }
    let total: Duration = durations.iter().sum();
    Some((total / durations.len() as u32).as_secs_f32() * 1000.0)
}

fn update_metrics(monitor: &mut SimPerformanceMonitor) {
    if let Some(ms) = average(&monitor.tick_times) {
        monitor.current_metrics.tick_time_ms = ms;
    }

    if let Some(ms) = average(&monitor.frame_times) {
        monitor.current_metrics.frame_time_ms = ms;
        if ms > 0.0 {
            monitor.current_metrics.fps = 1000.0 / ms;
        }
    }

    if !monitor.swap_counts.is_empty() {
        let total: u64 = monitor.swap_counts.iter().map(|&s| s as u64).sum();
        monitor.current_metrics.swaps_per_tick = total as f32 / monitor.swap_counts.len() as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_averages() {
        let mut monitor = SimPerformanceMonitor::with_history(4);
        record_tick(&mut monitor, Duration::from_millis(2), 10);
        record_tick(&mut monitor, Duration::from_millis(4), 30);

        let metrics = monitor.get_metrics();
        assert!((metrics.tick_time_ms - 3.0).abs() < 0.01);
        assert!((metrics.swaps_per_tick - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut monitor = SimPerformanceMonitor::with_history(2);
        record_tick(&mut monitor, Duration::from_millis(100), 0);
        record_tick(&mut monitor, Duration::from_millis(1), 0);
        record_tick(&mut monitor, Duration::from_millis(1), 0);

        assert!((monitor.get_metrics().tick_time_ms - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_performance_status() {
        let mut monitor = SimPerformanceMonitor::with_history(1);

        record_tick(&mut monitor, Duration::from_millis(1), 0);
        assert_eq!(monitor.check_performance(60), PerformanceStatus::Good);

        record_tick(&mut monitor, Duration::from_millis(12), 0);
        assert_eq!(monitor.check_performance(60), PerformanceStatus::Acceptable);

        record_tick(&mut monitor, Duration::from_millis(40), 0);
        assert_eq!(monitor.check_performance(60), PerformanceStatus::Poor);
    }

    #[test]
    fn test_begin_frame_updates_fps() {
        let mut monitor = SimPerformanceMonitor::new();
        std::thread::sleep(Duration::from_millis(5));
        begin_frame(&mut monitor);
        set_cell_count(&mut monitor, 14_400);

        let metrics = monitor.get_metrics();
        assert!(metrics.frame_time_ms >= 5.0);
        assert!(metrics.fps > 0.0);
        assert_eq!(metrics.cell_count, 14_400);
    }
}
