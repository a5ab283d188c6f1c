//! Cellular falling-sand simulation
//!
//! One tick copies the live grid into scratch, visits every cell bottom row
//! first, applies the phase rules as density-gated swaps on scratch, then
//! commits scratch back to live.

pub mod engine;
pub mod performance;
pub mod rules;

pub use engine::{TickEngine, TickStats};
pub use performance::{PerformanceStatus, SimPerformanceMetrics, SimPerformanceMonitor};
pub use rules::{update_cell, update_grid};
