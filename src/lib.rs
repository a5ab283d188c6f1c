//! Falling-sand cellular automaton
//!
//! A fixed 2D grid of material cells. Every tick resolves density-gated swaps
//! that approximate gravity, buoyancy and lateral spreading for gases,
//! liquids and solids.

pub mod config;
pub mod constants;
pub mod error;
pub mod frame_loop;
pub mod grid;
pub mod input;
pub mod material;
pub mod placement;
pub mod renderer;
pub mod simulation;

pub use config::SimConfig;
pub use error::{EngineError, EngineResult};
pub use frame_loop::{FrameLoop, FrameReport, TickClock};
pub use grid::Grid;
pub use input::PointerState;
pub use material::{lookup, random_material, Color, Material, MaterialId, Phase};
pub use placement::{place, Brush};
pub use simulation::{TickEngine, TickStats};
