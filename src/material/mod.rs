//! Material definitions and the static material registry
//!
//! Materials are plain values. Grid cells hold copies, never references,
//! so the registry can stay immutable for the lifetime of the process.

mod material;
mod registry;

pub use material::{Color, Material, MaterialId, Phase};
pub use registry::{all, lookup, random_material};
