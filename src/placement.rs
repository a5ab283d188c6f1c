//! Brush stamping between ticks
//!
//! Writes go to the live buffer through `Grid::set_live`, which drops
//! anything outside the grid.

use glam::IVec2;
use rand::Rng;

use crate::constants::grid::BRUSH_RADIUS;
use crate::grid::Grid;
use crate::material::{lookup, random_material, MaterialId};

/// What a stamp writes into each cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brush {
    /// Each cell independently gets a uniformly random material
    #[default]
    Random,
    /// Every cell gets the same material
    Fixed(MaterialId),
}

impl Brush {
    pub fn label(&self) -> String {
        match self {
            Brush::Random => "Random".to_string(),
            Brush::Fixed(id) => id.to_string(),
        }
    }
}

/// Truncate simulation-space coordinates to the brush center cell
pub fn brush_center(x: f32, y: f32) -> IVec2 {
    IVec2::new(x as i32, y as i32)
}

/// Stamp the 3x3 neighborhood around `(x, y)`
///
/// Returns the number of cells that landed inside the grid.
pub fn place<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, brush: Brush, x: f32, y: f32) -> usize {
    let center = brush_center(x, y);
    let mut written = 0;

    for dy in -BRUSH_RADIUS..=BRUSH_RADIUS {
        for dx in -BRUSH_RADIUS..=BRUSH_RADIUS {
            let material = match brush {
                Brush::Random => random_material(rng),
                Brush::Fixed(id) => lookup(id),
            };
            // Saturating keeps huge centers out of bounds instead of wrapping
            let cell = IVec2::new(center.x.saturating_add(dx), center.y.saturating_add(dy));
            if grid.set_live(cell.x, cell.y, material) {
                written += 1;
            }
        }
    }

    log::trace!("Placed {} brush at {:?} ({} cells)", brush.label(), center, written);
    written
}
