//! Double-buffered cell grid
//!
//! `live` is the state seen by placement and rendering. `scratch` is the
//! working copy the tick engine mutates. Outside a tick both buffers are
//! identical.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::material::{Material, MaterialId};

/// Fixed-size 2D grid of material cells, `y = 0` is the top row
#[derive(Debug, Clone)]
pub struct Grid {
    width: u32,
    height: u32,
    live: Vec<Material>,
    scratch: Vec<Material>,
    tick_in_progress: bool,
}

impl Grid {
    /// Allocate a grid filled with `background`
    pub fn new(width: u32, height: u32, background: Material) -> EngineResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(EngineError::InvalidGridDimensions { width, height });
        }

        let size = width as usize * height as usize;
        log::debug!("Allocating {}x{} grid ({} cells)", width, height, size);

        Ok(Self {
            width,
            height,
            live: vec![background; size],
            scratch: vec![background; size],
            tick_in_progress: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_tick_in_progress(&self) -> bool {
        self.tick_in_progress
    }

    /// Whether `(x, y)` lies inside `[0, W) x [0, H)`
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Fill every cell of both buffers with `material`
    pub fn reset_to(&mut self, material: Material) {
        assert!(!self.tick_in_progress, "reset_to called during a tick");
        self.live.fill(material);
        self.scratch.fill(material);
    }

    /// Start a tick: scratch becomes a copy of live
    pub fn begin_tick(&mut self) {
        assert!(!self.tick_in_progress, "begin_tick called twice");
        self.scratch.copy_from_slice(&self.live);
        self.tick_in_progress = true;
    }

    /// Finish a tick: live becomes a copy of scratch
    pub fn commit_tick(&mut self) {
        assert!(self.tick_in_progress, "commit_tick called without begin_tick");
        self.live.copy_from_slice(&self.scratch);
        self.tick_in_progress = false;
    }

    /// Read a scratch cell. Coordinates must be in bounds.
    #[inline]
    pub fn scratch(&self, x: u32, y: u32) -> Material {
        debug_assert!(x < self.width && y < self.height);
        self.scratch[self.index(x, y)]
    }

    /// Mutable access to a scratch cell. Coordinates must be in bounds.
    #[inline]
    pub fn scratch_mut(&mut self, x: u32, y: u32) -> &mut Material {
        debug_assert!(x < self.width && y < self.height);
        let index = self.index(x, y);
        &mut self.scratch[index]
    }

    /// Exchange two scratch cells. Both coordinates must be in bounds.
    #[inline]
    pub fn swap_scratch(&mut self, a: (u32, u32), b: (u32, u32)) {
        debug_assert!(self.tick_in_progress);
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.scratch.swap(ia, ib);
    }

    /// Read a live cell, `None` when out of bounds
    pub fn live(&self, x: i32, y: i32) -> Option<Material> {
        if self.contains(x, y) {
            Some(self.live[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Write a live cell. Out-of-bounds coordinates are ignored.
    ///
    /// Returns whether the cell was written.
    pub fn set_live(&mut self, x: i32, y: i32, material: Material) -> bool {
        assert!(!self.tick_in_progress, "set_live called during a tick");
        if !self.contains(x, y) {
            return false;
        }
        let index = self.index(x as u32, y as u32);
        self.live[index] = material;
        // Keep scratch mirroring live between ticks
        self.scratch[index] = material;
        true
    }

    /// Iterate live cells as `(x, y, material)` in row-major order
    pub fn iter_live(&self) -> impl Iterator<Item = (u32, u32, &Material)> + '_ {
        let width = self.width;
        self.live
            .iter()
            .enumerate()
            .map(move |(i, m)| ((i as u32) % width, (i as u32) / width, m))
    }

    /// One row of the live buffer
    ///
    /// Panics if `y` is not below the grid height.
    pub fn live_row(&self, y: u32) -> &[Material] {
        debug_assert!(y < self.height, "row {} out of range for height {}", y, self.height);
        let start = self.index(0, y);
        &self.live[start..start + self.width as usize]
    }

    /// Count live cells per material id
    pub fn tally(&self) -> HashMap<MaterialId, usize> {
        let mut counts = HashMap::new();
        for material in &self.live {
            *counts.entry(material.id).or_insert(0) += 1;
        }
        counts
    }

    /// Material ids of the live buffer in row-major order
    pub fn live_ids(&self) -> Vec<MaterialId> {
        self.live.iter().map(|m| m.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::lookup;

    fn air_grid(width: u32, height: u32) -> Grid {
        Grid::new(width, height, lookup(MaterialId::Air)).expect("valid grid")
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let result = Grid::new(0, 10, lookup(MaterialId::Air));
        assert!(matches!(
            result,
            Err(EngineError::InvalidGridDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_new_grid_is_background() {
        let grid = air_grid(4, 3);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.tally().get(&MaterialId::Air), Some(&12));
    }

    #[test]
    fn test_set_live_clips() {
        let mut grid = air_grid(4, 3);
        let sand = lookup(MaterialId::Sand);

        assert!(!grid.set_live(-1, 0, sand));
        assert!(!grid.set_live(0, -1, sand));
        assert!(!grid.set_live(4, 0, sand));
        assert!(!grid.set_live(0, 3, sand));
        assert!(grid.set_live(3, 2, sand));

        assert_eq!(grid.tally().get(&MaterialId::Sand), Some(&1));
        assert_eq!(grid.live(3, 2).map(|m| m.id), Some(MaterialId::Sand));
        assert_eq!(grid.live(4, 2), None);
    }

    #[test]
    fn test_tick_buffers_round_trip() {
        let mut grid = air_grid(2, 2);
        grid.set_live(0, 0, lookup(MaterialId::Water));

        grid.begin_tick();
        assert_eq!(grid.scratch(0, 0).id, MaterialId::Water);
        grid.swap_scratch((0, 0), (1, 1));
        // live is untouched until commit
        assert_eq!(grid.live(0, 0).map(|m| m.id), Some(MaterialId::Water));
        grid.commit_tick();

        assert_eq!(grid.live(0, 0).map(|m| m.id), Some(MaterialId::Air));
        assert_eq!(grid.live(1, 1).map(|m| m.id), Some(MaterialId::Water));
    }

    #[test]
    #[should_panic(expected = "set_live called during a tick")]
    fn test_set_live_during_tick_panics() {
        let mut grid = air_grid(2, 2);
        grid.begin_tick();
        grid.set_live(0, 0, lookup(MaterialId::Sand));
    }

    #[test]
    #[should_panic(expected = "commit_tick called without begin_tick")]
    fn test_commit_without_begin_panics() {
        let mut grid = air_grid(2, 2);
        grid.commit_tick();
    }

    #[test]
    fn test_iter_live_coordinates() {
        let mut grid = air_grid(3, 2);
        grid.set_live(2, 1, lookup(MaterialId::Smoke));
        let found: Vec<(u32, u32)> = grid
            .iter_live()
            .filter(|(_, _, m)| m.id == MaterialId::Smoke)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(found, vec![(2, 1)]);
        assert_eq!(grid.live_row(1)[2].id, MaterialId::Smoke);
    }

    #[test]
    fn test_live_row_bounds() {
        let mut grid = air_grid(4, 3);
        grid.set_live(1, 2, lookup(MaterialId::Sand));
        let last = grid.live_row(2);
        assert_eq!(last.len(), 4);
        assert_eq!(last[1].id, MaterialId::Sand);
        assert!(grid.live_row(0).iter().all(|m| m.id == MaterialId::Air));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_live_row_past_height_panics() {
        let grid = air_grid(4, 3);
        grid.live_row(3);
    }

    #[test]
    fn test_reset_to() {
        let mut grid = air_grid(3, 3);
        grid.reset_to(lookup(MaterialId::Water));
        assert_eq!(grid.tally().get(&MaterialId::Water), Some(&9));
    }
}
