//! Read-only views of the live grid for display
//!
//! Window, texture and shader handling belong to the host application.
//! This module only turns cell colors into pixels or text.

mod frame;

pub use frame::{render_cells, render_frame, save_png};

use crate::grid::Grid;

/// Text dump of the live grid, one line per row
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        out.extend(grid.live_row(y).iter().map(|m| m.glyph()));
        out.push('\n');
    }
    out
}
