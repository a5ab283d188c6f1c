use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::{EngineResult, ErrorContext};
use crate::grid::Grid;
use crate::material::Color;

/// Rasterize the live buffer, one `scale x scale` square per cell
pub fn render_frame(grid: &Grid, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let mut image = RgbaImage::new(grid.width() * scale, grid.height() * scale);

    for (x, y, material) in grid.iter_live() {
        let pixel = Rgba(material.color.to_array());
        for py in 0..scale {
            for px in 0..scale {
                image.put_pixel(x * scale + px, y * scale + py, pixel);
            }
        }
    }

    image
}

/// Rasterize the live buffer at one pixel per cell
pub fn render_cells(grid: &Grid) -> RgbaImage {
    let mut bytes: Vec<u8> = Vec::with_capacity(grid.cell_count() * 4);
    for y in 0..grid.height() {
        let colors: Vec<Color> = grid.live_row(y).iter().map(|m| m.color).collect();
        bytes.extend_from_slice(bytemuck::cast_slice(colors.as_slice()));
    }

    // Length always matches width * height * 4
    RgbaImage::from_raw(grid.width(), grid.height(), bytes)
        .unwrap_or_else(|| RgbaImage::new(grid.width(), grid.height()))
}

/// Write a frame as PNG
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> EngineResult<()> {
    let path = path.as_ref();
    image.save(path).image_context(path)?;
    log::info!("Saved {}x{} frame to {:?}", image.width(), image.height(), path);
    Ok(())
}
