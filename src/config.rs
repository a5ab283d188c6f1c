//! Startup configuration
//!
//! All values are fixed once the simulation starts. Missing keys fall back
//! to the defaults in `constants`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{display, grid, physics, timing};
use crate::error::{invalid_config, EngineError, EngineResult, ErrorContext};
use crate::material::MaterialId;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Logical grid width in cells
    pub grid_width: u32,
    /// Logical grid height in cells
    pub grid_height: u32,
    /// Display width in device pixels
    pub display_width: u32,
    /// Display height in device pixels
    pub display_height: u32,
    /// Reserved; the cell rules do not use it
    pub gravity: f32,
    /// Target ticks (frames) per second
    pub tick_rate: u32,
    /// Material every cell starts as
    pub background: MaterialId,
    /// Seed for the simulation RNG, entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Frames run by the headless driver
    pub frames: u64,
    /// Where the headless driver writes its final frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: grid::DEFAULT_WIDTH,
            grid_height: grid::DEFAULT_HEIGHT,
            display_width: display::DEFAULT_WIDTH,
            display_height: display::DEFAULT_HEIGHT,
            gravity: physics::GRAVITY,
            tick_rate: timing::TARGET_TICK_RATE,
            background: MaterialId::Air,
            seed: None,
            frames: timing::DEFAULT_FRAMES,
            snapshot_path: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(raw: &str) -> EngineResult<Self> {
        let config: SimConfig = toml::from_str(raw).map_err(|e| EngineError::ConfigParse {
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).config_context(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string(self).map_err(|e| EngineError::ConfigParse {
            error: e.to_string(),
        })
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(EngineError::InvalidGridDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(invalid_config("tick_rate", "must be positive"));
        }
        if self.display_width < self.grid_width {
            return Err(invalid_config(
                "display_width",
                format!(
                    "{} is smaller than grid_width {}",
                    self.display_width, self.grid_width
                ),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(invalid_config("gravity", "must be finite"));
        }
        Ok(())
    }

    /// Device pixels per grid cell (display width / grid width)
    pub fn scale_factor(&self) -> f32 {
        self.display_width as f32 / self.grid_width as f32
    }

    /// Integer scale used when rasterizing cells
    pub fn cell_pixels(&self) -> u32 {
        (self.display_width / self.grid_width).max(1)
    }
}
