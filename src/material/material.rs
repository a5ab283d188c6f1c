use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered material
///
/// Declaration order matches the registry table order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialId {
    #[default]
    Air = 0,
    Water = 1,
    Smoke = 2,
    Sand = 3,
}

impl MaterialId {
    /// Number of registered materials
    pub const COUNT: usize = 4;

    /// Every material id, in table order
    pub const ALL: [MaterialId; Self::COUNT] = [
        MaterialId::Air,
        MaterialId::Water,
        MaterialId::Smoke,
        MaterialId::Sand,
    ];

    /// Index into the registry table
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialId::Air => write!(f, "Air"),
            MaterialId::Water => write!(f, "Water"),
            MaterialId::Smoke => write!(f, "Smoke"),
            MaterialId::Sand => write!(f, "Sand"),
        }
    }
}

/// Coarse material category selecting the movement rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rises through denser cells, spreads with viscosity jitter
    Gas,
    /// Sinks, slides diagonally, spreads sideways with viscosity jitter
    Liquid,
    /// Sinks and slides diagonally only
    Solid,
}

/// RGBA8 display color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Immutable material definition, copied by value into grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    /// Relative weight; heavier cells end up below lighter ones
    pub density: f32,
    /// Scales random lateral displacement for gases and liquids
    pub viscosity: f32,
    pub phase: Phase,
    pub color: Color,
}

impl Material {
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Single character used for text dumps of the grid
    pub fn glyph(&self) -> char {
        match self.id {
            MaterialId::Air => ' ',
            MaterialId::Water => '~',
            MaterialId::Smoke => '.',
            MaterialId::Sand => '#',
        }
    }

    pub fn is_gas(&self) -> bool {
        self.phase == Phase::Gas
    }

    pub fn is_liquid(&self) -> bool {
        self.phase == Phase::Liquid
    }

    pub fn is_solid(&self) -> bool {
        self.phase == Phase::Solid
    }
}
