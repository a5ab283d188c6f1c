// Sandfall Constants - SINGLE SOURCE OF TRUTH
//
// Every compile-time constant used by the simulation lives here.
// Config defaults are derived from these values.

/// Grid constants (simulation space)
pub mod grid {
    /// Default logical grid size in cells
    pub const DEFAULT_WIDTH: u32 = 160;
    pub const DEFAULT_HEIGHT: u32 = 90;

    /// Side length of the placement brush (3x3 stamp)
    pub const BRUSH_SIZE: i32 = 3;
    pub const BRUSH_RADIUS: i32 = BRUSH_SIZE / 2;
}

/// Display constants (device pixel space)
pub mod display {
    pub const DEFAULT_WIDTH: u32 = 1280;
    pub const DEFAULT_HEIGHT: u32 = 720;

    /// Background color, RGBA
    pub const BACKGROUND: [u8; 4] = [0x21, 0x21, 0x21, 0xff];
}

/// Physics constants
pub mod physics {
    /// Gravitational constant. Reserved: the cell rules are density-ordered
    /// and do not integrate acceleration.
    pub const GRAVITY: f32 = 9.81;
}

/// Timing constants
pub mod timing {
    /// Target simulation ticks per second (one tick per displayed frame)
    pub const TARGET_TICK_RATE: u32 = 60;

    /// Number of tick samples kept by the performance monitor (2s at 60 ticks/s)
    pub const PERFORMANCE_HISTORY: usize = 120;

    /// Default number of frames run by the headless driver
    pub const DEFAULT_FRAMES: u64 = 600;
}
