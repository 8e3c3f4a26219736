//! Fixed constants shared across the renderer

use static_assertions::const_assert;

/// Diamond footprint of one voxel in screen space
pub mod projection {
    /// Width of a voxel diamond in pixels
    pub const DIAMOND_WIDTH: u32 = 28;
    /// Height of a voxel diamond in pixels
    pub const DIAMOND_HEIGHT: u32 = 14;
}

/// Output image layout
pub mod canvas {
    /// Blank border on every side of the rendered model
    pub const MARGIN: u32 = 40;
    pub const LINE_WIDTH: f64 = 1.0;
}

/// Base face colors before height shading, as linear RGB in [0, 1]
pub mod palette {
    pub const TOP: [f64; 3] = [1.0, 0.5, 0.5];
    pub const RIGHT: [f64; 3] = [1.0, 0.0, 0.0];
    pub const LEFT: [f64; 3] = [0.6, 0.0, 0.0];

    /// Shade at z = 0; rises linearly to 1.0 at z = Z_MAX
    pub const SHADE_FLOOR: f64 = 0.4;
    pub const SHADE_RANGE: f64 = 0.6;
}

// Half-diamond values must stay exact
const_assert!(projection::DIAMOND_WIDTH % 2 == 0);
const_assert!(projection::DIAMOND_HEIGHT % 2 == 0);
const_assert!(projection::DIAMOND_HEIGHT > 0);
