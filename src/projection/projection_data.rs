//! Projection Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in projection_operations.rs

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Screen-space footprint of one voxel diamond, in pixels
///
/// Both values should be even so the half sizes stay integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondSize {
    pub width: u32,
    pub height: u32,
}

/// Key points of one cube, relative to the voxel's screen origin
///
/// ```text
///       p5
///   p2      p6
///       p3          DH
///   p1      p7
///       p4
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeOutline {
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
    pub p4: DVec2,
    pub p5: DVec2,
    pub p6: DVec2,
    pub p7: DVec2,
}

/// Wireframe envelope of the whole grid
///
/// ```text
///           p5
///   p2              p6
///        p3 p8           p3 front, p8 back
///   p1              p7
///           p4
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBox {
    pub p1: DVec2,
    pub p2: DVec2,
    pub p3: DVec2,
    pub p4: DVec2,
    pub p5: DVec2,
    pub p6: DVec2,
    pub p7: DVec2,
    pub p8: DVec2,
}

/// Pixel size of a rendered image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}
