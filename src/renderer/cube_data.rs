//! Cube Renderer Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in cube_operations.rs

use crate::grid::NeighborFlags;
use glam::DVec2;

/// The three cube faces the fixed viewpoint can see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Faces -y, drawn darkest-but-one
    Right,
    /// Faces -x, drawn darkest
    Left,
    /// Faces +z, drawn lightest
    Top,
}

/// Which faces of one cube get drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceSet {
    pub right: bool,
    pub left: bool,
    pub top: bool,
}

/// The nine outline segments of a cube, named by their outline points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeEdge {
    P5P6,
    P6P7,
    P2P5,
    P1P4,
    P2P1,
    P4P7,
    P3P4,
    P6P3,
    P2P3,
}

/// Everything needed to draw one voxel, computed ahead of drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeJob {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    /// Screen origin from `projection::voxel_origin`
    pub origin: DVec2,
    pub flags: NeighborFlags,
    /// Height shade multiplier for the face colors
    pub shade: f64,
}

/// What one `draw_cube` call put on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CubeStats {
    pub faces: usize,
    pub edges: usize,
}
