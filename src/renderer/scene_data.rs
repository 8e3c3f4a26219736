//! Scene Renderer Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in scene_operations.rs

/// Which half of the world box wireframe to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxHalf {
    /// Edges behind the model, drawn before any cube
    Back,
    /// Edges in front of the model, drawn after every cube
    Front,
}

/// Summary of one `draw_model` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub cubes: usize,
    pub faces: usize,
    pub edges: usize,
    pub floor_tiles: usize,
    pub box_segments: usize,
}
