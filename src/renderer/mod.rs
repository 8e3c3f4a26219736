//! Renderer Module - turns a voxel grid into canvas draw calls
//!
//! - cube_data.rs / cube_operations.rs: one voxel, faces and silhouette edges
//! - scene_data.rs / scene_operations.rs: whole-grid traversal, floor grid,
//!   world box and raster output

pub mod cube_data;
pub mod cube_operations;
pub mod scene_data;
pub mod scene_operations;

pub use cube_data::{CubeEdge, CubeJob, CubeStats, Face, FaceSet};
pub use cube_operations::{
    draw_cube, draw_flat_tile, edge_points, edge_visible, face_color, face_edges, face_points,
    shade_ratio, visible_face_edges, visible_faces,
};
pub use scene_data::{BoxHalf, RenderStats};
pub use scene_operations::{
    draw_floor_grid, draw_model, draw_model_at, draw_world_box, new_canvas, plan_cubes,
    render_image, render_png,
};
