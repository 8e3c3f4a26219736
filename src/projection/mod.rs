//! Projection Module - isometric mapping from voxel space to screen space

pub mod projection_data;
pub mod projection_operations;

pub use projection_data::{CubeOutline, DiamondSize, ImageSize, WorldBox};
pub use projection_operations::{
    cube_outline, half_height, half_width, image_size, voxel_origin, world_box,
    world_box_back_segments, world_box_front_segments,
};
