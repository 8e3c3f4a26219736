//! Grid Module - Data-Oriented Programming (DOP) style
//!
//! - grid_data.rs / neighbor_data.rs: Pure data structures
//! - grid_operations.rs / neighbor_operations.rs: Pure functions over that data

pub mod grid_data;
pub mod grid_operations;
pub mod neighbor_data;
pub mod neighbor_operations;

pub use grid_data::{GridShape, ObjectId, VoxelGrid};
pub use neighbor_data::NeighborFlags;

pub use grid_operations::{
    cell_count, create_grid, create_shape, fill, get, grid_from_fn, is_in_bounds,
    occupied_count, offset_position, set, validate_grid, voxel_index,
};
pub use neighbor_operations::{classify_neighbors, is_neighbour, is_occupied_at};
