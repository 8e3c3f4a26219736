//! Visibility Module - which voxels the fixed viewpoint can see

pub mod visibility_data;
pub mod visibility_operations;

pub use visibility_data::VisibilityMask;
pub use visibility_operations::{
    compute_visibility, is_visible, propagate_visibility, seed_visibility,
    visible_occupied_count,
};
