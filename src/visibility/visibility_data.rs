//! Visibility Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in visibility_operations.rs

use crate::grid::GridShape;
use bit_vec::BitVec;

/// One bit per grid cell: could the viewer see this cell's surface
///
/// Indexed with `grid::voxel_index`. A set bit on an empty cell draws
/// nothing but lets visibility pass through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMask {
    pub shape: GridShape,
    pub bits: BitVec,
}
