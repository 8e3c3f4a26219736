//! Voxel Grid Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in grid_operations.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the object a voxel belongs to
///
/// Only the distinction between zero and non-zero carries meaning; equal
/// non-zero ids are merged into one solid when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const EMPTY: ObjectId = ObjectId(0);
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ObjectId::EMPTY => write!(f, "Empty"),
            _ => write!(f, "Object({})", self.0),
        }
    }
}

impl From<u32> for ObjectId {
    fn from(value: u32) -> Self {
        ObjectId(value)
    }
}

/// Grid extents along each axis (X_MAX, Y_MAX, Z_MAX)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl From<GridShape> for (usize, usize, usize) {
    fn from(shape: GridShape) -> Self {
        (shape.x, shape.y, shape.z)
    }
}

/// Dense voxel grid stored as one contiguous buffer
///
/// Cell (x, y, z) lives at `x * Y * Z + y * Z + z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    pub shape: GridShape,
    pub ids: Vec<ObjectId>,
}
