//! Neighbor Classification Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in neighbor_operations.rs

use glam::IVec3;

/// Same-object and occupancy flags around one occupied voxel
///
/// Axis flags are true when the adjacent cell holds the same id. Diagonal
/// flags are true when the diagonal cell is occupied at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborFlags {
    /// +x
    pub x_pos: bool,
    /// -x
    pub x_neg: bool,
    /// +y
    pub y_pos: bool,
    /// -y
    pub y_neg: bool,
    /// +z
    pub z_pos: bool,
    /// -z
    pub z_neg: bool,

    /// (+1, -1, 0)
    pub x_pos_y_neg: bool,
    /// (+1, 0, +1)
    pub x_pos_z_pos: bool,
    /// (-1, 0, -1)
    pub x_neg_z_neg: bool,
    /// (0, +1, +1)
    pub y_pos_z_pos: bool,
    /// (0, -1, -1)
    pub y_neg_z_neg: bool,
}

pub const X_POS: IVec3 = IVec3::new(1, 0, 0);
pub const X_NEG: IVec3 = IVec3::new(-1, 0, 0);
pub const Y_POS: IVec3 = IVec3::new(0, 1, 0);
pub const Y_NEG: IVec3 = IVec3::new(0, -1, 0);
pub const Z_POS: IVec3 = IVec3::new(0, 0, 1);
pub const Z_NEG: IVec3 = IVec3::new(0, 0, -1);

pub const X_POS_Y_NEG: IVec3 = IVec3::new(1, -1, 0);
pub const X_POS_Z_POS: IVec3 = IVec3::new(1, 0, 1);
pub const X_NEG_Z_NEG: IVec3 = IVec3::new(-1, 0, -1);
pub const Y_POS_Z_POS: IVec3 = IVec3::new(0, 1, 1);
pub const Y_NEG_Z_NEG: IVec3 = IVec3::new(0, -1, -1);
