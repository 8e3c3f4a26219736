//! Neighbor Classification Operations - Pure DOP Functions
//!
//! Out-of-bounds offsets are not errors: a cell outside the grid is simply
//! "no neighbor there".

use super::grid_data::{ObjectId, VoxelGrid};
use super::grid_operations::{id_at, offset_position};
use super::neighbor_data::*;
use glam::IVec3;

/// True iff the offset cell is in bounds and holds the same id as (x, y, z)
///
/// Callers only ask this for occupied voxels, so a match always means "same
/// non-empty object".
pub fn is_neighbour(grid: &VoxelGrid, x: usize, y: usize, z: usize, offset: IVec3) -> bool {
    match offset_position(grid.shape, x, y, z, offset) {
        Some((nx, ny, nz)) => id_at(grid, nx, ny, nz) == id_at(grid, x, y, z),
        None => false,
    }
}

/// True iff the offset cell is in bounds and holds any non-empty id
pub fn is_occupied_at(grid: &VoxelGrid, x: usize, y: usize, z: usize, offset: IVec3) -> bool {
    match offset_position(grid.shape, x, y, z, offset) {
        Some((nx, ny, nz)) => id_at(grid, nx, ny, nz) != ObjectId::EMPTY,
        None => false,
    }
}

/// Compute all eleven flags for one voxel
pub fn classify_neighbors(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> NeighborFlags {
    NeighborFlags {
        x_pos: is_neighbour(grid, x, y, z, X_POS),
        x_neg: is_neighbour(grid, x, y, z, X_NEG),
        y_pos: is_neighbour(grid, x, y, z, Y_POS),
        y_neg: is_neighbour(grid, x, y, z, Y_NEG),
        z_pos: is_neighbour(grid, x, y, z, Z_POS),
        z_neg: is_neighbour(grid, x, y, z, Z_NEG),

        x_pos_y_neg: is_occupied_at(grid, x, y, z, X_POS_Y_NEG),
        x_pos_z_pos: is_occupied_at(grid, x, y, z, X_POS_Z_POS),
        x_neg_z_neg: is_occupied_at(grid, x, y, z, X_NEG_Z_NEG),
        y_pos_z_pos: is_occupied_at(grid, x, y, z, Y_POS_Z_POS),
        y_neg_z_neg: is_occupied_at(grid, x, y, z, Y_NEG_Z_NEG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_data::GridShape;
    use crate::grid::grid_operations::{create_grid, fill, set};

    fn grid(x: usize, y: usize, z: usize) -> VoxelGrid {
        create_grid(GridShape { x, y, z }).expect("valid shape")
    }

    #[test]
    fn test_lone_voxel_has_no_neighbors() {
        let mut g = grid(1, 1, 1);
        set(&mut g, 0, 0, 0, ObjectId(1)).expect("in bounds");
        assert_eq!(classify_neighbors(&g, 0, 0, 0), NeighborFlags::default());
    }

    #[test]
    fn test_axis_neighbors_require_same_id() {
        let mut g = grid(3, 1, 1);
        set(&mut g, 0, 0, 0, ObjectId(1)).expect("in bounds");
        set(&mut g, 1, 0, 0, ObjectId(1)).expect("in bounds");
        set(&mut g, 2, 0, 0, ObjectId(2)).expect("in bounds");

        let flags = classify_neighbors(&g, 1, 0, 0);
        assert!(flags.x_neg);
        assert!(!flags.x_pos);
    }

    #[test]
    fn test_diagonal_flags_track_occupancy_not_identity() {
        let mut g = grid(2, 2, 2);
        set(&mut g, 0, 1, 0, ObjectId(1)).expect("in bounds");
        set(&mut g, 1, 0, 0, ObjectId(9)).expect("in bounds");

        let flags = classify_neighbors(&g, 0, 1, 0);
        assert!(flags.x_pos_y_neg);
        assert!(!flags.x_pos);
        assert!(!flags.y_neg);
    }

    #[test]
    fn test_out_of_bounds_offsets_are_false() {
        let mut g = grid(2, 2, 2);
        fill(&mut g, 0..=1, 0..=1, 0..=1, ObjectId(1)).expect("in bounds");

        let corner = classify_neighbors(&g, 0, 0, 0);
        assert!(corner.x_pos && corner.y_pos && corner.z_pos);
        assert!(!corner.x_neg && !corner.y_neg && !corner.z_neg);
        assert!(!corner.x_pos_y_neg);
        assert!(!corner.x_neg_z_neg);
        assert!(!corner.y_neg_z_neg);
        assert!(corner.x_pos_z_pos);
        assert!(corner.y_pos_z_pos);
    }
}
