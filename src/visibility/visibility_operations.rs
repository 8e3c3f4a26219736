//! Visibility Operations - Pure DOP Functions
//!
//! Occlusion for the single fixed viewpoint, which looks toward decreasing
//! x, decreasing y and increasing z. A sightline entering the grid through
//! one of the three near planes moves by (+1, +1, -1) per step, so a cell is
//! reachable only through the empty cell diagonally in front of it.

use super::visibility_data::VisibilityMask;
use crate::error::{IsoError, IsoResult};
use crate::grid::grid_operations::{cell_count, create_shape, id_at, validate_grid, voxel_index};
use crate::grid::{GridShape, ObjectId, VoxelGrid};
use bit_vec::BitVec;

/// Mark the three near boundary planes (z = Z-1, y = 0, x = 0) visible
pub fn seed_visibility(shape: GridShape) -> IsoResult<VisibilityMask> {
    let shape = create_shape(shape.x, shape.y, shape.z)?;
    let mut bits = BitVec::from_elem(cell_count(shape), false);

    for x in 0..shape.x {
        for y in 0..shape.y {
            bits.set(voxel_index(shape, x, y, shape.z - 1), true);
        }
    }

    for x in 0..shape.x {
        for z in 0..shape.z {
            bits.set(voxel_index(shape, x, 0, z), true);
        }
    }

    for y in 0..shape.y {
        for z in 0..shape.z {
            bits.set(voxel_index(shape, 0, y, z), true);
        }
    }

    Ok(VisibilityMask { shape, bits })
}

/// Push visibility through empty cells along the viewer's sightline
///
/// Sweeps x ascending, y ascending, z descending so every cell's only
/// predecessor (x-1, y-1, z+1) is final before the cell is read. Only ever
/// sets bits. The mask must come from `seed_visibility(grid.shape)`.
pub fn propagate_visibility(grid: &VoxelGrid, mask: &mut VisibilityMask) -> IsoResult<()> {
    validate_grid(grid)?;
    let shape = grid.shape;
    if mask.shape != shape || mask.bits.len() != cell_count(shape) {
        return Err(IsoError::ShapeMismatch {
            grid: shape.into(),
            mask: mask.shape.into(),
        });
    }

    for x in 0..shape.x {
        for y in 0..shape.y {
            for z in (0..shape.z).rev() {
                if !mask.bits[voxel_index(shape, x, y, z)] {
                    continue;
                }

                if id_at(grid, x, y, z) != ObjectId::EMPTY {
                    continue;
                }

                if x + 1 < shape.x && y + 1 < shape.y && z > 0 {
                    mask.bits.set(voxel_index(shape, x + 1, y + 1, z - 1), true);
                }
            }
        }
    }
    Ok(())
}

/// Full visibility analysis for one grid
pub fn compute_visibility(grid: &VoxelGrid) -> IsoResult<VisibilityMask> {
    let mut mask = seed_visibility(grid.shape)?;
    propagate_visibility(grid, &mut mask)?;
    log::trace!(
        "[compute_visibility] {} of {} cells visible",
        mask.bits.iter().filter(|b| *b).count(),
        mask.bits.len()
    );
    Ok(mask)
}

/// Check one cell; out-of-range coordinates are never visible
pub fn is_visible(mask: &VisibilityMask, x: usize, y: usize, z: usize) -> bool {
    let shape = mask.shape;
    if x >= shape.x || y >= shape.y || z >= shape.z {
        return false;
    }
    mask.bits
        .get(voxel_index(shape, x, y, z))
        .unwrap_or(false)
}

/// Number of occupied cells the renderer will actually consider
pub fn visible_occupied_count(grid: &VoxelGrid, mask: &VisibilityMask) -> usize {
    grid.ids
        .iter()
        .zip(mask.bits.iter())
        .filter(|(id, visible)| *visible && **id != ObjectId::EMPTY)
        .count()
}
