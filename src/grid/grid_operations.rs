//! Voxel Grid Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! Every public accessor is bounds-checked and fails with
//! `IsoError::OutOfBounds` instead of clamping.

use super::grid_data::{GridShape, ObjectId, VoxelGrid};
use crate::error::{IsoError, IsoResult};
use glam::IVec3;
use std::ops::RangeInclusive;

/// Build a grid shape, rejecting zero-sized axes
pub fn create_shape(x: usize, y: usize, z: usize) -> IsoResult<GridShape> {
    if x == 0 || y == 0 || z == 0 {
        return Err(IsoError::InvalidShape {
            shape: (x, y, z),
            reason: "every dimension must be positive".to_string(),
        });
    }
    if x.checked_mul(y).and_then(|xy| xy.checked_mul(z)).is_none() {
        return Err(IsoError::InvalidShape {
            shape: (x, y, z),
            reason: "cell count overflows usize".to_string(),
        });
    }
    Ok(GridShape { x, y, z })
}

/// Re-check a grid that may not have come from `create_grid`
///
/// The shape must be valid and the buffer must hold exactly one id per cell.
pub fn validate_grid(grid: &VoxelGrid) -> IsoResult<()> {
    let shape = create_shape(grid.shape.x, grid.shape.y, grid.shape.z)?;
    let expected = cell_count(shape);
    if grid.ids.len() != expected {
        return Err(IsoError::InvalidShape {
            shape: shape.into(),
            reason: format!("expected {} cells, buffer holds {}", expected, grid.ids.len()),
        });
    }
    Ok(())
}

/// Total number of cells
pub fn cell_count(shape: GridShape) -> usize {
    shape.x * shape.y * shape.z
}

/// Create an empty grid (every cell `ObjectId::EMPTY`)
pub fn create_grid(shape: GridShape) -> IsoResult<VoxelGrid> {
    let shape = create_shape(shape.x, shape.y, shape.z)?;
    log::debug!(
        "[create_grid] {}x{}x{} grid ({} cells)",
        shape.x,
        shape.y,
        shape.z,
        cell_count(shape)
    );
    Ok(VoxelGrid {
        shape,
        ids: vec![ObjectId::EMPTY; cell_count(shape)],
    })
}

/// Create a grid whose cells are produced by `f(x, y, z)`
pub fn grid_from_fn<F>(shape: GridShape, mut f: F) -> IsoResult<VoxelGrid>
where
    F: FnMut(usize, usize, usize) -> ObjectId,
{
    let mut grid = create_grid(shape)?;
    for x in 0..shape.x {
        for y in 0..shape.y {
            for z in 0..shape.z {
                let index = voxel_index(shape, x, y, z);
                grid.ids[index] = f(x, y, z);
            }
        }
    }
    Ok(grid)
}

/// Calculate flat buffer index from 3D coordinates
///
/// Does not bounds-check; pair with `is_in_bounds`.
#[inline]
pub fn voxel_index(shape: GridShape, x: usize, y: usize, z: usize) -> usize {
    x * shape.y * shape.z + y * shape.z + z
}

/// Check if coordinates are within grid bounds
#[inline]
pub fn is_in_bounds(shape: GridShape, x: usize, y: usize, z: usize) -> bool {
    x < shape.x && y < shape.y && z < shape.z
}

/// Apply a signed offset, returning the target cell only if it is in bounds
pub fn offset_position(
    shape: GridShape,
    x: usize,
    y: usize,
    z: usize,
    offset: IVec3,
) -> Option<(usize, usize, usize)> {
    let nx = x.checked_add_signed(offset.x as isize)?;
    let ny = y.checked_add_signed(offset.y as isize)?;
    let nz = z.checked_add_signed(offset.z as isize)?;
    is_in_bounds(shape, nx, ny, nz).then_some((nx, ny, nz))
}

fn check_bounds(shape: GridShape, x: usize, y: usize, z: usize) -> IsoResult<usize> {
    if !is_in_bounds(shape, x, y, z) {
        return Err(IsoError::OutOfBounds {
            pos: (x, y, z),
            shape: shape.into(),
        });
    }
    Ok(voxel_index(shape, x, y, z))
}

/// Get the object id at a position
pub fn get(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> IsoResult<ObjectId> {
    let index = check_bounds(grid.shape, x, y, z)?;
    Ok(grid.ids[index])
}

/// Get the object id at a position already known to be in bounds
#[inline]
pub(crate) fn id_at(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> ObjectId {
    grid.ids[voxel_index(grid.shape, x, y, z)]
}

/// Set the object id at a position
pub fn set(grid: &mut VoxelGrid, x: usize, y: usize, z: usize, id: ObjectId) -> IsoResult<()> {
    let index = check_bounds(grid.shape, x, y, z)?;
    grid.ids[index] = id;
    Ok(())
}

/// Fill the inclusive cuboid `xs × ys × zs` with one id
///
/// The whole cuboid is validated before any cell changes. An empty range on
/// any axis (start > end) fills nothing.
pub fn fill(
    grid: &mut VoxelGrid,
    xs: RangeInclusive<usize>,
    ys: RangeInclusive<usize>,
    zs: RangeInclusive<usize>,
    id: ObjectId,
) -> IsoResult<()> {
    if xs.is_empty() || ys.is_empty() || zs.is_empty() {
        return Ok(());
    }

    let shape = grid.shape;
    check_bounds(shape, *xs.end(), *ys.end(), *zs.end())?;

    for x in xs {
        for y in ys.clone() {
            let row = voxel_index(shape, x, y, 0);
            for z in zs.clone() {
                grid.ids[row + z] = id;
            }
        }
    }
    Ok(())
}

/// Number of non-empty cells
pub fn occupied_count(grid: &VoxelGrid) -> usize {
    grid.ids.iter().filter(|id| **id != ObjectId::EMPTY).count()
}
