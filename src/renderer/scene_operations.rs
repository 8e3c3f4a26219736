//! Scene Renderer Operations
//!
//! Turns a whole grid into draw calls. Per-voxel work (neighbor flags,
//! screen origin, shade) is planned up front in parallel, one x slab per
//! task, and the resulting jobs are replayed serially in painter's order:
//! x descending, y descending, z ascending. Every cube is therefore drawn
//! after every cube it may overlap from behind.

use super::cube_data::CubeJob;
use super::cube_operations::{draw_cube, draw_flat_tile, shade_ratio};
use super::scene_data::{BoxHalf, RenderStats};
use crate::canvas::{Canvas, CanvasScope, RasterCanvas};
use crate::config::{Palette, RenderConfig};
use crate::error::{IsoError, IsoResult};
use crate::grid::{
    classify_neighbors, grid_operations::id_at, validate_grid, GridShape, ObjectId, VoxelGrid,
};
use crate::projection::{
    cube_outline, image_size, voxel_origin, world_box, world_box_back_segments,
    world_box_front_segments, CubeOutline, DiamondSize,
};
use crate::visibility::{compute_visibility, is_visible, VisibilityMask};
use glam::DVec2;
use rayon::prelude::*;
use std::path::Path;

// ============================================================================
// JOB PLANNING
// ============================================================================

/// Visible occupied voxels in drawing order, with everything `draw_cube`
/// needs
pub fn plan_cubes(
    grid: &VoxelGrid,
    mask: &VisibilityMask,
    diamond: DiamondSize,
    palette: &Palette,
) -> IsoResult<Vec<CubeJob>> {
    validate_grid(grid)?;
    let shape = grid.shape;
    if mask.shape != shape {
        return Err(IsoError::ShapeMismatch {
            grid: shape.into(),
            mask: mask.shape.into(),
        });
    }

    // Indexed parallel map keeps slab order on collect
    let slabs: Vec<Vec<CubeJob>> = (0..shape.x)
        .into_par_iter()
        .rev()
        .map(|x| {
            let mut jobs = Vec::new();
            for y in (0..shape.y).rev() {
                for z in 0..shape.z {
                    if id_at(grid, x, y, z) == ObjectId::EMPTY || !is_visible(mask, x, y, z) {
                        continue;
                    }
                    jobs.push(CubeJob {
                        x,
                        y,
                        z,
                        origin: voxel_origin(shape, diamond, x, y, z),
                        flags: classify_neighbors(grid, x, y, z),
                        shade: shade_ratio(palette, z, shape.z),
                    });
                }
            }
            jobs
        })
        .collect();

    Ok(slabs.into_iter().flatten().collect())
}

// ============================================================================
// SCENE PIECES
// ============================================================================

/// Flat tile under every (x, y) column; returns the tile count
pub fn draw_floor_grid<C: Canvas + ?Sized>(
    canvas: &mut C,
    shape: GridShape,
    diamond: DiamondSize,
    outline: &CubeOutline,
) -> usize {
    let mut tiles = 0;
    for x in 0..shape.x {
        for y in 0..shape.y {
            draw_flat_tile(canvas, voxel_origin(shape, diamond, x, y, 0), outline);
            tiles += 1;
        }
    }
    tiles
}

/// Stroke one half of the bounding box wireframe; returns the segment count
pub fn draw_world_box<C: Canvas + ?Sized>(
    canvas: &mut C,
    shape: GridShape,
    diamond: DiamondSize,
    half: BoxHalf,
) -> usize {
    let wb = world_box(shape, diamond);
    let segments: Vec<(DVec2, DVec2)> = match half {
        BoxHalf::Back => world_box_back_segments(&wb).to_vec(),
        BoxHalf::Front => world_box_front_segments(&wb).to_vec(),
    };
    for (from, to) in &segments {
        canvas.stroke_segment(*from, *to);
    }
    segments.len()
}

// ============================================================================
// MODEL
// ============================================================================

/// Draw a whole grid onto `canvas`
///
/// The canvas transform is expected to put the model origin where the
/// lower-left corner of the image should be (see `new_canvas`). Line width
/// comes from `config`; the canvas state is restored afterwards. A
/// malformed grid is rejected before anything is drawn.
pub fn draw_model<C: Canvas + ?Sized>(
    canvas: &mut C,
    grid: &VoxelGrid,
    config: &RenderConfig,
) -> IsoResult<RenderStats> {
    let mask = compute_visibility(grid)?;
    let jobs = plan_cubes(grid, &mask, config.diamond, &config.palette)?;

    let shape = grid.shape;
    let outline = cube_outline(config.diamond);
    let mut stats = RenderStats::default();

    let mut scope = CanvasScope::new(canvas);
    scope.set_line_width(config.line_width);

    if config.draw_floor_grid {
        stats.floor_tiles = draw_floor_grid(&mut *scope, shape, config.diamond, &outline);
    }
    if config.draw_world_box {
        stats.box_segments += draw_world_box(&mut *scope, shape, config.diamond, BoxHalf::Back);
    }

    for job in &jobs {
        let cube = draw_cube(&mut *scope, job, &outline, &config.palette);
        stats.cubes += 1;
        stats.faces += cube.faces;
        stats.edges += cube.edges;
    }

    if config.draw_world_box {
        stats.box_segments += draw_world_box(&mut *scope, shape, config.diamond, BoxHalf::Front);
    }

    log::debug!(
        "[draw_model] {}x{}x{} grid: {} cubes, {} faces, {} edges",
        shape.x,
        shape.y,
        shape.z,
        stats.cubes,
        stats.faces,
        stats.edges
    );
    Ok(stats)
}

/// Draw a grid shifted by `offset` in model space
///
/// Lets several models share one canvas, e.g. a contact sheet of scenes.
pub fn draw_model_at<C: Canvas + ?Sized>(
    canvas: &mut C,
    grid: &VoxelGrid,
    config: &RenderConfig,
    offset: DVec2,
) -> IsoResult<RenderStats> {
    let mut scope = CanvasScope::new(canvas);
    scope.translate(offset);
    draw_model(&mut *scope, grid, config)
}

// ============================================================================
// RASTER OUTPUT
// ============================================================================

/// Blank canvas sized for `shape`: background painted, Y pointing up and
/// the origin moved in by the margin
pub fn new_canvas(shape: GridShape, config: &RenderConfig) -> RasterCanvas {
    let size = image_size(shape, config.diamond, config.margin);
    let mut canvas = RasterCanvas::new(size.width, size.height);
    canvas.paint(config.background);
    canvas.flip_vertical();
    let margin = config.margin as f64;
    canvas.translate(DVec2::new(margin, margin));
    canvas
}

fn render(grid: &VoxelGrid, config: &RenderConfig) -> IsoResult<(RasterCanvas, RenderStats)> {
    config.validate()?;
    validate_grid(grid)?;
    let mut canvas = new_canvas(grid.shape, config);
    let stats = draw_model(&mut canvas, grid, config)?;
    Ok((canvas, stats))
}

/// Render a grid to an in-memory image
pub fn render_image(grid: &VoxelGrid, config: &RenderConfig) -> IsoResult<RasterCanvas> {
    render(grid, config).map(|(canvas, _)| canvas)
}

/// Render a grid and write it as PNG
pub fn render_png(grid: &VoxelGrid, config: &RenderConfig, path: &Path) -> IsoResult<RenderStats> {
    let (canvas, stats) = render(grid, config)?;
    canvas.write_png(path)?;
    log::info!(
        "[render_png] {} cubes ({} faces, {} edges) -> {}",
        stats.cubes,
        stats.faces,
        stats.edges,
        path.display()
    );
    Ok(stats)
}
