// Isovox - isometric voxel renderer, Data-Oriented Programming (DOP) layout
//
// Data lives in *_data.rs files, behavior in *_operations.rs pure functions.
// - grid: voxel storage and neighbor classification
// - visibility: which cells the fixed viewpoint can see
// - projection: voxel space to screen space
// - renderer: per-cube and whole-scene drawing
// - canvas: the drawing surface (raster PNG or recording)

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;

// Model
pub mod grid;
pub mod visibility;

// Drawing
pub mod canvas;
pub mod projection;
pub mod renderer;

pub use canvas::{Canvas, CanvasScope, Color, DrawCommand, RasterCanvas, RecordingCanvas};
pub use config::{load_config, parse_config, Palette, RenderConfig};
pub use error::{IsoError, IsoResult};
pub use grid::{
    create_grid, create_shape, fill, get, grid_from_fn, set, validate_grid, GridShape,
    NeighborFlags, ObjectId, VoxelGrid,
};
pub use projection::{image_size, DiamondSize, ImageSize};
pub use renderer::{
    draw_model, draw_model_at, new_canvas, render_image, render_png, BoxHalf, RenderStats,
};
pub use visibility::{compute_visibility, VisibilityMask};
