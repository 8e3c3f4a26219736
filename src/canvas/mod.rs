//! Canvas Module - the drawing surface consumed by the renderer
//!
//! - canvas_data.rs: colors, graphics state and recorded commands
//! - raster_canvas.rs: pixel canvas backed by `image`, writes PNG
//! - recording_canvas.rs: captures draw calls for inspection

pub mod canvas_data;
pub mod raster_canvas;
pub mod recording_canvas;

pub use canvas_data::{CanvasState, Color, DrawCommand};
pub use raster_canvas::RasterCanvas;
pub use recording_canvas::RecordingCanvas;

use glam::DVec2;
use std::ops::{Deref, DerefMut};

/// Path-based 2D drawing surface
///
/// Coordinates are in user space and pass through the current transform.
/// `line_to` without a current point behaves like `move_to`.
pub trait Canvas {
    fn move_to(&mut self, point: DVec2);
    fn line_to(&mut self, point: DVec2);
    /// Fill each subpath of the current path as its own polygon, then clear
    /// the path
    ///
    /// Subpaths do not interact: where two overlap, the overlap is painted.
    fn fill_current_path(&mut self, color: Color);
    /// Stroke one straight segment in black with the current line width
    fn stroke_segment(&mut self, from: DVec2, to: DVec2);
    fn set_line_width(&mut self, width: f64);
    fn translate(&mut self, offset: DVec2);
    /// Push the transform and line width
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`
    fn restore(&mut self);
}

/// Saves canvas state on creation and restores it when dropped
///
/// Early returns and `?` inside the scope still restore.
pub struct CanvasScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> CanvasScope<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}

/// Fill a closed polygon given by its corner points
pub fn fill_polygon<C: Canvas + ?Sized>(canvas: &mut C, points: &[DVec2], color: Color) {
    for point in points {
        canvas.line_to(*point);
    }
    canvas.fill_current_path(color);
}

/// Stroke consecutive segments through `points`
pub fn stroke_polyline<C: Canvas + ?Sized>(canvas: &mut C, points: &[DVec2]) {
    for pair in points.windows(2) {
        canvas.stroke_segment(pair[0], pair[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_restores_on_drop() {
        let mut canvas = RecordingCanvas::new();
        {
            let mut scope = CanvasScope::new(&mut canvas);
            scope.translate(DVec2::new(10.0, 5.0));
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(canvas.depth(), 0);
        canvas.stroke_segment(DVec2::ZERO, DVec2::X);
        assert_eq!(
            canvas.commands()[0],
            DrawCommand::Stroke {
                from: DVec2::ZERO,
                to: DVec2::X,
                width: 1.0
            }
        );
    }

    #[test]
    fn test_scope_restores_on_early_return() {
        fn draw(canvas: &mut RecordingCanvas, bail: bool) -> Option<()> {
            let mut scope = CanvasScope::new(canvas);
            scope.translate(DVec2::new(3.0, 3.0));
            if bail {
                return None;
            }
            scope.stroke_segment(DVec2::ZERO, DVec2::Y);
            Some(())
        }

        let mut canvas = RecordingCanvas::new();
        assert!(draw(&mut canvas, true).is_none());
        assert_eq!(canvas.depth(), 0);
        assert!(draw(&mut canvas, false).is_some());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.commands().len(), 1);
    }

    #[test]
    fn test_stroke_polyline_segments() {
        let mut canvas = RecordingCanvas::new();
        stroke_polyline(&mut canvas, &[DVec2::ZERO, DVec2::X, DVec2::ONE]);
        assert_eq!(canvas.stroke_count(), 2);
    }
}
