//! Pixel canvas backed by an `image::RgbaImage`
//!
//! No antialiasing: a pixel is painted when its center lies inside the
//! shape, with a half-open rule on both axes so shared edges are painted
//! once. Each subpath is scan-converted on its own with the even-odd rule.
//! Strokes are rasterized as quads of the current line width with
//! butt ends.

use super::canvas_data::{CanvasState, Color};
use super::Canvas;
use crate::error::{IsoResult, PathContext};
use glam::{DAffine2, DMat2, DVec2};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

pub struct RasterCanvas {
    image: RgbaImage,
    state: CanvasState,
    stack: Vec<CanvasState>,
    /// Subpaths of the current path, already in device space
    path: Vec<Vec<DVec2>>,
}

impl RasterCanvas {
    /// Transparent canvas with an identity transform
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            state: CanvasState::default(),
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at device coordinates (row 0 is the top of the image)
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Paint every pixel, ignoring the transform
    pub fn paint(&mut self, color: Color) {
        let rgba = to_rgba8(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Make user-space Y point up: y' = height - y
    pub fn flip_vertical(&mut self) {
        let flip = DAffine2::from_mat2_translation(
            DMat2::from_diagonal(DVec2::new(1.0, -1.0)),
            DVec2::new(0.0, self.image.height() as f64),
        );
        self.state.transform = self.state.transform * flip;
    }

    /// Encode the canvas as PNG at `path`
    pub fn write_png(&self, path: &Path) -> IsoResult<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .path_context(path)?;
        log::info!(
            "[RasterCanvas::write_png] wrote {}x{} image to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

impl Canvas for RasterCanvas {
    fn move_to(&mut self, point: DVec2) {
        self.path
            .push(vec![self.state.transform.transform_point2(point)]);
    }

    fn line_to(&mut self, point: DVec2) {
        match self.path.last_mut() {
            Some(subpath) => subpath.push(self.state.transform.transform_point2(point)),
            None => self.move_to(point),
        }
    }

    fn fill_current_path(&mut self, color: Color) {
        let rgba = to_rgba8(color);
        for points in std::mem::take(&mut self.path) {
            fill_device_polygon(&mut self.image, &points, rgba);
        }
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2) {
        let a = self.state.transform.transform_point2(from);
        let b = self.state.transform.transform_point2(to);
        // Width is scaled like a user-space vector
        let half = 0.5
            * self.state.line_width
            * self
                .state
                .transform
                .matrix2
                .determinant()
                .abs()
                .sqrt();

        let normal = (b - a).normalize_or_zero().perp() * half;
        if normal == DVec2::ZERO {
            return;
        }

        let quad = [a + normal, b + normal, b - normal, a - normal];
        fill_device_polygon(&mut self.image, &quad, to_rgba8(Color::BLACK));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn translate(&mut self, offset: DVec2) {
        self.state.transform = self.state.transform * DAffine2::from_translation(offset);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("[RasterCanvas::restore] restore without matching save"),
        }
    }
}

/// Convert a [0, 1] color to opaque 8-bit RGBA
pub fn to_rgba8(color: Color) -> Rgba<u8> {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(color.r), channel(color.g), channel(color.b), 255])
}

/// Scanline fill of a polygon in device space (even-odd rule)
fn fill_device_polygon(image: &mut RgbaImage, points: &[DVec2], rgba: Rgba<u8>) {
    if points.len() < 3 {
        return;
    }

    let (width, height) = (image.width() as i64, image.height() as i64);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    // Rows whose center yc = row + 0.5 satisfies min_y <= yc < max_y
    let first_row = ((min_y - 0.5).ceil() as i64).max(0);
    let last_row = ((max_y - 0.5).ceil() as i64).min(height);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for row in first_row..last_row {
        let yc = row as f64 + 0.5;
        crossings.clear();

        for (i, p0) in points.iter().enumerate() {
            let p1 = points[(i + 1) % points.len()];
            let spans = (p0.y <= yc && yc < p1.y) || (p1.y <= yc && yc < p0.y);
            if spans {
                crossings.push(p0.x + (yc - p0.y) * (p1.x - p0.x) / (p1.y - p0.y));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            // Columns whose center xc = col + 0.5 satisfies xa <= xc < xb
            let start = ((span[0] - 0.5).ceil() as i64).max(0);
            let end = ((span[1] - 0.5).ceil() as i64).min(width);
            for col in start..end {
                image.put_pixel(col as u32, row as u32, rgba);
            }
        }
    }
}
