//! Canvas Data - Pure DOP
//!
//! NO METHODS. Just data.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// Linear RGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color { r, g, b }
    }
}

/// Graphics state pushed by `save` and popped by `restore`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasState {
    /// User space to device (pixel) space
    pub transform: DAffine2,
    pub line_width: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: DAffine2::IDENTITY,
            line_width: crate::constants::canvas::LINE_WIDTH,
        }
    }
}

/// One drawing call as captured by `RecordingCanvas`, in device space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { color: Color, points: Vec<DVec2> },
    Stroke { from: DVec2, to: DVec2, width: f64 },
}
