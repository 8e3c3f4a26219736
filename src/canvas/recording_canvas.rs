//! Canvas that records draw calls instead of rasterizing them
//!
//! Points are stored after the current transform is applied, so recorded
//! commands from different voxels share one coordinate space.

use super::canvas_data::{CanvasState, Color, DrawCommand};
use super::Canvas;
use glam::DVec2;

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    state: CanvasState,
    stack: Vec<CanvasState>,
    path: Vec<Vec<DVec2>>,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Canvas for RecordingCanvas {
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
        for points in self.path.drain(..) {
            if points.len() >= 3 {
                self.commands.push(DrawCommand::Fill { color, points });
            }
        }
    }

    fn stroke_segment(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Stroke {
            from: self.state.transform.transform_point2(from),
            to: self.state.transform.transform_point2(to),
            width: self.state.line_width,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn translate(&mut self, offset: DVec2) {
        self.state.transform = self.state.transform * glam::DAffine2::from_translation(offset);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("[RecordingCanvas::restore] restore without matching save"),
        }
    }
}
