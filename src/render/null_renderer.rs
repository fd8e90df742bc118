use crate::error::StoryResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_polyline_count: usize,
    pub last_text_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn last_primitive_count(&self) -> usize {
        self.last_line_count
            + self.last_rect_count
            + self.last_circle_count
            + self.last_polyline_count
            + self.last_text_count
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StoryResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_circle_count = frame.circles.len();
        self.last_polyline_count = frame.polylines.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
