//! Render sink that logs every frame.

use tracing::info;
use vitrine::{RenderFrame, RenderSink};

#[derive(Debug, Default)]
pub struct LogSink {
    frames: usize,
}

impl LogSink {
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        info!(
            frame = self.frames,
            index = frame.index,
            transform = %frame.transform_css(),
            prev_disabled = frame.prev_disabled,
            next_disabled = frame.next_disabled,
            active_indicator = frame.active_indicator,
            cursor = frame.cursor.as_css(),
            "render"
        );
    }
}
