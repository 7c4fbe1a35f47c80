//! Plain-data render output and the sink that applies it.
//!
//! The engine never touches a visual tree. Every render produces a
//! [`RenderFrame`]; a [`RenderSink`] owned by the carousel turns it into DOM
//! writes, terminal output or test assertions.

use crate::gesture::DragCursor;

/// Everything a host needs to draw the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderFrame {
    /// Current index the frame was computed for.
    pub index: usize,
    /// Horizontal translation of the slide track in pixels, zero or negative.
    pub translate_x: f32,
    /// The previous button is disabled and dimmed.
    pub prev_disabled: bool,
    /// The next button is disabled and dimmed.
    pub next_disabled: bool,
    /// Position of the one indicator marked active.
    pub active_indicator: usize,
    /// Cursor affordance over the carousel surface.
    pub cursor: DragCursor,
}

impl RenderFrame {
    /// Whether the indicator at `position` is the active one.
    pub fn is_indicator_active(&self, position: usize) -> bool {
        self.active_indicator == position
    }

    /// Composited CSS transform for the track.
    pub fn transform_css(&self) -> String {
        format!("translate3d({}px, 0px, 0px)", self.translate_x)
    }
}

/// Receives every frame a carousel renders.
pub trait RenderSink {
    /// Applies a frame to the visual tree.
    fn render(&mut self, frame: &RenderFrame);
}

/// Collects frames in order, mostly for tests and headless hosts.
impl RenderSink for Vec<RenderFrame> {
    fn render(&mut self, frame: &RenderFrame) {
        self.push(*frame);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn render(&mut self, frame: &RenderFrame) {
        (**self).render(frame);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, frame: &RenderFrame) {
        (**self).render(frame);
    }
}
