//! Swipe recognition for touch and mouse input.
//!
//! Both pipelines only decide *whether* a finished drag was a swipe and in
//! which direction. They never touch the index themselves; the carousel routes
//! a recognized [`SwipeDirection`] through the same `next`/`prev` entry points
//! the buttons use.
//!
//! A drag navigates when its horizontal travel exceeds the dead-zone and also
//! exceeds its vertical travel. Anything else is a tap or a page scroll.

/// A point in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: f32,
    /// Vertical coordinate, growing downward.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Navigation a completed swipe resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged to the left: advance.
    Next,
    /// Content dragged to the right: go back.
    Prev,
}

/// Cursor affordance shown over the carousel surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragCursor {
    /// Idle; the surface can be grabbed.
    #[default]
    Grab,
    /// A mouse drag is in progress.
    Grabbing,
}

impl DragCursor {
    /// CSS `cursor` keyword for this affordance.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Resolves a finished drag.
///
/// `diff_x` is `start - end`, so a positive value means the pointer travelled
/// left. `diff_y` is the absolute vertical travel.
fn resolve_swipe(diff_x: f32, diff_y: f32, threshold: f32) -> Option<SwipeDirection> {
    let travel = diff_x.abs();
    if travel > threshold && travel > diff_y {
        if diff_x > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Prev)
        }
    } else {
        None
    }
}

/// Tracks a single-finger touch sequence.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    threshold: f32,
    start: Option<Point>,
}

impl TouchTracker {
    /// Creates an idle tracker with the given dead-zone.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Whether a touch sequence is in progress.
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Records where the finger went down. Intent is unknown yet, so the
    /// platform default is never suppressed here.
    pub fn start(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// Returns `true` when the page scroll should be suppressed because the
    /// finger has so far travelled more horizontally than vertically.
    pub fn moved(&self, point: Point) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let diff_x = (point.x - start.x).abs();
        let diff_y = (point.y - start.y).abs();
        diff_x > diff_y
    }

    /// Ends the sequence and resolves it. Dragging stops whatever the outcome.
    pub fn end(&mut self, point: Point) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let diff_x = start.x - point.x;
        let diff_y = (start.y - point.y).abs();
        resolve_swipe(diff_x, diff_y, self.threshold)
    }

    /// Abandons the sequence without navigating.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Tracks a mouse drag across the document.
#[derive(Clone, Debug)]
pub struct MouseTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl MouseTracker {
    /// Creates an idle tracker with the given dead-zone.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Whether the button is held after pressing on the carousel.
    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Cursor affordance for the current drag state.
    pub fn cursor(&self) -> DragCursor {
        if self.is_dragging() {
            DragCursor::Grabbing
        } else {
            DragCursor::Grab
        }
    }

    /// Records the press position on the carousel surface.
    pub fn down(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Returns `true` while dragging so the host suppresses text and image
    /// selection. Intermediate positions are not tracked.
    pub fn moved(&self) -> bool {
        self.is_dragging()
    }

    /// Ends the drag and resolves it. Dragging stops whatever the outcome.
    pub fn up(&mut self, x: f32) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        resolve_swipe(start_x - x, 0.0, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SWIPE_THRESHOLD;

    fn touch() -> TouchTracker {
        TouchTracker::new(DEFAULT_SWIPE_THRESHOLD)
    }

    #[test]
    fn leftward_swipe_advances() {
        let mut tracker = touch();
        tracker.start(Point::new(300.0, 100.0));
        assert_eq!(
            tracker.end(Point::new(230.0, 105.0)),
            Some(SwipeDirection::Next)
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut tracker = touch();
        tracker.start(Point::new(100.0, 100.0));
        assert_eq!(
            tracker.end(Point::new(220.0, 90.0)),
            Some(SwipeDirection::Prev)
        );
    }

    #[test]
    fn short_drag_is_discarded() {
        let mut tracker = touch();
        tracker.start(Point::new(300.0, 100.0));
        assert_eq!(tracker.end(Point::new(280.0, 40.0)), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn dead_zone_is_exclusive() {
        let mut tracker = touch();
        tracker.start(Point::new(300.0, 100.0));
        assert_eq!(tracker.end(Point::new(250.0, 100.0)), None);
    }

    #[test]
    fn vertical_scroll_is_discarded() {
        let mut tracker = touch();
        tracker.start(Point::new(300.0, 100.0));
        assert_eq!(tracker.end(Point::new(220.0, 300.0)), None);
    }

    #[test]
    fn move_suppresses_scroll_only_when_horizontal() {
        let mut tracker = touch();
        assert!(!tracker.moved(Point::new(10.0, 0.0)));
        tracker.start(Point::new(100.0, 100.0));
        assert!(tracker.moved(Point::new(90.0, 95.0)));
        assert!(!tracker.moved(Point::new(95.0, 140.0)));
        assert!(!tracker.moved(Point::new(110.0, 110.0)));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = touch();
        assert_eq!(tracker.end(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn cancel_drops_the_sequence() {
        let mut tracker = touch();
        tracker.start(Point::new(300.0, 100.0));
        tracker.cancel();
        assert_eq!(tracker.end(Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn mouse_drag_resolves_on_release() {
        let mut tracker = MouseTracker::new(DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(tracker.cursor(), DragCursor::Grab);
        assert!(!tracker.moved());

        tracker.down(400.0);
        assert_eq!(tracker.cursor(), DragCursor::Grabbing);
        assert!(tracker.moved());
        assert_eq!(tracker.up(320.0), Some(SwipeDirection::Next));
        assert_eq!(tracker.cursor(), DragCursor::Grab);

        tracker.down(400.0);
        assert_eq!(tracker.up(470.0), Some(SwipeDirection::Prev));
    }

    #[test]
    fn mouse_click_clears_drag_without_navigating() {
        let mut tracker = MouseTracker::new(DEFAULT_SWIPE_THRESHOLD);
        tracker.down(400.0);
        assert_eq!(tracker.up(390.0), None);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.up(100.0), None);
    }
}
