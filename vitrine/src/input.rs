//! Host input routed into a carousel.

use crate::{geometry::Measurements, gesture::Point, navigation::Transition};

/// One input event from the host, already reduced to carousel terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// First finger touched the carousel surface.
    TouchStart(Point),
    /// The finger moved.
    TouchMove(Point),
    /// The finger lifted at this point.
    TouchEnd(Point),
    /// The platform aborted the touch sequence.
    TouchCancel,
    /// Mouse button pressed on the carousel surface at this x.
    MouseDown(f32),
    /// Mouse moved anywhere in the document.
    MouseMove,
    /// Mouse button released anywhere in the document at this x.
    MouseUp(f32),
    /// The previous button was activated.
    PrevClicked,
    /// The next button was activated.
    NextClicked,
    /// The indicator at this position was activated.
    IndicatorClicked(usize),
    /// Viewport or container size changed.
    Resized(Measurements),
}

/// What the host should do after the carousel handled an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform default (page scroll, selection drag).
    pub prevent_default: bool,
    /// Navigation the event resolved to, if it reached the state machine.
    pub transition: Option<Transition>,
}

impl EventResponse {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn suppress() -> Self {
        Self {
            prevent_default: true,
            transition: None,
        }
    }

    pub(crate) fn navigated(transition: Transition) -> Self {
        Self {
            prevent_default: false,
            transition: Some(transition),
        }
    }
}
