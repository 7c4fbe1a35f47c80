//! Control state derived from a frame.
//!
//! The DOM sink only replays what these types say, so the class and ARIA
//! contract of the storefront markup is checked without a browser.

use std::fmt::Debug;

use tracing::trace;
use vitrine::{Measurements, RenderFrame};

use crate::markers;

/// How a previous or next button should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    /// The button cannot be pressed.
    pub disabled: bool,
}

impl ButtonState {
    /// Class toggles to apply, as `(class, present)`.
    pub fn class_toggles(self) -> [(&'static str, bool); 1] {
        [(markers::DIMMED_CLASS, self.disabled)]
    }

    /// `aria-disabled` value for buttons that are not `<button>` elements.
    pub fn aria_disabled(self) -> &'static str {
        bool_attribute(self.disabled)
    }
}

/// How one indicator dot should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorState {
    /// The dot marks the current index.
    pub active: bool,
}

impl IndicatorState {
    /// Class toggles to apply, as `(class, present)`.
    pub fn class_toggles(self) -> [(&'static str, bool); 2] {
        [
            (markers::INDICATOR_ACTIVE_CLASS, self.active),
            (markers::INDICATOR_INACTIVE_CLASS, !self.active),
        ]
    }

    /// `aria-selected` value.
    pub fn aria_selected(self) -> &'static str {
        bool_attribute(self.active)
    }
}

/// Every control state for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlStates {
    /// Previous button.
    pub prev: ButtonState,
    /// Next button.
    pub next: ButtonState,
    /// Indicator dots in markup order.
    pub indicators: Vec<IndicatorState>,
}

impl ControlStates {
    /// Derives control states for a page with `indicator_count` dots.
    pub fn for_frame(frame: &RenderFrame, indicator_count: usize) -> Self {
        Self {
            prev: ButtonState {
                disabled: frame.prev_disabled,
            },
            next: ButtonState {
                disabled: frame.next_disabled,
            },
            indicators: (0..indicator_count)
                .map(|position| IndicatorState {
                    active: frame.is_indicator_active(position),
                })
                .collect(),
        }
    }
}

/// Measurements from the viewport width and the track's layout width.
///
/// The track is the element that moves, so its own `offsetWidth` (border box,
/// no outer padding) is what slide widths are derived from.
pub fn track_measurements(viewport_width: f64, track_offset_width: i32) -> Measurements {
    Measurements::new(viewport_width as f32, track_offset_width as f32)
}

/// Logs a failed DOM write. Returns whether the write went through.
pub fn dom_write<T, E: Debug>(result: Result<T, E>, what: &'static str) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            trace!(?err, what, "dom write failed");
            false
        }
    }
}

fn bool_attribute(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
