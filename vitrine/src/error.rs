//! Errors raised while validating carousel configuration.
//!
//! Runtime operations never fail; a malformed page degrades to no-ops. The
//! only fallible step is accepting a [`CarouselConfig`](crate::CarouselConfig).

use thiserror::Error;

/// Reasons a carousel configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A breakpoint would show no slides at all.
    #[error("breakpoint at {min_width}px must show at least one slide")]
    EmptyBreakpoint {
        /// Minimum viewport width of the offending breakpoint.
        min_width: f32,
    },
    /// A breakpoint width is NaN or infinite.
    #[error("breakpoint width must be finite, got {0}")]
    NonFiniteBreakpoint(f32),
    /// A wider breakpoint shows fewer slides than a narrower one.
    #[error(
        "breakpoint at {wider}px shows {wider_slides} slides, fewer than {narrower_slides} at {narrower}px"
    )]
    NonMonotonicBreakpoints {
        /// Minimum width of the wider breakpoint.
        wider: f32,
        /// Slides shown by the wider breakpoint.
        wider_slides: usize,
        /// Minimum width of the narrower breakpoint.
        narrower: f32,
        /// Slides shown by the narrower breakpoint.
        narrower_slides: usize,
    },
    /// The inter-slide gap is negative or not finite.
    #[error("slide gap must be a finite, non-negative length, got {0}")]
    InvalidGap(f32),
    /// The swipe dead-zone is negative or not finite.
    #[error("swipe threshold must be a finite, non-negative distance, got {0}")]
    InvalidSwipeThreshold(f32),
}
