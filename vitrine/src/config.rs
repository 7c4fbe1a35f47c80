//! Carousel configuration.
//!
//! ## Usage
//!
//! Start from [`CarouselConfig::default`] and override what the page needs:
//!
//! ```
//! use vitrine::{Breakpoint, Breakpoints, CarouselConfig};
//!
//! let config = CarouselConfig::default()
//!     .gap(16.0)
//!     .breakpoints(Breakpoints::new([
//!         Breakpoint::new(1280.0, 4),
//!         Breakpoint::new(768.0, 2),
//!     ]));
//! assert!(config.validate().is_ok());
//! assert_eq!(config.breakpoints.slides_per_view(1400.0), 4);
//! ```

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Default spacing between two adjacent slides, in pixels.
pub const DEFAULT_GAP: f32 = 24.0;
/// Default minimum horizontal drag distance that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
/// Slides per view when no breakpoint matches the viewport.
pub const FALLBACK_SLIDES_PER_VIEW: usize = 1;

/// One row of the responsive breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Smallest viewport width, inclusive, at which this row applies.
    pub min_width: f32,
    /// Slides visible at once while this row applies.
    pub slides_per_view: usize,
}

impl Breakpoint {
    /// Creates a breakpoint row.
    pub const fn new(min_width: f32, slides_per_view: usize) -> Self {
        Self {
            min_width,
            slides_per_view,
        }
    }
}

/// Breakpoint table ordered widest-first.
///
/// Lookup walks the table from the widest row down and the first row whose
/// `min_width` the viewport reaches wins. Viewports narrower than every row
/// show [`FALLBACK_SLIDES_PER_VIEW`] slides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")
)]
pub struct Breakpoints(SmallVec<[Breakpoint; 4]>);

impl Breakpoints {
    /// Builds a table from rows in any order.
    pub fn new(rows: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut rows: SmallVec<[Breakpoint; 4]> = rows.into_iter().collect();
        rows.sort_by(|a, b| b.min_width.total_cmp(&a.min_width));
        Self(rows)
    }

    /// Rows, widest first.
    pub fn rows(&self) -> &[Breakpoint] {
        &self.0
    }

    /// Resolves how many slides fit a viewport of the given width.
    pub fn slides_per_view(&self, viewport_width: f32) -> usize {
        self.0
            .iter()
            .find(|row| viewport_width >= row.min_width)
            .map(|row| row.slides_per_view)
            .unwrap_or(FALLBACK_SLIDES_PER_VIEW)
    }

    /// Checks that every row shows slides and that wider viewports never show
    /// fewer slides than narrower ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for row in &self.0 {
            if !row.min_width.is_finite() {
                return Err(ConfigError::NonFiniteBreakpoint(row.min_width));
            }
            if row.slides_per_view == 0 {
                return Err(ConfigError::EmptyBreakpoint {
                    min_width: row.min_width,
                });
            }
        }
        for pair in self.0.windows(2) {
            let (wider, narrower) = (pair[0], pair[1]);
            if wider.slides_per_view < narrower.slides_per_view {
                return Err(ConfigError::NonMonotonicBreakpoints {
                    wider: wider.min_width,
                    wider_slides: wider.slides_per_view,
                    narrower: narrower.min_width,
                    narrower_slides: narrower.slides_per_view,
                });
            }
        }
        Ok(())
    }
}

impl Default for Breakpoints {
    /// Desktop shows three slides, tablet two, everything narrower one.
    fn default() -> Self {
        Self::new([Breakpoint::new(1024.0, 3), Breakpoint::new(640.0, 2)])
    }
}

impl From<Vec<Breakpoint>> for Breakpoints {
    fn from(rows: Vec<Breakpoint>) -> Self {
        Self::new(rows)
    }
}

impl From<Breakpoints> for Vec<Breakpoint> {
    fn from(table: Breakpoints) -> Self {
        table.0.into_vec()
    }
}

/// Tunables shared by every carousel instance built from it.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Responsive slides-per-view table.
    pub breakpoints: Breakpoints,
    /// Fixed spacing between slides in pixels. Not responsive.
    pub gap: f32,
    /// Horizontal drag distance a gesture must exceed to navigate.
    pub swipe_threshold: f32,
}

impl CarouselConfig {
    /// Rejects tables and lengths that would produce invalid geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breakpoints.validate()?;
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(ConfigError::InvalidGap(self.gap));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gap: DEFAULT_GAP,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}
