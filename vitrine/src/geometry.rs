//! Responsive layout constants for a carousel.
//!
//! Geometry is derived from three inputs: the live viewport width, the live
//! container width and the fixed slide count. Nothing here renders.

use crate::config::CarouselConfig;

/// Live layout measurements read from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Width of the viewport, used for breakpoint lookup.
    pub viewport_width: f32,
    /// Width of the carousel container, `None` when the container is missing.
    pub container_width: Option<f32>,
}

impl Measurements {
    /// Measurements for a present container.
    pub fn new(viewport_width: f32, container_width: f32) -> Self {
        Self {
            viewport_width,
            container_width: Some(container_width),
        }
    }

    /// Measurements for a page where the container could not be found.
    pub fn without_container(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            container_width: None,
        }
    }
}

/// Derived layout constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Slides visible at once.
    pub slides_per_view: usize,
    /// Width of one slide in pixels, never negative.
    pub slide_width: f32,
    /// Last index that still fills the view without overscroll.
    pub max_index: usize,
}

impl Default for Geometry {
    /// Geometry before the first successful measurement pass.
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            slide_width: 0.0,
            max_index: 0,
        }
    }
}

impl Geometry {
    /// Computes geometry, or `None` when there is no container or no slide to
    /// lay out.
    pub fn compute(
        config: &CarouselConfig,
        measurements: Measurements,
        slide_count: usize,
    ) -> Option<Self> {
        let container_width = measurements.container_width?;
        if slide_count == 0 || !container_width.is_finite() {
            return None;
        }

        let slides_per_view = config
            .breakpoints
            .slides_per_view(measurements.viewport_width);
        let gutters = config.gap * slides_per_view.saturating_sub(1) as f32;
        let slide_width = ((container_width - gutters) / slides_per_view as f32).max(0.0);
        let max_index = slide_count.saturating_sub(slides_per_view);

        Some(Self {
            slides_per_view,
            slide_width,
            max_index,
        })
    }

    /// Distance the track travels per index step.
    pub fn step(&self, gap: f32) -> f32 {
        self.slide_width + gap
    }

    /// Horizontal track translation that brings `index` to the left edge.
    pub fn offset_for_index(&self, index: usize, gap: f32) -> f32 {
        if index == 0 {
            return 0.0;
        }
        -(index as f32 * self.step(gap))
    }
}
