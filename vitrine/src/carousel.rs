//! The carousel component: one authoritative index, one render path.
//!
//! ## Usage
//!
//! Build one [`Carousel`] per container with [`Carousel::new`], feed it host
//! input through [`Carousel::dispatch`] and let its [`RenderSink`] apply the
//! resulting frames.

use tracing::{debug, trace};

use crate::{
    config::CarouselConfig,
    error::ConfigError,
    geometry::{Geometry, Measurements},
    gesture::{MouseTracker, SwipeDirection, TouchTracker},
    input::{CarouselEvent, EventResponse},
    navigation::{CarouselController, Transition},
    render::{RenderFrame, RenderSink},
};

/// Snapshot of the carousel's navigation and layout state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselState {
    /// Index of the leftmost visible slide.
    pub current_index: usize,
    /// Slides visible at once.
    pub slides_per_view: usize,
    /// Width of one slide in pixels.
    pub slide_width: f32,
    /// Last valid index.
    pub max_index: usize,
    /// Fixed spacing between slides in pixels.
    pub gap: f32,
}

/// A carousel bound to a render sink.
#[derive(Debug)]
pub struct Carousel<S> {
    config: CarouselConfig,
    slide_count: usize,
    controller: CarouselController,
    touch: TouchTracker,
    mouse: MouseTracker,
    sink: S,
}

impl<S: RenderSink> Carousel<S> {
    /// Validates `config`, measures the layout and renders the first frame.
    ///
    /// The slide count is fixed for the lifetime of the carousel. Missing
    /// containers and zero slides are not errors; the carousel then stays at
    /// index zero and every navigation request is a no-op.
    pub fn new(
        config: CarouselConfig,
        slide_count: usize,
        measurements: Measurements,
        sink: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut carousel = Self {
            touch: TouchTracker::new(config.swipe_threshold),
            mouse: MouseTracker::new(config.swipe_threshold),
            config,
            slide_count,
            controller: CarouselController::new(),
            sink,
        };
        carousel.calculate_dimensions(measurements);
        carousel.render();
        Ok(carousel)
    }

    /// Configuration this carousel was built with.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the leftmost visible slide.
    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CarouselState {
        let geometry = self.controller.geometry();
        CarouselState {
            current_index: self.controller.current_index(),
            slides_per_view: geometry.slides_per_view,
            slide_width: geometry.slide_width,
            max_index: geometry.max_index,
            gap: self.config.gap,
        }
    }

    /// The sink frames are rendered into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the carousel, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Recomputes layout constants from fresh measurements without rendering.
    ///
    /// Returns `false` when the pass was skipped because the container is
    /// missing or there are no slides. When the new bounds are tighter than
    /// the current index, the index is clamped to the new `max_index`.
    pub fn calculate_dimensions(&mut self, measurements: Measurements) -> bool {
        let Some(geometry) = Geometry::compute(&self.config, measurements, self.slide_count)
        else {
            trace!(
                slide_count = self.slide_count,
                has_container = measurements.container_width.is_some(),
                "skipping geometry pass"
            );
            return false;
        };

        if let Some(stale) = self.controller.update_geometry(geometry) {
            debug!(
                stale,
                max_index = geometry.max_index,
                "clamped index into resized bounds"
            );
        }
        debug!(
            slides_per_view = geometry.slides_per_view,
            slide_width = geometry.slide_width,
            max_index = geometry.max_index,
            "geometry updated"
        );
        true
    }

    /// Re-measures and renders.
    pub fn resize(&mut self, measurements: Measurements) {
        self.calculate_dimensions(measurements);
        self.render();
    }

    /// Advances one slide; a no-op at the right edge. Always renders.
    pub fn next(&mut self) -> Transition {
        let transition = self.controller.next();
        self.settle(transition, "next");
        transition
    }

    /// Steps back one slide; a no-op at the left edge. Always renders.
    pub fn prev(&mut self) -> Transition {
        let transition = self.controller.prev();
        self.settle(transition, "prev");
        transition
    }

    /// Jumps to `index`. Out-of-range requests are dropped without rendering.
    pub fn go_to(&mut self, index: isize) -> Transition {
        let transition = self.controller.go_to(index);
        if transition == Transition::Rejected {
            trace!(
                index,
                max_index = self.controller.max_index(),
                "ignoring out-of-range go_to"
            );
            return transition;
        }
        self.settle(transition, "go_to");
        transition
    }

    /// Builds the frame for the current state.
    pub fn frame(&self) -> RenderFrame {
        let index = self.controller.current_index();
        let geometry = self.controller.geometry();
        RenderFrame {
            index,
            translate_x: geometry.offset_for_index(index, self.config.gap),
            prev_disabled: index == 0,
            next_disabled: index >= geometry.max_index,
            active_indicator: index,
            cursor: self.mouse.cursor(),
        }
    }

    /// Pushes the current frame to the sink.
    pub fn render(&mut self) {
        let frame = self.frame();
        self.sink.render(&frame);
    }

    /// Routes one host event through the gesture pipelines and the state
    /// machine.
    pub fn dispatch(&mut self, event: CarouselEvent) -> EventResponse {
        match event {
            CarouselEvent::TouchStart(point) => {
                self.touch.start(point);
                EventResponse::ignored()
            }
            CarouselEvent::TouchMove(point) => {
                if self.touch.moved(point) {
                    EventResponse::suppress()
                } else {
                    EventResponse::ignored()
                }
            }
            CarouselEvent::TouchEnd(point) => match self.touch.end(point) {
                Some(direction) => EventResponse::navigated(self.swipe(direction)),
                None => EventResponse::ignored(),
            },
            CarouselEvent::TouchCancel => {
                self.touch.cancel();
                EventResponse::ignored()
            }
            CarouselEvent::MouseDown(x) => {
                self.mouse.down(x);
                self.render();
                EventResponse::ignored()
            }
            CarouselEvent::MouseMove => {
                if self.mouse.moved() {
                    EventResponse::suppress()
                } else {
                    EventResponse::ignored()
                }
            }
            CarouselEvent::MouseUp(x) => {
                if !self.mouse.is_dragging() {
                    return EventResponse::ignored();
                }
                match self.mouse.up(x) {
                    Some(direction) => EventResponse::navigated(self.swipe(direction)),
                    None => {
                        // cursor affordance changed
                        self.render();
                        EventResponse::ignored()
                    }
                }
            }
            CarouselEvent::PrevClicked => EventResponse::navigated(self.prev()),
            CarouselEvent::NextClicked => EventResponse::navigated(self.next()),
            CarouselEvent::IndicatorClicked(position) => {
                let index = isize::try_from(position).unwrap_or(isize::MAX);
                EventResponse::navigated(self.go_to(index))
            }
            CarouselEvent::Resized(measurements) => {
                self.resize(measurements);
                EventResponse::ignored()
            }
        }
    }

    fn swipe(&mut self, direction: SwipeDirection) -> Transition {
        trace!(?direction, "swipe recognized");
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Prev => self.prev(),
        }
    }

    fn settle(&mut self, transition: Transition, request: &'static str) {
        if let Transition::Moved { from, to } = transition {
            debug!(request, from, to, "carousel moved");
        }
        self.render();
    }
}
