//! Geometry, navigation and gesture engine for responsive storefront
//! carousels.
//!
//! A carousel shows a row of slides, one to three at a time depending on the
//! viewport width, and pages through them from buttons, indicator dots, touch
//! swipes or mouse drags. This crate holds the part with actual invariants:
//! the breakpoint table, index bounds, track translation and the logic that
//! decides whether a drag was a swipe, a scroll or a tap. It never touches a
//! visual tree; hosts receive plain [`RenderFrame`]s through a
//! [`RenderSink`].
//!
//! # Example
//!
//! ```
//! use vitrine::{Carousel, CarouselConfig, CarouselEvent, Measurements, Point, RenderFrame};
//!
//! let mut carousel = Carousel::new(
//!     CarouselConfig::default(),
//!     7,
//!     Measurements::new(1280.0, 1248.0),
//!     Vec::<RenderFrame>::new(),
//! )?;
//! assert_eq!(carousel.state().max_index, 4);
//!
//! carousel.dispatch(CarouselEvent::TouchStart(Point::new(300.0, 100.0)));
//! carousel.dispatch(CarouselEvent::TouchEnd(Point::new(230.0, 105.0)));
//! assert_eq!(carousel.current_index(), 1);
//!
//! let frame = carousel.sink().last().copied().unwrap_or(carousel.frame());
//! assert_eq!(frame.translate_x, -424.0);
//! # Ok::<(), vitrine::ConfigError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod navigation;
pub mod render;

pub use crate::{
    carousel::{Carousel, CarouselState},
    config::{Breakpoint, Breakpoints, CarouselConfig},
    error::ConfigError,
    geometry::{Geometry, Measurements},
    gesture::{DragCursor, MouseTracker, Point, SwipeDirection, TouchTracker},
    input::{CarouselEvent, EventResponse},
    navigation::{CarouselController, Transition},
    render::{RenderFrame, RenderSink},
};
