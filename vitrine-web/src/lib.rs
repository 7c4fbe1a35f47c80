//! Browser adapter for [`vitrine`] carousels.
//!
//! Each element marked `data-carousel` becomes one independent carousel. Its
//! track, slides and optional controls are found by the markers in
//! [`markers`]; per-container tunables come from the JSON in
//! `data-carousel-config` (see [`overrides`]).
//!
//! On `wasm32` the module entry attaches every carousel once the document is
//! ready. Page scripts get the same carousels back with
//! `Carousel.forElement(element)`, or attach one by hand with
//! `new Carousel(element)`, and then call `next()`, `prev()` and `goTo(i)`.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod controls;
pub mod markers;
pub mod overrides;
pub mod shared;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{CarouselHandle, attach, attach_all, start};

pub use controls::{ButtonState, ControlStates, IndicatorState, track_measurements};
pub use overrides::{ConfigOverrides, OverrideError, resolve_config};
pub use shared::SharedCarousel;
