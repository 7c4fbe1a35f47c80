//! Single-threaded shared ownership of one carousel.
//!
//! Every listener and every script-facing handle holds a clone, so clicks,
//! gestures and page scripts all move the same index.

use std::{cell::RefCell, rc::Rc};

use vitrine::{Carousel, CarouselEvent, EventResponse, RenderSink};

/// A carousel shared between listeners and script handles.
#[derive(Debug)]
pub struct SharedCarousel<S> {
    inner: Rc<RefCell<Carousel<S>>>,
}

impl<S> Clone for SharedCarousel<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: RenderSink> SharedCarousel<S> {
    /// Takes ownership of a constructed carousel.
    pub fn new(carousel: Carousel<S>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(carousel)),
        }
    }

    /// Routes one input event.
    pub fn dispatch(&self, event: CarouselEvent) -> EventResponse {
        self.inner.borrow_mut().dispatch(event)
    }

    /// Advances one slide. Returns whether the index changed.
    pub fn next(&self) -> bool {
        self.inner.borrow_mut().next().is_moved()
    }

    /// Steps back one slide. Returns whether the index changed.
    pub fn prev(&self) -> bool {
        self.inner.borrow_mut().prev().is_moved()
    }

    /// Jumps to a script-supplied index. Returns whether it was accepted.
    pub fn go_to(&self, index: i32) -> bool {
        self.inner.borrow_mut().go_to(index as isize).is_moved()
    }

    /// Index of the leftmost visible slide.
    pub fn current_index(&self) -> usize {
        self.inner.borrow().current_index()
    }

    /// Whether both values share one carousel.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use vitrine::{CarouselConfig, Measurements, RenderFrame};

    use super::*;

    fn shared(slides: usize) -> SharedCarousel<Vec<RenderFrame>> {
        SharedCarousel::new(
            Carousel::new(
                CarouselConfig::default(),
                slides,
                Measurements::new(1280.0, 1200.0),
                Vec::new(),
            )
            .expect("default config is valid"),
        )
    }

    #[test]
    fn script_calls_report_whether_they_moved() {
        let carousel = shared(7);
        assert!(!carousel.prev());
        assert!(carousel.next());
        assert!(carousel.go_to(4));
        assert!(!carousel.next());
        assert!(!carousel.go_to(5));
        assert!(!carousel.go_to(-1));
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn clones_drive_one_index() {
        let script = shared(7);
        let listener = script.clone();
        assert!(script.same_as(&listener));

        listener.dispatch(CarouselEvent::NextClicked);
        assert_eq!(script.current_index(), 1);
        script.go_to(3);
        assert_eq!(listener.current_index(), 3);
        assert!(!script.same_as(&shared(7)));
    }
}
