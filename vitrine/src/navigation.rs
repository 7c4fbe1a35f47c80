//! Index state machine for the carousel.
//!
//! `next` and `prev` stop silently at the edges. `go_to` drops any index
//! outside `0..=max_index` instead of clamping it, so a caller asking for a
//! slide that cannot lead the view gets no movement at all.

use crate::geometry::Geometry;

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The request was accepted. `from` and `to` are equal when `go_to`
    /// targets the current index.
    Moved {
        /// Index before the request.
        from: usize,
        /// Index after the request.
        to: usize,
    },
    /// `next` at the right edge or `prev` at the left edge.
    AtBoundary,
    /// `go_to` outside `0..=max_index`.
    Rejected,
}

impl Transition {
    /// Whether the request was accepted.
    pub fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Owns the current index and the geometry it is validated against.
#[derive(Clone, Debug, Default)]
pub struct CarouselController {
    current_index: usize,
    geometry: Geometry,
}

impl CarouselController {
    /// Creates a controller at index zero with pre-measurement geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the leftmost visible slide.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Geometry the index is currently validated against.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Last valid index.
    pub fn max_index(&self) -> usize {
        self.geometry.max_index
    }

    /// Advances one slide unless already at `max_index`.
    pub fn next(&mut self) -> Transition {
        if self.current_index < self.geometry.max_index {
            self.move_to(self.current_index + 1)
        } else {
            Transition::AtBoundary
        }
    }

    /// Steps back one slide unless already at zero.
    pub fn prev(&mut self) -> Transition {
        if self.current_index > 0 {
            self.move_to(self.current_index - 1)
        } else {
            Transition::AtBoundary
        }
    }

    /// Jumps to `index` if it lies in `0..=max_index`.
    pub fn go_to(&mut self, index: isize) -> Transition {
        match usize::try_from(index) {
            Ok(index) if index <= self.geometry.max_index => self.move_to(index),
            _ => Transition::Rejected,
        }
    }

    /// Installs new geometry and pulls the index back inside the new bounds.
    ///
    /// Returns the index that was clamped away, if any.
    pub fn update_geometry(&mut self, geometry: Geometry) -> Option<usize> {
        self.geometry = geometry;
        if self.current_index > geometry.max_index {
            let stale = self.current_index;
            self.current_index = geometry.max_index;
            Some(stale)
        } else {
            None
        }
    }

    fn move_to(&mut self, index: usize) -> Transition {
        let from = self.current_index;
        self.current_index = index;
        Transition::Moved { from, to: index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(max_index: usize) -> CarouselController {
        let mut controller = CarouselController::new();
        controller.update_geometry(Geometry {
            slides_per_view: 3,
            slide_width: 400.0,
            max_index,
        });
        controller
    }

    #[test]
    fn next_stops_at_max_index() {
        let mut controller = controller(4);
        for expected in 1..=4 {
            assert_eq!(
                controller.next(),
                Transition::Moved {
                    from: expected - 1,
                    to: expected
                }
            );
        }
        assert_eq!(controller.next(), Transition::AtBoundary);
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn prev_stops_at_zero() {
        let mut controller = controller(4);
        assert_eq!(controller.prev(), Transition::AtBoundary);
        controller.next();
        assert!(controller.prev().is_moved());
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn go_to_rejects_instead_of_clamping() {
        let mut controller = controller(4);
        controller.go_to(2);
        assert_eq!(controller.go_to(5), Transition::Rejected);
        assert_eq!(controller.go_to(-1), Transition::Rejected);
        assert_eq!(controller.go_to(isize::MIN), Transition::Rejected);
        assert_eq!(controller.current_index(), 2);
        assert_eq!(controller.go_to(4), Transition::Moved { from: 2, to: 4 });
    }

    #[test]
    fn go_to_current_index_is_accepted() {
        let mut controller = controller(4);
        assert_eq!(controller.go_to(0), Transition::Moved { from: 0, to: 0 });
    }

    #[test]
    fn unmeasured_controller_cannot_move() {
        let mut controller = CarouselController::new();
        assert_eq!(controller.next(), Transition::AtBoundary);
        assert_eq!(controller.go_to(1), Transition::Rejected);
        assert_eq!(controller.go_to(0), Transition::Moved { from: 0, to: 0 });
    }

    #[test]
    fn shrinking_bounds_clamps_index() {
        let mut controller = controller(6);
        controller.go_to(6);
        let clamped = controller.update_geometry(Geometry {
            slides_per_view: 3,
            slide_width: 400.0,
            max_index: 4,
        });
        assert_eq!(clamped, Some(6));
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn growing_bounds_keeps_index() {
        let mut controller = controller(4);
        controller.go_to(4);
        let clamped = controller.update_geometry(Geometry {
            slides_per_view: 1,
            slide_width: 343.0,
            max_index: 6,
        });
        assert_eq!(clamped, None);
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn mixed_sequences_stay_in_bounds() {
        let mut controller = controller(4);
        for round in 0..40usize {
            match (round * 7 + 3) % 5 {
                0 => controller.next(),
                1 => controller.prev(),
                2 => controller.go_to(7),
                3 => controller.go_to(3),
                _ => controller.go_to(-3),
            };
            assert!(controller.current_index() <= controller.max_index());
        }
    }
}
