use vitrine::{
    Carousel, CarouselConfig, CarouselEvent, Measurements, Point, RenderFrame, Transition,
};

const DESKTOP: Measurements = Measurements {
    viewport_width: 1280.0,
    container_width: Some(1248.0),
};
const MOBILE: Measurements = Measurements {
    viewport_width: 375.0,
    container_width: Some(343.0),
};

fn carousel(slides: usize, measurements: Measurements) -> Carousel<Vec<RenderFrame>> {
    Carousel::new(CarouselConfig::default(), slides, measurements, Vec::new())
        .expect("default config is valid")
}

fn assert_in_bounds(carousel: &Carousel<Vec<RenderFrame>>) {
    let state = carousel.state();
    assert!(state.current_index <= state.max_index);
    let frame = carousel.frame();
    let furthest = -(state.max_index as f32) * (state.slide_width + state.gap);
    assert!(frame.translate_x <= 0.0, "positive offset {}", frame.translate_x);
    assert!(
        frame.translate_x >= furthest,
        "offset {} past {furthest}",
        frame.translate_x
    );
}

#[test]
fn seven_slides_on_desktop_stop_at_four() {
    let mut carousel = carousel(7, DESKTOP);
    assert_eq!(carousel.state().slides_per_view, 3);
    assert_eq!(carousel.state().max_index, 4);

    for _ in 0..4 {
        assert!(carousel.next().is_moved());
    }
    assert_eq!(carousel.current_index(), 4);
    assert_eq!(carousel.next(), Transition::AtBoundary);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn go_to_past_either_end_is_rejected() {
    let mut carousel = carousel(7, DESKTOP);
    carousel.go_to(2);
    let max_index = carousel.state().max_index as isize;
    assert_eq!(carousel.go_to(max_index + 1), Transition::Rejected);
    assert_eq!(carousel.go_to(-1), Transition::Rejected);
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn swipe_scenarios() {
    let mut carousel = carousel(7, DESKTOP);

    carousel.dispatch(CarouselEvent::TouchStart(Point::new(300.0, 100.0)));
    carousel.dispatch(CarouselEvent::TouchEnd(Point::new(230.0, 105.0)));
    assert_eq!(carousel.current_index(), 1);

    carousel.dispatch(CarouselEvent::TouchStart(Point::new(300.0, 100.0)));
    carousel.dispatch(CarouselEvent::TouchEnd(Point::new(280.0, 40.0)));
    assert_eq!(carousel.current_index(), 1);

    carousel.dispatch(CarouselEvent::TouchStart(Point::new(100.0, 100.0)));
    carousel.dispatch(CarouselEvent::TouchEnd(Point::new(200.0, 110.0)));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn shrinking_to_mobile_keeps_index_valid() {
    let mut carousel = carousel(7, DESKTOP);
    carousel.go_to(4);

    carousel.dispatch(CarouselEvent::Resized(MOBILE));
    let state = carousel.state();
    assert_eq!(state.slides_per_view, 1);
    assert_eq!(state.max_index, 6);
    assert_eq!(state.current_index, 4);
    assert_in_bounds(&carousel);

    let frame = carousel.sink().last().copied().expect("resize renders");
    assert_eq!(frame.translate_x, -4.0 * (343.0 + 24.0));
    assert!(!frame.next_disabled);
}

#[test]
fn growing_to_desktop_clamps_index() {
    let mut carousel = carousel(7, MOBILE);
    carousel.go_to(6);

    carousel.resize(DESKTOP);
    assert_eq!(carousel.current_index(), 4);
    assert_in_bounds(&carousel);
    let frame = carousel.sink().last().copied().expect("resize renders");
    assert!(frame.next_disabled);
    assert_eq!(frame.active_indicator, 4);
}

#[test]
fn every_input_source_shares_one_index() {
    let mut carousel = carousel(7, MOBILE);
    carousel.dispatch(CarouselEvent::NextClicked);
    carousel.dispatch(CarouselEvent::MouseDown(500.0));
    carousel.dispatch(CarouselEvent::MouseMove);
    carousel.dispatch(CarouselEvent::MouseUp(400.0));
    carousel.dispatch(CarouselEvent::TouchStart(Point::new(300.0, 200.0)));
    carousel.dispatch(CarouselEvent::TouchEnd(Point::new(200.0, 210.0)));
    assert_eq!(carousel.current_index(), 3);

    carousel.dispatch(CarouselEvent::PrevClicked);
    carousel.dispatch(CarouselEvent::IndicatorClicked(0));
    assert_eq!(carousel.current_index(), 0);
    assert_in_bounds(&carousel);
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut first = carousel(7, DESKTOP);
    let second = carousel(7, DESKTOP);
    first.next();
    assert_eq!(first.current_index(), 1);
    assert_eq!(second.current_index(), 0);
}
