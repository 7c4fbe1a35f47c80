//! DOM binding: discovery, event wiring and frame application.

use std::{cell::RefCell, rc::Rc};

use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, warn};
use vitrine::{Carousel, CarouselEvent, Measurements, Point, RenderFrame, RenderSink};
use wasm_bindgen::{JsCast, JsError, prelude::wasm_bindgen};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, MouseEvent, NodeList,
    Touch, TouchEvent, Window,
};

use crate::{
    controls::{ButtonState, ControlStates, dom_write, track_measurements},
    markers,
    overrides::resolve_config,
    shared::SharedCarousel,
};

thread_local! {
    static ATTACHED: RefCell<Vec<CarouselHandle>> = const { RefCell::new(Vec::new()) };
}

/// Where a carousel looks for its controls.
enum Scope {
    Section(Element),
    Document(Document),
}

impl Scope {
    fn for_container(container: &Element, document: Document) -> Self {
        match container.closest(markers::SECTION) {
            Ok(Some(section)) => Self::Section(section),
            _ => Self::Document(document),
        }
    }

    fn first(&self, selector: &str) -> Option<HtmlElement> {
        let found = match self {
            Self::Section(section) => section.query_selector(selector),
            Self::Document(document) => document.query_selector(selector),
        };
        found.ok().flatten()?.dyn_into::<HtmlElement>().ok()
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        let found = match self {
            Self::Section(section) => section.query_selector_all(selector),
            Self::Document(document) => document.query_selector_all(selector),
        };
        found.map(html_elements).unwrap_or_default()
    }
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|position| list.get(position))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Applies frames to the carousel's elements.
struct DomSink {
    container: HtmlElement,
    track: HtmlElement,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    indicators: Vec<HtmlElement>,
}

impl RenderSink for DomSink {
    fn render(&mut self, frame: &RenderFrame) {
        let states = ControlStates::for_frame(frame, self.indicators.len());
        dom_write(
            self.track.style().set_property("transform", &frame.transform_css()),
            "track transform",
        );
        dom_write(
            self.container
                .style()
                .set_property("cursor", frame.cursor.as_css()),
            "cursor",
        );
        set_button_state(self.prev.as_ref(), states.prev);
        set_button_state(self.next.as_ref(), states.next);

        for (indicator, state) in self.indicators.iter().zip(states.indicators) {
            toggle_classes(indicator, &state.class_toggles());
            dom_write(
                indicator.set_attribute("aria-selected", state.aria_selected()),
                "aria-selected",
            );
        }
    }
}

fn toggle_classes(element: &HtmlElement, toggles: &[(&'static str, bool)]) {
    let classes = element.class_list();
    for &(class, present) in toggles {
        dom_write(classes.toggle_with_force(class, present), class);
    }
}

fn set_button_state(button: Option<&HtmlElement>, state: ButtonState) {
    let Some(button) = button else {
        return;
    };
    match button.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(state.disabled),
        None => {
            dom_write(
                button.set_attribute("aria-disabled", state.aria_disabled()),
                "aria-disabled",
            );
        }
    }
    toggle_classes(button, &state.class_toggles());
}

struct Attached {
    root: Element,
    carousel: SharedCarousel<DomSink>,
    _listeners: Vec<EventListener>,
}

/// A carousel attached to the page, exported to JavaScript as `Carousel`.
///
/// Handles are cheap clones of one attachment. The page keeps every
/// attachment alive until [`CarouselHandle::detach`] is called on it.
#[wasm_bindgen(js_name = Carousel)]
#[derive(Clone)]
pub struct CarouselHandle {
    inner: Rc<Attached>,
}

#[wasm_bindgen(js_class = Carousel)]
impl CarouselHandle {
    /// Attaches to `element`, or returns the carousel already attached to it.
    #[wasm_bindgen(constructor)]
    pub fn new(element: &Element) -> Result<CarouselHandle, JsError> {
        attach(element).ok_or_else(|| JsError::new("element is not a carousel"))
    }

    /// Carousel previously attached to `element`, if any.
    #[wasm_bindgen(js_name = forElement)]
    pub fn for_element(element: &Element) -> Option<CarouselHandle> {
        ATTACHED.with(|attached| {
            attached
                .borrow()
                .iter()
                .find(|handle| handle.inner.root.is_same_node(Some(element.as_ref())))
                .cloned()
        })
    }

    /// Advances one slide. Returns whether the index changed.
    pub fn next(&self) -> bool {
        self.inner.carousel.next()
    }

    /// Steps back one slide. Returns whether the index changed.
    pub fn prev(&self) -> bool {
        self.inner.carousel.prev()
    }

    /// Jumps to `index` if it is in range. Returns whether it was accepted.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: i32) -> bool {
        self.inner.carousel.go_to(index)
    }

    /// Index of the leftmost visible slide.
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.inner.carousel.current_index()
    }

    /// Removes the carousel's listeners once no other handle refers to it.
    pub fn detach(&self) {
        ATTACHED.with(|attached| {
            attached
                .borrow_mut()
                .retain(|handle| !Rc::ptr_eq(&handle.inner, &self.inner));
        });
    }
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

fn measure(window: &Window, track: &HtmlElement) -> Measurements {
    track_measurements(viewport_width(window), track.offset_width())
}

fn first_touch(event: &TouchEvent, changed: bool) -> Option<Point> {
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch: Touch| {
        Point::new(touch.client_x() as f32, touch.client_y() as f32)
    })
}

fn listen<F>(
    target: &EventTarget,
    kind: &'static str,
    passive: bool,
    carousel: &SharedCarousel<DomSink>,
    translate: F,
) -> EventListener
where
    F: Fn(&Event) -> Option<CarouselEvent> + 'static,
{
    let carousel = carousel.clone();
    let options = if passive {
        EventListenerOptions::default()
    } else {
        EventListenerOptions::enable_prevent_default()
    };
    EventListener::new_with_options(target, kind, options, move |event: &Event| {
        let Some(input) = translate(event) else {
            return;
        };
        let response = carousel.dispatch(input);
        if response.prevent_default {
            event.prevent_default();
        }
    })
}

/// Attaches a carousel to one container element.
///
/// Returns `None` when the container has no track or the page is not
/// reachable; missing buttons and indicators are simply not wired. A
/// container that already carries a carousel gets its existing handle back.
pub fn attach(container: &Element) -> Option<CarouselHandle> {
    if let Some(existing) = CarouselHandle::for_element(container) {
        return Some(existing);
    }
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = container.clone();
    let container = root.clone().dyn_into::<HtmlElement>().ok()?;
    let Some(track) = container
        .query_selector(markers::TRACK)
        .ok()
        .flatten()
        .and_then(|track| track.dyn_into::<HtmlElement>().ok())
    else {
        debug!("carousel container has no track; skipping");
        return None;
    };
    let slide_count = container
        .query_selector_all(markers::SLIDE)
        .map(|slides| slides.length() as usize)
        .unwrap_or_default();

    let scope = Scope::for_container(&container, document.clone());
    let sink = DomSink {
        container: container.clone(),
        track: track.clone(),
        prev: scope.first(markers::PREV),
        next: scope.first(markers::NEXT),
        indicators: scope.all(markers::INDICATOR),
    };
    let prev = sink.prev.clone();
    let next = sink.next.clone();
    let indicators = sink.indicators.clone();

    let config = resolve_config(container.get_attribute(markers::CONFIG_ATTRIBUTE).as_deref());
    let carousel = match Carousel::new(config, slide_count, measure(&window, &track), sink) {
        Ok(carousel) => SharedCarousel::new(carousel),
        Err(err) => {
            warn!(%err, "carousel config rejected");
            return None;
        }
    };
    debug!(slide_count, indicators = indicators.len(), "carousel attached");

    let mut listeners = vec![
        listen(&container, "touchstart", true, &carousel, |event| {
            let event = event.dyn_ref::<TouchEvent>()?;
            first_touch(event, false).map(CarouselEvent::TouchStart)
        }),
        listen(&container, "touchmove", false, &carousel, |event| {
            let event = event.dyn_ref::<TouchEvent>()?;
            first_touch(event, false).map(CarouselEvent::TouchMove)
        }),
        listen(&container, "touchend", true, &carousel, |event| {
            let event = event.dyn_ref::<TouchEvent>()?;
            first_touch(event, true).map(CarouselEvent::TouchEnd)
        }),
        listen(&container, "touchcancel", true, &carousel, |_| {
            Some(CarouselEvent::TouchCancel)
        }),
        listen(&container, "mousedown", true, &carousel, |event| {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(CarouselEvent::MouseDown(event.client_x() as f32))
        }),
        // document level so a drag released outside the carousel still resolves
        listen(&document, "mousemove", false, &carousel, |_| {
            Some(CarouselEvent::MouseMove)
        }),
        listen(&document, "mouseup", true, &carousel, |event| {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(CarouselEvent::MouseUp(event.client_x() as f32))
        }),
    ];

    let resize_window = window.clone();
    listeners.push(listen(&window, "resize", true, &carousel, move |_| {
        Some(CarouselEvent::Resized(measure(&resize_window, &track)))
    }));

    if let Some(prev) = prev {
        listeners.push(listen(&prev, "click", true, &carousel, |_| {
            Some(CarouselEvent::PrevClicked)
        }));
    }
    if let Some(next) = next {
        listeners.push(listen(&next, "click", true, &carousel, |_| {
            Some(CarouselEvent::NextClicked)
        }));
    }
    for (position, indicator) in indicators.iter().enumerate() {
        listeners.push(listen(indicator, "click", true, &carousel, move |_| {
            Some(CarouselEvent::IndicatorClicked(position))
        }));
    }

    let handle = CarouselHandle {
        inner: Rc::new(Attached {
            root,
            carousel,
            _listeners: listeners,
        }),
    };
    ATTACHED.with(|attached| attached.borrow_mut().push(handle.clone()));
    Some(handle)
}

/// Attaches a carousel to every container in the document.
pub fn attach_all() -> Vec<CarouselHandle> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Ok(containers) = document.query_selector_all(markers::CONTAINER) else {
        return Vec::new();
    };
    (0..containers.length())
        .filter_map(|position| containers.get(position))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|container| attach(&container))
        .collect()
}

/// Module entry: attaches every carousel once the document is ready.
///
/// Page scripts reach the auto-attached carousels through
/// `Carousel.forElement(element)`.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        attach_on_ready();
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", |_| attach_on_ready()).forget();
}

fn attach_on_ready() {
    let count = attach_all().len();
    debug!(count, "carousels attached");
}
