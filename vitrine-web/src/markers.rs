//! Attribute markers and classes that identify carousel parts in storefront
//! markup.
//!
//! ```html
//! <section>
//!   <div data-carousel data-carousel-config='{"gap": 16}'>
//!     <div data-carousel-container>
//!       <div data-carousel-slide>...</div>
//!     </div>
//!   </div>
//!   <button data-carousel-prev>Previous</button>
//!   <button data-carousel-next>Next</button>
//!   <button data-carousel-indicator></button>
//! </section>
//! ```

/// Carousel root; one carousel is attached per match.
pub const CONTAINER: &str = "[data-carousel]";
/// The element that is measured and translated to page through slides.
pub const TRACK: &str = "[data-carousel-container]";
/// One slide.
pub const SLIDE: &str = "[data-carousel-slide]";
/// Previous button.
pub const PREV: &str = "[data-carousel-prev]";
/// Next button.
pub const NEXT: &str = "[data-carousel-next]";
/// Indicator dots, in slide order.
pub const INDICATOR: &str = "[data-carousel-indicator]";
/// Structural element whose controls belong to the carousel inside it.
pub const SECTION: &str = "section";
/// Attribute holding per-container JSON configuration overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-carousel-config";
/// Class carried by the active indicator.
pub const INDICATOR_ACTIVE_CLASS: &str = "bg-primary";
/// Class carried by every other indicator.
pub const INDICATOR_INACTIVE_CLASS: &str = "bg-muted";
/// Class that dims a disabled button.
pub const DIMMED_CLASS: &str = "opacity-50";
