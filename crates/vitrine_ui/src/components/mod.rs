//! Page features.
//!
//! Every component resolves its elements once in `mount`. If a required
//! element is absent, `mount` returns `Ok(None)` and the feature is off for
//! the lifetime of the page.

mod counter;
mod fade_in;
mod hero;
mod lightbox;
mod marquee;
mod menu;
mod smooth_scroll;
mod tabs;
mod testimonials;

pub use counter::{CounterConfig, CounterTarget, StatCounter};
pub use fade_in::ImageFadeIn;
pub use hero::{HeroConfig, HeroSlider, SlideNav};
pub use lightbox::Lightbox;
pub use marquee::{setup_infinite_scroller, MarqueeConfig};
pub use menu::MenuController;
pub use smooth_scroll::{ScrollConfig, SmoothScroll};
pub use tabs::GalleryTabs;
pub use testimonials::{TestimonialsCarousel, TestimonialsConfig};
