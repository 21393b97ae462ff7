//! # Vitrine UI
//!
//! The interactive features of the landing page, each a small state machine
//! over elements of a [`vitrine_core::Document`]:
//!
//! | feature                 | trigger                          |
//! |-------------------------|----------------------------------|
//! | [`MenuController`]      | toggle click, nav link click     |
//! | [`SmoothScroll`]        | in-page anchor click             |
//! | [`HeroSlider`]          | 5 s interval, buttons, dots      |
//! | [`TestimonialsCarousel`]| 3 s interval                     |
//! | [`setup_infinite_scroller`] | once at startup              |
//! | [`StatCounter`]         | first time stats are 50 % visible|
//! | [`ImageFadeIn`]         | image load                       |
//! | [`GalleryTabs`]         | tab button click                 |
//! | [`Lightbox`]            | open/close calls, backdrop, Esc  |
//!
//! ## Wiring
//!
//! Components never hold closures. At mount they register [`Action`]s in a
//! [`vitrine_core::ListenerStore`] and schedule [`Task`]s on a
//! [`vitrine_core::Scheduler`]; the page routes both back to the owning
//! component.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod animation;
pub mod components;
pub mod input;
pub mod markup;
pub mod wiring;

pub use animation::{Animation, Easing};
pub use components::{
    setup_infinite_scroller, CounterConfig, CounterTarget, GalleryTabs, HeroConfig, HeroSlider,
    ImageFadeIn, Lightbox, MarqueeConfig, MenuController, ScrollConfig, SlideNav, SmoothScroll,
    StatCounter, TestimonialsCarousel, TestimonialsConfig,
};
pub use input::Key;
pub use wiring::{Action, Task};
