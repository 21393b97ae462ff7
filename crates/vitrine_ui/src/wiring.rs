//! Listener actions and scheduler tasks.
//!
//! These are the only values that cross from the core registries back into
//! the components. Each variant names the component that handles it.

use vitrine_core::NodeId;

/// What a registered listener asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Menu toggle button clicked.
    ToggleMenu,
    /// A link inside the navigation drawer clicked.
    NavLinkClicked,
    /// An in-page anchor clicked.
    AnchorClicked {
        /// The anchor element carrying the `href`.
        anchor: NodeId,
    },
    /// Hero "previous" button.
    HeroPrev,
    /// Hero "next" button.
    HeroNext,
    /// Hero indicator dot.
    HeroDot(usize),
    /// Pointer entered the hero slider.
    HeroPause,
    /// Pointer left the hero slider.
    HeroResume,
    /// Pointer entered the testimonials carousel.
    TestimonialsPause,
    /// Pointer left the testimonials carousel.
    TestimonialsResume,
    /// An image finished loading.
    ImageLoaded {
        /// The image element.
        image: NodeId,
    },
    /// A gallery tab button clicked.
    TabSelected {
        /// The button element.
        button: NodeId,
    },
    /// A click reached the lightbox container.
    LightboxClicked,
    /// A key went down anywhere on the page.
    LightboxKey,
}

/// Deferred work on the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Hero autoplay interval tick.
    HeroAdvance,
    /// Grace delay after manual hero navigation has elapsed.
    HeroResume,
    /// Testimonials autoplay interval tick.
    TestimonialsAdvance,
    /// Next step of the stat counter in the given slot.
    CounterStep(usize),
    /// Next frame of the smooth-scroll animation.
    ScrollFrame,
}
