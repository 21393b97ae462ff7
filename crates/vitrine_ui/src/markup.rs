//! # Markup Contract
//!
//! Class names, ids and selectors the page markup and stylesheet agree on.
//!
//! **CRITICAL:** renaming any of these in the markup silently disables the
//! matching feature. There is no error to catch it.

// =============================================================================
// STATE CLASSES
// =============================================================================

/// Marks the selected slide, dot, tab, pane, open menu and its toggle.
pub const ACTIVE: &str = "active";

/// Body class that freezes page scrolling under the menu or lightbox.
pub const NO_SCROLL: &str = "no-scroll";

/// Added to an image once it has loaded.
pub const LOADED: &str = "loaded";

// =============================================================================
// MENU & ANCHORS
// =============================================================================

/// Hamburger button.
pub const MENU_TOGGLE: &str = ".mobile-menu-toggle";

/// Navigation drawer.
pub const NAV_MENU: &str = ".nav-menu";

/// Links inside the drawer.
pub const NAV_LINKS: &str = ".nav-menu a";

/// In-page anchors.
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

// =============================================================================
// HERO SLIDER
// =============================================================================

/// Slider region (hover pauses autoplay).
pub const HERO_SLIDER: &str = ".hero-slider";

/// Individual slides.
pub const HERO_SLIDES: &str = ".hero-slide";

/// Container the indicator dots are generated into.
pub const SLIDER_DOTS: &str = ".slider-dots";

/// Class given to each generated dot.
pub const SLIDER_DOT_CLASS: &str = "slider-dot";

/// Previous-slide button.
pub const SLIDER_PREV: &str = ".slider-btn.prev";

/// Next-slide button.
pub const SLIDER_NEXT: &str = ".slider-btn.next";

// =============================================================================
// TESTIMONIALS
// =============================================================================

/// Carousel region (hover pauses autoplay).
pub const TESTIMONIALS: &str = ".testimonials-carousel";

/// The translated strip.
pub const TESTIMONIALS_TRACK: &str = ".testimonials-track";

/// Cards; the last one duplicates the first.
pub const TESTIMONIAL_CARDS: &str = ".testimonial-card";

// =============================================================================
// MARQUEES
// =============================================================================

/// "Who we are" photo strip.
pub const WHO_IMAGES: &str = ".who-images-slider";

/// Partner logo strip.
pub const LOGO_TRACK: &str = ".logo-track";

// =============================================================================
// STATS, IMAGES, TABS, LIGHTBOX
// =============================================================================

/// Stats section id.
pub const IMPACT_STATS_ID: &str = "impact-stats";

/// Animated numbers.
pub const STAT_NUMBERS: &str = ".stat-number";

/// Every image fades in.
pub const IMAGES: &str = "img";

/// Gallery tab buttons; `data-tab` names the pane id.
pub const TAB_BUTTONS: &str = ".tab-btn";

/// Gallery panes.
pub const TAB_PANES: &str = ".tab-pane";

/// Attribute suffix read from tab buttons (`data-tab`).
pub const TAB_TARGET_DATA: &str = "tab";

/// Lightbox backdrop id.
pub const LIGHTBOX_ID: &str = "lightbox";

/// Lightbox image id.
pub const LIGHTBOX_IMAGE_ID: &str = "lightbox-img";
