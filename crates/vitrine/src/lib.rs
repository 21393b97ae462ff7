//! # Vitrine
//!
//! Headless interactivity for a single-page marketing site: mobile menu,
//! anchor scrolling, hero slider, testimonials carousel, logo and photo
//! marquees, stat counters, image fade-in, gallery tabs and a lightbox.
//!
//! The host owns rendering. It hands Vitrine a [`Document`] with layout boxes
//! filled in, then reports input and elapsed time; Vitrine updates classes,
//! attributes, inline styles and the scroll offset.
//!
//! ## Usage
//!
//! ```rust
//! use vitrine::{Document, Element, Page, PageConfig, Viewport};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let toggle = doc.append(body, Element::new("button").with_class("mobile-menu-toggle")).unwrap();
//! doc.append(body, Element::new("nav").with_class("nav-menu")).unwrap();
//!
//! let mut page = Page::ready(doc, Viewport::new(390.0, 844.0), PageConfig::default()).unwrap();
//! page.click(toggle).unwrap();
//! assert!(page.menu().unwrap().is_open());
//!
//! page.advance(5_000).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod globals;
pub mod page;

pub use config::PageConfig;
pub use error::{ConfigError, PageError, PageResult};
pub use globals::{close_lightbox, open_lightbox};
pub use page::Page;

pub use vitrine_core::{Document, Element, NodeId, Rect, Viewport};
pub use vitrine_ui::Key;
