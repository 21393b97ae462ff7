//! # Vitrine Core
//!
//! The page model every Vitrine feature operates on:
//! - A [`Document`] arena of elements with classes, attributes, inline style
//!   and host-provided layout boxes
//! - A [`Viewport`] with a clamped vertical scroll offset
//! - A [`ListenerStore`] mapping (target, event kind) pairs to actions
//! - A [`Scheduler`] driven by a virtual clock
//! - A [`VisibilityObserver`] reporting threshold crossings
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        PAGE MODEL                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  Host Input → Listeners → Actions → Document / Viewport    │
//! │  Host Time  → Scheduler → Tasks   → Document / Viewport    │
//! │  Scroll     → VisibilityObserver  → Entries                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here knows what a slider or a lightbox is. Listener actions and
//! scheduler tasks are generic, so the feature layer picks its own vocabulary.
//!
//! ## Example
//!
//! ```rust
//! use vitrine_core::{Document, Element};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! let menu = doc.append(body, Element::new("nav").with_class("nav-menu")).unwrap();
//! assert_eq!(doc.query_selector(".nav-menu").unwrap(), Some(menu));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod observer;
pub mod scheduler;
pub mod viewport;

pub use dom::{Document, Element, NodeId, Selector};
pub use error::{DomError, DomResult, SchedulerError};
pub use events::{Event, EventKind, ListenerId, ListenerStore, ListenerTarget};
pub use geometry::Rect;
pub use observer::{VisibilityEntry, VisibilityObserver};
pub use scheduler::{Fired, PendingTimer, Scheduler, TimerId};
pub use viewport::Viewport;
