//! Document model for the page.
//!
//! Elements live in a flat arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Detached nodes (fresh clones, created-but-not-appended
//! elements) stay in the arena but are invisible to queries.

mod document;
mod element;
mod selector;

pub use document::Document;
pub use element::{Element, NodeId};
pub use selector::Selector;
