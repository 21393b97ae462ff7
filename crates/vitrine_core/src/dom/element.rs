//! Element data: tag, attributes, classes, inline style, text, layout box.

use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::Rect;

/// Unique identifier for a node in a [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A single element.
///
/// Classes are kept as an ordered list without duplicates, mirroring a
/// `classList`. The `class` attribute is not tracked separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    text: String,
    layout: Rect,
}

impl Element {
    /// Creates an empty element with the given tag name (lowercased).
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            text: String::new(),
            layout: Rect::ZERO,
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.set_attr("id", id);
        self
    }

    /// Adds a class. Whitespace-separated lists are split.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    /// Sets the layout box.
    #[must_use]
    pub fn with_layout(mut self, layout: Rect) -> Self {
        self.layout = layout;
        self
    }

    /// Returns the lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the `id` attribute, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Sets an attribute value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_ascii_lowercase(), value.to_owned());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(&name.to_ascii_lowercase())
    }

    /// Returns a `data-*` attribute by its suffix (`data("tab")` reads `data-tab`).
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attrs.get(&format!("data-{key}")).map(String::as_str)
    }

    /// Returns the classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if the element carries the class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Removes a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggles a class. Returns true if the class is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.classes.push(class.to_owned());
            true
        }
    }

    /// Adds or removes a class depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Returns an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Sets an inline style property.
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_owned(), value.to_owned());
    }

    /// Returns the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the layout box in document coordinates.
    #[must_use]
    pub fn layout(&self) -> Rect {
        self.layout
    }

    /// Replaces the layout box.
    pub fn set_layout(&mut self, layout: Rect) {
        self.layout = layout;
    }

    /// Returns the laid-out width, the analogue of `offsetWidth`.
    #[must_use]
    pub fn offset_width(&self) -> f64 {
        self.layout.width
    }
}
