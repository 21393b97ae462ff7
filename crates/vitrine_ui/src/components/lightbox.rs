//! Image lightbox modal.

use vitrine_core::{Document, EventKind, ListenerStore, ListenerTarget, NodeId};

use crate::input::Key;
use crate::markup;
use crate::wiring::Action;

/// Full-screen image viewer with backdrop and Escape dismissal.
///
/// Visibility is the container's `display` style. Opening locks page
/// scrolling with the same body class the mobile menu uses.
#[derive(Debug, Clone)]
pub struct Lightbox {
    container: NodeId,
    image: Option<NodeId>,
    body: NodeId,
}

impl Lightbox {
    /// Resolves `#lightbox` and registers the backdrop and key listeners.
    #[must_use]
    pub fn mount(doc: &Document, listeners: &mut ListenerStore<Action>) -> Option<Self> {
        let Some(container) = doc.get_element_by_id(markup::LIGHTBOX_ID) else {
            tracing::debug!("lightbox missing");
            return None;
        };
        listeners.add(ListenerTarget::Node(container), EventKind::Click, Action::LightboxClicked);
        listeners.add(ListenerTarget::Document, EventKind::KeyDown, Action::LightboxKey);

        Some(Self {
            container,
            image: doc.get_element_by_id(markup::LIGHTBOX_IMAGE_ID),
            body: doc.body(),
        })
    }

    /// Returns the backdrop element.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Returns true while the modal is shown.
    #[must_use]
    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.get(self.container).and_then(|el| el.style("display")) == Some("block")
    }

    /// Shows `src` and locks page scrolling.
    pub fn open(&self, doc: &mut Document, src: &str) {
        if let Some(img) = self.image {
            if let Some(el) = doc.get_mut(img) {
                el.set_attr("src", src);
            }
        }
        self.set_shown(doc, true);
        tracing::debug!(src, "lightbox opened");
    }

    /// Hides the modal and unlocks page scrolling.
    pub fn close(&self, doc: &mut Document) {
        self.set_shown(doc, false);
    }

    /// Click that bubbled to the container. Closes only if it hit the backdrop itself.
    pub fn on_click(&self, doc: &mut Document, target: NodeId) -> bool {
        if target != self.container {
            return false;
        }
        self.close(doc);
        true
    }

    /// Escape closes the modal while it is shown.
    pub fn on_key(&self, doc: &mut Document, key: Key) -> bool {
        if key != Key::Escape || !self.is_visible(doc) {
            return false;
        }
        self.close(doc);
        true
    }

    fn set_shown(&self, doc: &mut Document, shown: bool) {
        if let Some(el) = doc.get_mut(self.container) {
            el.set_style("display", if shown { "block" } else { "none" });
        }
        if let Some(body) = doc.get_mut(self.body) {
            body.set_class(markup::NO_SCROLL, shown);
        }
    }
}
