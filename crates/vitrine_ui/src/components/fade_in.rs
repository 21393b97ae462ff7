//! Image fade-in marker.

use vitrine_core::{Document, DomResult, EventKind, ListenerStore, ListenerTarget, NodeId};

use crate::markup;
use crate::wiring::Action;

/// Adds `loaded` to images as they finish loading.
#[derive(Debug, Clone, Default)]
pub struct ImageFadeIn {
    images: Vec<NodeId>,
}

impl ImageFadeIn {
    /// Registers a load listener on every image present at mount.
    ///
    /// # Errors
    ///
    /// Only on selector failures.
    pub fn mount(doc: &Document, listeners: &mut ListenerStore<Action>) -> DomResult<Self> {
        let images = doc.query_selector_all(markup::IMAGES)?;
        for &image in &images {
            listeners.add(ListenerTarget::Node(image), EventKind::Load, Action::ImageLoaded { image });
        }
        Ok(Self { images })
    }

    /// Returns the images being watched.
    #[must_use]
    pub fn images(&self) -> &[NodeId] {
        &self.images
    }

    /// Marks `image` as loaded.
    pub fn on_load(&self, doc: &mut Document, image: NodeId) {
        if let Some(el) = doc.get_mut(image) {
            el.add_class(markup::LOADED);
        }
    }
}
