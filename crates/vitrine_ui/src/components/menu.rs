//! Mobile navigation drawer.

use vitrine_core::{Document, DomResult, EventKind, ListenerStore, ListenerTarget, NodeId};

use crate::markup;
use crate::wiring::Action;

/// Open/closed state of the drawer, mirrored onto three elements.
///
/// The toggle button, the drawer and the body always change in the same
/// call: toggle and drawer get `active`, body gets `no-scroll`.
#[derive(Debug, Clone)]
pub struct MenuController {
    toggle: NodeId,
    panel: NodeId,
    body: NodeId,
    open: bool,
}

impl MenuController {
    /// Resolves the toggle and drawer, registering the toggle and nav link listeners.
    ///
    /// # Errors
    ///
    /// Only on selector failures, which indicate a broken markup contract.
    pub fn mount(doc: &Document, listeners: &mut ListenerStore<Action>) -> DomResult<Option<Self>> {
        let (Some(toggle), Some(panel)) = (
            doc.query_selector(markup::MENU_TOGGLE)?,
            doc.query_selector(markup::NAV_MENU)?,
        ) else {
            tracing::debug!("menu toggle or nav panel missing, mobile menu disabled");
            return Ok(None);
        };

        listeners.add(ListenerTarget::Node(toggle), EventKind::Click, Action::ToggleMenu);
        for link in doc.query_selector_all(markup::NAV_LINKS)? {
            listeners.add(ListenerTarget::Node(link), EventKind::Click, Action::NavLinkClicked);
        }

        let open = doc.get(panel).is_some_and(|el| el.has_class(markup::ACTIVE));
        Ok(Some(Self {
            toggle,
            panel,
            body: doc.body(),
            open,
        }))
    }

    /// Returns true if the drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the drawer and the scroll lock together.
    pub fn toggle(&mut self, doc: &mut Document) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "menu toggled");
        self.apply(doc);
    }

    /// Closes the drawer if it is open. Returns true if anything changed.
    pub fn close(&mut self, doc: &mut Document) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.apply(doc);
        true
    }

    fn apply(&self, doc: &mut Document) {
        for (node, class) in [
            (self.toggle, markup::ACTIVE),
            (self.panel, markup::ACTIVE),
            (self.body, markup::NO_SCROLL),
        ] {
            if let Some(el) = doc.get_mut(node) {
                el.set_class(class, self.open);
            }
        }
    }
}
