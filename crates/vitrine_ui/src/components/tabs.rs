//! Gallery tab selection.

use vitrine_core::{Document, DomResult, EventKind, ListenerStore, ListenerTarget, NodeId};

use crate::markup;
use crate::wiring::Action;

/// Single selection over the gallery's tab buttons and panes.
///
/// Buttons name their pane by id through `data-tab`. A button whose pane is
/// missing still becomes active; no pane is shown.
#[derive(Debug, Clone)]
pub struct GalleryTabs {
    buttons: Vec<NodeId>,
    panes: Vec<NodeId>,
    active: Option<NodeId>,
}

impl GalleryTabs {
    /// Collects buttons and panes and registers a click listener per button.
    ///
    /// # Errors
    ///
    /// Only on selector failures.
    pub fn mount(doc: &Document, listeners: &mut ListenerStore<Action>) -> DomResult<Option<Self>> {
        let buttons = doc.query_selector_all(markup::TAB_BUTTONS)?;
        if buttons.is_empty() {
            return Ok(None);
        }
        let panes = doc.query_selector_all(markup::TAB_PANES)?;

        for &button in &buttons {
            listeners.add(ListenerTarget::Node(button), EventKind::Click, Action::TabSelected { button });
        }
        let active = buttons
            .iter()
            .copied()
            .find(|&b| doc.get(b).is_some_and(|el| el.has_class(markup::ACTIVE)));

        tracing::debug!(buttons = buttons.len(), panes = panes.len(), "gallery tabs mounted");
        Ok(Some(Self {
            buttons,
            panes,
            active,
        }))
    }

    /// Returns the selected button, if any.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Selects `button`. Returns the pane shown, if its `data-tab` resolved.
    pub fn select(&mut self, doc: &mut Document, button: NodeId) -> Option<NodeId> {
        if !self.buttons.contains(&button) {
            return None;
        }
        for &node in self.buttons.iter().chain(&self.panes) {
            if let Some(el) = doc.get_mut(node) {
                el.remove_class(markup::ACTIVE);
            }
        }

        let pane_id = doc.get(button)?.data(markup::TAB_TARGET_DATA).map(str::to_owned);
        if let Some(el) = doc.get_mut(button) {
            el.add_class(markup::ACTIVE);
        }
        self.active = Some(button);

        let pane = pane_id.and_then(|id| doc.get_element_by_id(&id));
        match pane {
            Some(pane) => {
                if let Some(el) = doc.get_mut(pane) {
                    el.add_class(markup::ACTIVE);
                }
            }
            None => tracing::debug!(%button, "tab has no matching pane"),
        }
        pane
    }
}
