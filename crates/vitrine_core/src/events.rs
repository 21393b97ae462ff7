//! # Listener Registry
//!
//! Handlers are registered explicitly per (target, event kind) and carry a
//! caller-defined action value instead of a closure. Dispatch returns the
//! actions to run; the caller owns the state they act on.
//!
//! ```text
//! click(node) → event_path(node) → [node, parent, …, body, Document]
//!                                         ↓
//!                        actions registered on each hop, in order
//! ```

use crate::dom::NodeId;

/// Interaction types the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary-button activation.
    Click,
    /// Keyboard key pressed.
    KeyDown,
    /// Resource finished loading.
    Load,
    /// Pointer moved onto the element.
    PointerEnter,
    /// Pointer moved off the element.
    PointerLeave,
}

impl EventKind {
    /// Returns true if the event propagates from the target up to the document.
    #[must_use]
    pub const fn bubbles(self) -> bool {
        matches!(self, Self::Click | Self::KeyDown)
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// A single element.
    Node(NodeId),
    /// The document itself, last stop of every bubbling event.
    Document,
}

/// Handle for removing a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// An event in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Interaction type.
    pub kind: EventKind,
    /// Element the event was fired at. `None` for document-level events.
    pub target: Option<NodeId>,
    default_prevented: bool,
}

impl Event {
    /// Creates an event.
    #[must_use]
    pub const fn new(kind: EventKind, target: Option<NodeId>) -> Self {
        Self {
            kind,
            target,
            default_prevented: false,
        }
    }

    /// Suppresses the host's default behavior (e.g. jumping to an anchor).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true if a handler suppressed the default behavior.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone)]
struct Listener<A> {
    id: ListenerId,
    target: ListenerTarget,
    kind: EventKind,
    action: A,
}

/// Registry of listeners carrying actions of type `A`.
#[derive(Debug, Clone)]
pub struct ListenerStore<A> {
    listeners: Vec<Listener<A>>,
    next_id: u64,
}

impl<A: Clone> ListenerStore<A> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a listener. Listeners on the same hop run in registration order.
    pub fn add(&mut self, target: ListenerTarget, kind: EventKind, action: A) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            target,
            kind,
            action,
        });
        id
    }

    /// Unregisters a listener. Returns false if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Returns the ids of the listeners registered for one hop, in order.
    #[must_use]
    pub fn find(&self, target: ListenerTarget, kind: EventKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.id)
            .collect()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Returns the actions registered for one hop.
    pub fn actions_for(
        &self,
        target: ListenerTarget,
        kind: EventKind,
    ) -> impl Iterator<Item = &A> + '_ {
        self.listeners
            .iter()
            .filter(move |l| l.target == target && l.kind == kind)
            .map(|l| &l.action)
    }

    /// Snapshots the actions an event reaches along its propagation path.
    ///
    /// `path` is the target followed by its ancestors. Non-bubbling events
    /// only visit the first hop; bubbling ones finish at the document.
    #[must_use]
    pub fn collect(&self, kind: EventKind, path: &[NodeId]) -> Vec<A> {
        let hops = if kind.bubbles() { path.len() } else { path.len().min(1) };
        let mut actions: Vec<A> = path[..hops]
            .iter()
            .flat_map(|&node| self.actions_for(ListenerTarget::Node(node), kind))
            .cloned()
            .collect();

        if kind.bubbles() || path.is_empty() {
            actions.extend(self.actions_for(ListenerTarget::Document, kind).cloned());
        }
        actions
    }
}

impl<A: Clone> Default for ListenerStore<A> {
    fn default() -> Self {
        Self::new()
    }
}
