//! Document arena and tree operations.

use super::{Element, NodeId, Selector};
use crate::error::{DomError, DomResult};

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The page: an arena of elements rooted at `body`.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Document {
    /// Creates a document holding only an empty `body`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                element: Element::new("body"),
                parent: None,
                children: Vec::new(),
            }],
            body: NodeId(0),
        }
    }

    /// Returns the body element.
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the number of nodes in the arena, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document holds only its body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Adds a detached element to the arena.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Creates an element and appends it as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if `parent` is not in this document.
    pub fn append(&mut self, parent: NodeId, element: Element) -> DomResult<NodeId> {
        self.node(parent)?;
        let child = self.create_element(element);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Moves `child` to the end of `parent`'s children, detaching it first.
    ///
    /// # Errors
    ///
    /// Fails on unknown ids or when `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::CyclicAppend { parent, child });
        }

        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Detaches a node from its parent. The subtree stays in the arena.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for ids outside this document.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        self.node(id)?;
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Deep-clones a subtree. The clone is detached.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for ids outside this document.
    pub fn clone_subtree(&mut self, id: NodeId) -> DomResult<NodeId> {
        let element = self.node(id)?.element.clone();
        let children = self.nodes[id.0].children.clone();

        let copy = self.create_element(element);
        for child in children {
            let child_copy = self.clone_subtree(child)?;
            self.nodes[child_copy.0].parent = Some(copy);
            self.nodes[copy.0].children.push(child_copy);
        }
        Ok(copy)
    }

    /// Gets an element by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0).map(|n| &n.element)
    }

    /// Gets mutable access to an element.
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).map(|n| &mut n.element)
    }

    /// Gets an element, failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for ids outside this document.
    pub fn element(&self, id: NodeId) -> DomResult<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Gets mutable access to an element, failing on unknown ids.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for ids outside this document.
    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut Element> {
        self.nodes
            .get_mut(id.0)
            .map(|n| &mut n.element)
            .ok_or(DomError::UnknownNode(id))
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Returns the children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `node` is `ancestor` or lies beneath it.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.parent(id);
        }
        false
    }

    /// Returns true if the node is attached under `body`.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.body, id)
    }

    /// Returns the propagation path: the node itself, then each ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] for ids outside this document.
    pub fn event_path(&self, id: NodeId) -> DomResult<Vec<NodeId>> {
        self.node(id)?;
        let mut path = vec![id];
        let mut cursor = self.parent(id);
        while let Some(parent) = cursor {
            path.push(parent);
            cursor = self.parent(parent);
        }
        Ok(path)
    }

    /// Returns the subtree below `root` in document order, `root` excluded.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            out.push(id);
            // Push children in reverse order so they're visited left-to-right
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Returns the first connected element matching the selector.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnsupportedSelector`] for unparseable selectors.
    pub fn query_selector(&self, selector: &str) -> DomResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self.connected().find(|&id| selector.matches(self, id)))
    }

    /// Returns every connected element matching the selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnsupportedSelector`] for unparseable selectors.
    pub fn query_selector_all(&self, selector: &str) -> DomResult<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .connected()
            .filter(|&id| selector.matches(self, id))
            .collect())
    }

    /// Returns the first connected element whose `id` attribute equals `id`.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.connected()
            .find(|&node| self.nodes[node.0].element.id() == Some(id))
    }

    fn connected(&self) -> impl Iterator<Item = NodeId> {
        std::iter::once(self.body).chain(self.descendants(self.body))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
