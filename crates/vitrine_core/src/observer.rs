//! # Visibility Observer
//!
//! A platform-independent `IntersectionObserver`: watches elements, and on
//! each [`check`](VisibilityObserver::check) reports those whose visibility
//! crossed the threshold since the previous check.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};
use crate::viewport::Viewport;

/// One threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    /// The observed element.
    pub target: NodeId,
    /// Visible fraction of the element's layout box.
    pub ratio: f64,
    /// True if the ratio is at or above the threshold.
    pub is_intersecting: bool,
}

/// Watches elements against a single visibility threshold.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f64,
    /// Observed targets and whether they were above the threshold last check.
    /// `None` means not checked yet, so the first check always reports.
    targets: HashMap<NodeId, Option<bool>>,
    order: Vec<NodeId>,
}

impl VisibilityObserver {
    /// Creates an observer. The threshold is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            targets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns the threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching an element. Re-observing is a no-op.
    pub fn observe(&mut self, target: NodeId) {
        if !self.targets.contains_key(&target) {
            self.targets.insert(target, None);
            self.order.push(target);
        }
    }

    /// Stops watching an element. Returns false if it was not observed.
    pub fn unobserve(&mut self, target: NodeId) -> bool {
        self.order.retain(|&t| t != target);
        self.targets.remove(&target).is_some()
    }

    /// Stops watching everything.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.order.clear();
    }

    /// Returns true if the element is watched.
    #[must_use]
    pub fn is_observing(&self, target: NodeId) -> bool {
        self.targets.contains_key(&target)
    }

    /// Returns true if nothing is watched.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.targets.is_empty()
    }

    /// Measures every watched element and returns the ones whose state changed.
    pub fn check(&mut self, doc: &Document, viewport: &Viewport) -> Vec<VisibilityEntry> {
        let mut entries = Vec::new();

        for &target in &self.order {
            let ratio = doc
                .get(target)
                .filter(|_| doc.is_connected(target))
                .map_or(0.0, |el| viewport.visible_ratio(el.layout()));
            let is_intersecting = ratio > 0.0 && ratio >= self.threshold;

            let Some(last) = self.targets.get_mut(&target) else {
                continue;
            };
            if *last != Some(is_intersecting) {
                *last = Some(is_intersecting);
                entries.push(VisibilityEntry {
                    target,
                    ratio,
                    is_intersecting,
                });
            }
        }
        entries
    }
}
