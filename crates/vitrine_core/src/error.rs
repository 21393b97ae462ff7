//! # Core Error Types
//!
//! Errors here mean the host misused the page model (a stale node id, a
//! selector outside the supported subset, a runaway timer chain). A feature
//! whose markup is simply missing never produces one.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors raised by the document model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The node id does not belong to this document.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The selector uses syntax outside the supported subset.
    #[error("unsupported selector: {0:?}")]
    UnsupportedSelector(String),

    /// Appending would make a node its own ancestor.
    #[error("cannot append {child} under its own descendant {parent}")]
    CyclicAppend {
        /// The would-be parent.
        parent: NodeId,
        /// The node being appended.
        child: NodeId,
    },
}

/// Result type for document operations.
pub type DomResult<T> = Result<T, DomError>;

/// Errors raised while draining the timer queue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// More tasks ran in a single advance than the configured limit allows.
    #[error("timer queue exceeded {limit} steps at t={now_ms}ms ({pending} still pending)")]
    StepLimitExceeded {
        /// The configured step limit.
        limit: usize,
        /// Virtual time when the limit was hit.
        now_ms: u64,
        /// Tasks still queued.
        pending: usize,
    },
}
