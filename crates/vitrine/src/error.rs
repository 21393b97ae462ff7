//! # Page Error Types
//!
//! Errors surfaced to the host. Missing markup is never one of them.

use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::{DomError, SchedulerError};

/// Errors loading or validating the tuning file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Errors from driving a page.
#[derive(Error, Debug)]
pub enum PageError {
    /// The host referenced a node that does not exist, or a selector failed.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// Timers kept re-arming within a single advance.
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    /// The tuning file was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;
