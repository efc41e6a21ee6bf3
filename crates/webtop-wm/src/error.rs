//! Error types for the window manager
//!
//! Window operations never fail: unknown ids and invalid states are no-ops.
//! Errors only come from parsing configuration and host-supplied strings,
//! and from serializing diagnostics.

use thiserror::Error;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WmError {
    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A host-supplied identifier did not name a known value
    #[error("unknown {kind} '{value}'")]
    Parse {
        /// What was being parsed ("resize edge", "snap target", ...)
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// JSON serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl WmError {
    pub(crate) fn parse(kind: &'static str, value: &str) -> Self {
        Self::Parse {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type alias for window manager operations
pub type WmResult<T> = Result<T, WmError>;
