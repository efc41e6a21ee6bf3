//! Error types for the storage layer.

use thiserror::Error;

/// Errors from key-value store operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Write rejected because the store is full
    #[error("storage quota exceeded: need {needed} bytes, {available} available")]
    QuotaExceeded {
        /// Bytes the write would have required
        needed: u64,
        /// Bytes still free before the write
        available: u64,
    },

    /// The backing store is not reachable (disabled storage, private mode)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error with message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create an unavailable error with message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::QuotaExceeded {
            needed: 120,
            available: 40,
        };
        assert_eq!(
            err.to_string(),
            "storage quota exceeded: need 120 bytes, 40 available"
        );

        let err = StoreError::unavailable("localStorage disabled");
        assert_eq!(err.to_string(), "storage unavailable: localStorage disabled");

        let err = StoreError::backend("boom");
        assert_eq!(err.to_string(), "storage backend error: boom");
    }
}
