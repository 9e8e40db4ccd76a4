//! Persistence errors

use thiserror::Error;

/// Errors from the storage backend or stored data
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No storage backend is available (private mode, no window, ...)
    #[error("storage backend unavailable")]
    Unavailable,
    /// Reading a key failed
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Writing a key failed (quota, permissions, ...)
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// Stored value could not be decoded
    #[error("corrupt value under `{key}`")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// Value could not be encoded
    #[error("failed to encode value for `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistenceError {
    pub fn read(key: &str, reason: impl Into<String>) -> Self {
        Self::Read { key: key.to_string(), reason: reason.into() }
    }

    pub fn write(key: &str, reason: impl Into<String>) -> Self {
        Self::Write { key: key.to_string(), reason: reason.into() }
    }

    /// Whether this error means the stored data itself is bad
    pub fn is_corrupt(&self) -> bool {
        matches!(self, PersistenceError::Corrupt { .. })
    }
}
