//! Error types for the cart crate.
//!
//! None of these reach the cart's consumer-facing surface. Storage and load
//! failures are logged by the [`PersistenceBridge`](crate::PersistenceBridge)
//! and the cart carries on in memory.

use thiserror::Error;

/// Key-value storage operation failed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used as a storage slot name.
    #[error("Invalid storage key {0:?}: {1}")]
    InvalidKey(String, &'static str),

    /// Underlying filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage backend refused the operation (quota, disabled, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Reading the saved cart snapshot failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The storage read itself failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored value is not a valid JSON array of line items.
    #[error("Malformed cart snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Invalid storage key {0:?}: {1}")]
    InvalidStorageKey(String, &'static str),
}
