//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_KEY` - Storage slot the cart is persisted under (default: cart)
//! - `CART_STORAGE_DIR` - Directory backing the file storage (default: .np-cart)

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::persistence::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;

/// Default directory for file-backed storage, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = ".np-cart";

/// Cart persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Storage slot the cart is persisted under
    pub storage_key: String,
    /// Root directory for [`FileStorage`](crate::FileStorage)
    pub storage_dir: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_STORAGE_KEY` is not a usable slot name.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the storage key is not a usable slot name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_key =
            lookup("CART_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        validate_key(&storage_key).map_err(|reason| {
            ConfigError::InvalidEnvVar("CART_STORAGE_KEY".to_string(), reason.to_string())
        })?;

        let storage_dir = lookup("CART_STORAGE_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);

        Ok(Self {
            storage_key,
            storage_dir,
        })
    }

    /// Replace the key and directory with explicitly supplied values.
    ///
    /// `None` keeps the current value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStorageKey` if `storage_key` is not a usable slot name.
    pub fn with_overrides(
        mut self,
        storage_key: Option<String>,
        storage_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(key) = storage_key {
            validate_key(&key).map_err(|reason| ConfigError::InvalidStorageKey(key.clone(), reason))?;
            self.storage_key = key;
        }
        if let Some(dir) = storage_dir {
            self.storage_dir = dir;
        }
        Ok(self)
    }
}
