//! Key-value persistence for the cart.
//!
//! The cart only needs two calls from its storage: read a string under a key
//! and write one back. [`KeyValueStore`] is that seam; [`MemoryStorage`] and
//! [`FileStorage`] are the two backends shipped here, and the
//! [`PersistenceBridge`] is what ties a backend to a [`CartStore`](crate::CartStore).

mod bridge;
mod file;
mod memory;

pub use bridge::PersistenceBridge;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// String-keyed storage that survives the cart instance.
///
/// Both calls take `&self`; backends that need to mutate use interior
/// mutability, the same way a browser's `localStorage` is shared by every
/// script on a page.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Check that `key` is usable as a storage slot name.
///
/// Keys double as file names for [`FileStorage`], so they are limited to ASCII
/// alphanumerics, `-`, `_` and `.`, and may not start with a dot.
pub(crate) fn validate_key(key: &str) -> Result<(), &'static str> {
    if key.is_empty() {
        return Err("must not be empty");
    }
    if key.starts_with('.') {
        return Err("must not start with '.'");
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err("may only contain ASCII letters, digits, '-', '_' and '.'");
    }
    Ok(())
}
