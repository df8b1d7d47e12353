//! Mirror committed cart states into key-value storage.

use naked_pineapple_core::LineItem;

use super::KeyValueStore;
use crate::error::LoadError;
use crate::state::CartState;
use crate::store::StateObserver;

/// Loads the cart snapshot at startup and writes every changed state back.
///
/// The snapshot is the JSON array of line items stored under `key`. The
/// bridge remembers the last value it read or wrote and skips writes that
/// would store the same string again.
///
/// Nothing the bridge does can fail the cart: read problems fall back to an
/// empty cart, write problems are logged and retried on the next commit.
///
/// When the slot was empty or could not be read at startup, the bridge does
/// not write on subscribe. The first write then comes from a real commit, so
/// opening a cart never creates a snapshot or clobbers one it failed to read.
#[derive(Debug)]
pub struct PersistenceBridge<S> {
    storage: S,
    key: String,
    last_written: Option<String>,
    skip_initial_write: bool,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    /// Create a bridge for the slot `key` in `storage`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            last_written: None,
            skip_initial_write: false,
        }
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the saved snapshot.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Storage`] if the read fails and
    /// [`LoadError::Parse`] if the stored value is not a JSON array of valid
    /// line items.
    pub fn load(&mut self) -> Result<Option<Vec<LineItem>>, LoadError> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.skip_initial_write = true;
                return Ok(None);
            }
            Err(e) => {
                // The slot may still hold a good snapshot we just could not see
                self.skip_initial_write = true;
                return Err(e.into());
            }
        };
        let items = serde_json::from_str(&raw);
        // Recorded even when parsing fails; a corrupt slot is overwritten on the next commit.
        self.last_written = Some(raw);
        Ok(Some(items?))
    }

    /// Read the saved snapshot, falling back to an empty list.
    ///
    /// Missing keys, storage failures and malformed JSON all yield `[]`;
    /// failures are logged at `warn`.
    pub fn load_or_default(&mut self) -> Vec<LineItem> {
        match self.load() {
            Ok(Some(items)) => {
                tracing::debug!(key = %self.key, count = items.len(), "Loaded saved cart");
                items
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to load saved cart, starting empty");
                Vec::new()
            }
        }
    }

    /// Pick the items a new cart starts with.
    ///
    /// A non-empty `explicit` list wins; otherwise the saved snapshot is used.
    pub fn initial_items(&mut self, explicit: Vec<LineItem>) -> Vec<LineItem> {
        if explicit.is_empty() {
            self.load_or_default()
        } else {
            explicit
        }
    }

    /// Write `items` to storage unless they serialize to the last written value.
    ///
    /// Returns `true` if a write happened.
    pub fn persist(&mut self, items: &[LineItem]) -> bool {
        let serialized = match serde_json::to_string(items) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize cart");
                return false;
            }
        };

        if self.last_written.as_deref() == Some(serialized.as_str()) {
            return false;
        }

        match self.storage.set(&self.key, &serialized) {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = items.len(), "Saved cart");
                self.last_written = Some(serialized);
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save cart, keeping it in memory");
                false
            }
        }
    }
}

impl<S: KeyValueStore> StateObserver for PersistenceBridge<S> {
    fn on_subscribe(&mut self, state: &CartState) {
        if std::mem::take(&mut self.skip_initial_write) {
            tracing::debug!(key = %self.key, "Nothing loaded, deferring first save");
            return;
        }
        self.persist(state.items());
    }

    fn on_commit(&mut self, state: &CartState) {
        self.persist(state.items());
    }
}
