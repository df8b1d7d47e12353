//! Integration tests for cart persistence.
//!
//! These tests reopen carts against the same storage to check what survives a
//! restart, and feed the bridge broken snapshots to check the cart still works.

#![allow(clippy::unwrap_used)]

use naked_pineapple_cart::{
    CartContext, CartOptions, CartStore, FileStorage, KeyValueStore, MemoryStorage,
    StorageError,
};
use naked_pineapple_core::LineItem;
use naked_pineapple_integration_tests::{line, quantities};

/// Storage whose first read fails, as with a briefly locked profile.
#[derive(Clone, Default)]
struct SlowToWakeStorage {
    inner: MemoryStorage,
    woke: std::rc::Rc<std::cell::Cell<bool>>,
}

impl KeyValueStore for SlowToWakeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.woke.replace(true) {
            return Err(StorageError::Unavailable("storage not ready".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }
}

/// Storage whose writes always fail, as with a full browser quota.
#[derive(Clone, Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

fn reopen_file(dir: &std::path::Path) -> CartStore {
    CartStore::with_persistence(CartOptions::default(), FileStorage::new(dir))
}

// =============================================================================
// Restarts
// =============================================================================

#[test]
fn test_cart_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = reopen_file(dir.path());
    cart.add_item(line("a", 1));
    cart.add_item(line("b", 2));
    cart.plus_one("a");
    drop(cart);

    let cart = reopen_file(dir.path());
    assert_eq!(cart.items(), &[line("a", 2), line("b", 2)]);
}

#[test]
fn test_snapshot_is_a_json_array_of_items() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = reopen_file(dir.path());
    cart.add_item(line("a", 3).with_attribute("title", "Tee"));

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json, serde_json::json!([{"id": "a", "quantity": 3, "title": "Tee"}]));
}

#[test]
fn test_snapshot_written_by_another_client_is_loaded() {
    let storage = MemoryStorage::new();
    storage
        .set("cart", r#"[{"id":"a","quantity":2,"name":"Pineapple"},{"id":"b","quantity":1}]"#)
        .unwrap();

    let cart = CartContext::with_persistence(CartOptions::default(), storage);
    assert_eq!(
        quantities(&cart.items()),
        vec![("a".to_string(), 2), ("b".to_string(), 1)]
    );
    assert!(cart.is_in_cart("b"));
}

#[test]
fn test_json_roundtrip_is_lossless() {
    let items = vec![
        line("a", 2).with_attribute("image", serde_json::json!({"url": "/a.png"})),
        line("b", 7),
    ];
    let json = serde_json::to_string(&items).unwrap();
    let parsed: Vec<LineItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, items);
}

// =============================================================================
// Degraded Storage
// =============================================================================

#[test]
fn test_malformed_snapshot_yields_empty_cart() {
    let storage = MemoryStorage::new();
    storage.set("cart", "definitely not json").unwrap();

    let cart = CartStore::with_persistence(CartOptions::default(), storage);
    assert!(cart.items().is_empty());
}

#[test]
fn test_corrupt_file_yields_empty_cart_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "[{\"id\": 5}]").unwrap();

    let mut cart = reopen_file(dir.path());
    assert!(cart.items().is_empty());
    cart.add_item(line("a", 1));

    let cart = reopen_file(dir.path());
    assert_eq!(cart.items(), &[line("a", 1)]);
}

#[test]
fn test_failed_first_read_keeps_saved_cart() {
    let storage = SlowToWakeStorage::default();
    storage.inner.set("cart", r#"[{"id":"a","quantity":3}]"#).unwrap();

    let cart = CartStore::with_persistence(CartOptions::default(), storage.clone());
    assert!(cart.items().is_empty());
    drop(cart);

    assert_eq!(
        storage.inner.get("cart").unwrap().as_deref(),
        Some(r#"[{"id":"a","quantity":3}]"#)
    );
    let cart = CartStore::with_persistence(CartOptions::default(), storage);
    assert_eq!(cart.items(), &[line("a", 3)]);
}

#[test]
fn test_opening_without_snapshot_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let cart = reopen_file(dir.path());
    assert!(cart.items().is_empty());
    assert!(!cart.is_in_cart("a"));
    assert!(!dir.path().join("cart.json").exists());
}

#[test]
fn test_write_failures_keep_cart_working_in_memory() {
    let storage = ReadOnlyStorage::default();
    let mut cart = CartStore::with_persistence(CartOptions::default(), storage.clone());

    cart.add_item(line("a", 1));
    cart.plus_one("a");
    cart.add_item(line("b", 1));
    cart.remove_item("b");

    assert_eq!(cart.items(), &[line("a", 2)]);
    assert!(storage.get("cart").unwrap().is_none());
}

#[test]
fn test_invalid_key_degrades_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    let options = CartOptions::with_key("../outside");
    let mut cart = CartStore::with_persistence(options, FileStorage::new(dir.path()));

    cart.add_item(line("a", 1));
    assert!(cart.is_in_cart("a"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
