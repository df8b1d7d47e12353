//! Naked Pineapple Cart library.
//!
//! A reducer-driven shopping cart: every change goes through a [`CartAction`],
//! is applied by a pure reducer on [`CartState`], and the committed state is
//! handed to observers. The [`PersistenceBridge`] is one such observer and
//! mirrors the cart into a [`KeyValueStore`] so it survives restarts.
//!
//! # Example
//!
//! ```rust
//! use naked_pineapple_cart::{CartOptions, CartStore, MemoryStorage};
//! use naked_pineapple_core::{LineItem, LineItemId, Quantity};
//!
//! let storage = MemoryStorage::new();
//! let mut cart = CartStore::with_persistence(CartOptions::default(), storage.clone());
//!
//! cart.add_item(LineItem::new(LineItemId::parse("a").unwrap(), Quantity::ONE));
//! cart.plus_one("a");
//!
//! assert!(cart.is_in_cart("a"));
//! assert_eq!(cart.state().total_items(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod config;
pub mod context;
pub mod error;
pub mod persistence;
pub mod state;
pub mod store;

pub use action::CartAction;
pub use config::CartConfig;
pub use context::CartContext;
pub use error::{ConfigError, LoadError, StorageError};
pub use persistence::{FileStorage, KeyValueStore, MemoryStorage, PersistenceBridge};
pub use state::CartState;
pub use store::{CartOptions, CartStore, DEFAULT_STORAGE_KEY, StateObserver};
