//! Naked Pineapple Core - Shared cart types.
//!
//! This crate provides the types shared by all Naked Pineapple cart components:
//! - `cart` - Reducer-driven cart store with key-value persistence
//! - `cli` - Command-line driver for a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for line item ids and quantities, plus the
//!   [`LineItem`] record itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
