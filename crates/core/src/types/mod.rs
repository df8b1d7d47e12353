//! Core types for Naked Pineapple.
//!
//! This module provides type-safe wrappers for common cart concepts.

pub mod id;
pub mod line_item;
pub mod quantity;

pub use id::*;
pub use line_item::{LineItem, LineItemPatch};
pub use quantity::{Quantity, QuantityError};
