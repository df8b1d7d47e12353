//! Integration tests for Naked Pineapple.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p naked-pineapple-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart flows through the public store API
//! - `cart_persistence` - Snapshots surviving restarts, in memory and on disk
//!
//! This library holds the fixtures the test files share.

use naked_pineapple_core::{LineItem, LineItemId, Quantity};

/// Build a line item from a literal id and quantity.
///
/// # Panics
///
/// Panics if `id` is empty or `quantity` is 0. Fixtures only.
#[must_use]
#[allow(clippy::expect_used)]
pub fn line(id: &str, quantity: u32) -> LineItem {
    LineItem::new(
        LineItemId::parse(id).expect("fixture id"),
        Quantity::new(quantity).expect("fixture quantity"),
    )
}

/// `(id, quantity)` pairs for compact assertions.
#[must_use]
pub fn quantities(items: &[LineItem]) -> Vec<(String, u32)> {
    items
        .iter()
        .map(|item| (item.id.to_string(), item.quantity.get()))
        .collect()
}
