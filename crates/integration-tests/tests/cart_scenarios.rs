//! Integration tests for cart flows.
//!
//! These tests drive the cart the way a storefront would: through the store
//! and context surfaces, never by touching state directly.

#![allow(clippy::unwrap_used)]

use naked_pineapple_cart::{CartAction, CartContext, CartStore};
use naked_pineapple_integration_tests::{line, quantities};
use rust_decimal::Decimal;

fn pairs(expected: &[(&str, u32)]) -> Vec<(String, u32)> {
    expected.iter().map(|(id, q)| ((*id).to_string(), *q)).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_add_add_plus_one() {
    let mut cart = CartStore::default();
    cart.add_item(line("a", 1));
    cart.add_item(line("b", 2));
    cart.plus_one("a");

    assert_eq!(cart.items(), &[line("a", 2), line("b", 2)]);
}

#[test]
fn test_minus_one_twice_stays_at_one() {
    let mut cart = CartStore::new(vec![line("a", 1)]);
    cart.minus_one("a");
    cart.minus_one("a");

    assert_eq!(quantities(cart.items()), pairs(&[("a", 1)]));
}

#[test]
fn test_shopping_session() {
    let mut cart = CartStore::default();
    cart.add_item(line("tee", 1).with_price(Decimal::new(2400, 2)).with_attribute("size", "M"));
    cart.add_item(line("mug", 2).with_price(Decimal::new(1200, 2)));
    cart.add_item(line("sticker", 5));

    // Same product added again from another page
    cart.add_item(line("tee", 1));
    assert_eq!(
        quantities(cart.items()),
        pairs(&[("tee", 2), ("mug", 2), ("sticker", 5)])
    );
    assert_eq!(cart.item("tee").and_then(|i| i.attributes.get("size")), Some(&"M".into()));

    cart.update_item(line("mug", 1).with_attribute("gift_wrap", true));
    cart.remove_item("sticker");

    let state = cart.state();
    assert_eq!(state.total_unique_items(), 2);
    assert_eq!(state.total_items(), 3);
    assert_eq!(state.cart_total(), Decimal::new(6000, 2));
}

#[test]
fn test_unknown_ids_never_fail() {
    let mut cart = CartStore::new(vec![line("a", 3)]);
    cart.remove_item("ghost");
    cart.plus_one("ghost");
    cart.minus_one("ghost");
    cart.update_item(line("ghost", 9));

    assert_eq!(cart.items(), &[line("a", 3)]);
    assert!(!cart.is_in_cart("ghost"));
}

#[test]
fn test_membership_follows_add_and_remove() {
    let mut cart = CartStore::default();
    assert!(!cart.is_in_cart("a"));
    cart.add_item(line("a", 1));
    assert!(cart.is_in_cart("a"));
    cart.remove_item("a");
    assert!(!cart.is_in_cart("a"));
}

#[test]
fn test_clear_cart() {
    let mut cart = CartStore::new(vec![line("a", 1), line("b", 2), line("c", 3)]);
    cart.clear_cart();
    assert!(cart.items().is_empty());
    assert!(cart.state().is_empty());
}

#[test]
fn test_wire_actions() {
    let mut cart = CartStore::default();
    let actions = [
        r#"{"type":"ADD_ITEM","payload":{"id":"a","quantity":1,"title":"Tee"}}"#,
        r#"{"type":"ADD_ITEM","payload":{"id":"b"}}"#,
        r#"{"type":"PLUS_ONE","payload":{"id":"b"}}"#,
        r#"{"type":"UPDATE_ITEM","payload":{"id":"a","quantity":4}}"#,
        r#"{"type":"REMOVE_ITEM","payload":{"id":"missing"}}"#,
    ];
    for raw in actions {
        let action: CartAction = serde_json::from_str(raw).unwrap();
        cart.dispatch(action);
    }

    assert_eq!(quantities(cart.items()), pairs(&[("a", 4), ("b", 2)]));
    assert_eq!(cart.item("a").map(|i| i.attributes["title"].clone()), Some("Tee".into()));
}

#[test]
fn test_wire_update_without_quantity_keeps_quantity() {
    let mut cart = CartStore::new(vec![line("a", 5).with_price(Decimal::new(999, 2))]);
    let action: CartAction =
        serde_json::from_str(r#"{"type":"UPDATE_ITEM","payload":{"id":"a","title":"Renamed"}}"#)
            .unwrap();
    cart.dispatch(action);

    let item = cart.item("a").unwrap();
    assert_eq!(item.quantity.get(), 5);
    assert_eq!(item.price, Some(Decimal::new(999, 2)));
    assert_eq!(item.attributes["title"], "Renamed");
}

#[test]
fn test_context_is_shared_between_consumers() {
    let cart = CartContext::default();
    let header = cart.clone();
    let checkout = cart.clone();

    cart.add_item(line("a", 1));
    header.plus_one("a");
    assert_eq!(checkout.state().total_items(), 2);

    checkout.clear_cart();
    assert!(header.items().is_empty());
}
