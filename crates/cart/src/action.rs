//! Cart actions.
//!
//! Actions serialize in the tagged form front-ends already dispatch:
//!
//! ```json
//! {"type": "ADD_ITEM", "payload": {"id": "a", "quantity": 1}}
//! {"type": "PLUS_ONE", "payload": {"id": "a"}}
//! {"type": "CLEAR_CART"}
//! ```

use serde::{Deserialize, Serialize};

use naked_pineapple_core::{LineItem, LineItemId, LineItemPatch};

/// A request to transition the cart to its next state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Append a new line, or merge into the line with the same id.
    AddItem(LineItem),
    /// Drop the line with this id.
    RemoveItem { id: LineItemId },
    /// Change the fields the patch carries on the line with the same id.
    UpdateItem(LineItemPatch),
    /// Remove every line.
    ClearCart,
    /// Raise a line's quantity by one.
    PlusOne { id: LineItemId },
    /// Lower a line's quantity by one, never below 1.
    MinusOne { id: LineItemId },
}

impl CartAction {
    /// The action's wire name, e.g. `"ADD_ITEM"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddItem(_) => "ADD_ITEM",
            Self::RemoveItem { .. } => "REMOVE_ITEM",
            Self::UpdateItem(_) => "UPDATE_ITEM",
            Self::ClearCart => "CLEAR_CART",
            Self::PlusOne { .. } => "PLUS_ONE",
            Self::MinusOne { .. } => "MINUS_ONE",
        }
    }

    /// The line the action targets, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&LineItemId> {
        match self {
            Self::AddItem(item) => Some(&item.id),
            Self::UpdateItem(patch) => Some(&patch.id),
            Self::RemoveItem { id } | Self::PlusOne { id } | Self::MinusOne { id } => Some(id),
            Self::ClearCart => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naked_pineapple_core::Quantity;

    use super::*;

    #[test]
    fn test_wire_format() {
        let action = CartAction::PlusOne {
            id: LineItemId::parse("a").unwrap(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({"type": "PLUS_ONE", "payload": {"id": "a"}}));

        let clear = serde_json::to_value(&CartAction::ClearCart).unwrap();
        assert_eq!(clear, serde_json::json!({"type": "CLEAR_CART"}));
    }

    #[test]
    fn test_parse_add_item() {
        let action: CartAction = serde_json::from_str(
            r#"{"type":"ADD_ITEM","payload":{"id":"a","quantity":2,"title":"Tee"}}"#,
        )
        .unwrap();
        let CartAction::AddItem(item) = action else {
            panic!("expected ADD_ITEM");
        };
        assert_eq!(item.quantity, Quantity::new(2).unwrap());
        assert_eq!(item.attributes["title"], "Tee");
    }

    #[test]
    fn test_parse_partial_update() {
        let action: CartAction =
            serde_json::from_str(r#"{"type":"UPDATE_ITEM","payload":{"id":"a","title":"Renamed"}}"#)
                .unwrap();
        let CartAction::UpdateItem(patch) = action else {
            panic!("expected UPDATE_ITEM");
        };
        assert_eq!(patch.quantity, None);
        assert_eq!(patch.price, None);
        assert_eq!(patch.attributes["title"], "Renamed");
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert!(serde_json::from_str::<CartAction>(r#"{"type":"EMPTY_CART"}"#).is_err());
    }

    #[test]
    fn test_kind_matches_wire_name() {
        let actions = [
            CartAction::ClearCart,
            CartAction::RemoveItem {
                id: LineItemId::parse("a").unwrap(),
            },
            CartAction::MinusOne {
                id: LineItemId::parse("a").unwrap(),
            },
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.kind());
        }
    }
}
