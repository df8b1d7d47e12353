//! A single product entry in a cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::LineItemId;
use super::quantity::Quantity;

/// One product entry in the cart.
///
/// Only `id` and `quantity` carry meaning for the cart store. `price` feeds
/// the derived totals, and everything else a storefront wants to keep next to
/// the line (title, image, variant) lives in `attributes`, which is flattened
/// into the same JSON object:
///
/// ```json
/// {"id": "sku-1", "quantity": 2, "price": "9.50", "title": "Pineapple Tee"}
/// ```
///
/// A missing `quantity` deserializes as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique key of the line within a cart.
    pub id: LineItemId,
    /// Number of units, never below 1.
    #[serde(default)]
    pub quantity: Quantity,
    /// Unit price, if the storefront supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Descriptive fields opaque to the cart.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// Create a line item with no price and no attributes.
    #[must_use]
    pub fn new(id: LineItemId, quantity: Quantity) -> Self {
        Self {
            id,
            quantity,
            price: None,
            attributes: Map::new(),
        }
    }

    /// Set the unit price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Add a descriptive attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Unit price times quantity, or `None` when the line has no price.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price
            .map(|price| price * Decimal::from(self.quantity.get()))
    }

    /// Merge another line with the same id into this one, as `ADD_ITEM` does.
    ///
    /// Quantities are summed (saturating), a supplied price replaces the old
    /// one, and attributes are merged with `other` winning on conflicts.
    pub fn absorb(&mut self, other: Self) {
        self.quantity = self.quantity.saturating_add(other.quantity);
        if other.price.is_some() {
            self.price = other.price;
        }
        self.attributes.extend(other.attributes);
    }

    /// Apply a partial update. Fields the patch leaves out keep their value.
    pub fn apply(&mut self, patch: LineItemPatch) {
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if patch.price.is_some() {
            self.price = patch.price;
        }
        self.attributes.extend(patch.attributes);
    }
}

/// A partial update for the line with the same id.
///
/// Only the fields present are changed:
///
/// ```json
/// {"id": "sku-1", "title": "Renamed"}
/// ```
///
/// leaves the quantity and price of `sku-1` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemPatch {
    /// Line to update.
    pub id: LineItemId,
    /// New quantity, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    /// New unit price, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Attributes to add or overwrite.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItemPatch {
    /// A patch that changes nothing yet.
    #[must_use]
    pub fn new(id: LineItemId) -> Self {
        Self {
            id,
            quantity: None,
            price: None,
            attributes: Map::new(),
        }
    }

    /// Set the new quantity.
    #[must_use]
    pub const fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the new unit price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Add or overwrite a descriptive attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A full line as a patch replaces quantity and attributes it names, and the
/// price when it has one.
impl From<LineItem> for LineItemPatch {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id,
            quantity: Some(item.quantity),
            price: item.price,
            attributes: item.attributes,
        }
    }
}
