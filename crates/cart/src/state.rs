//! Cart state and the reducer that transitions it.

use rust_decimal::Decimal;

use naked_pineapple_core::LineItem;

use crate::action::CartAction;

/// The full, ordered collection of line items at a point in time.
///
/// ## Invariants
///
/// - No two items share an id
/// - Every quantity is at least 1
/// - Items stay in insertion order
///
/// The only way to change a `CartState` is [`CartState::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Build a state from a list of items.
    ///
    /// The items are folded in through `ADD_ITEM`, so a list with repeated
    /// ids collapses into one line per id with the quantities summed.
    #[must_use]
    pub fn new(items: Vec<LineItem>) -> Self {
        items
            .into_iter()
            .fold(Self::default(), |state, item| {
                state.reduce(CartAction::AddItem(item))
            })
    }

    /// Apply one action and return the next state.
    ///
    /// Actions that name an id not in the cart leave the state unchanged.
    ///
    /// `ADD_ITEM` on an id that is already present merges into that line in
    /// place: the quantities are summed, a supplied price replaces the old
    /// one, and supplied attributes overwrite same-named ones. `UPDATE_ITEM`
    /// only changes the fields its patch carries.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        match action {
            CartAction::AddItem(item) => {
                if let Some(existing) = self.item_mut(item.id.as_str()) {
                    existing.absorb(item);
                } else {
                    self.items.push(item);
                }
            }
            CartAction::RemoveItem { id } => {
                self.items.retain(|item| item.id != id);
            }
            CartAction::UpdateItem(patch) => {
                if let Some(existing) = self.item_mut(patch.id.as_str()) {
                    existing.apply(patch);
                }
            }
            CartAction::ClearCart => self.items.clear(),
            CartAction::PlusOne { id } => {
                if let Some(existing) = self.item_mut(id.as_str()) {
                    existing.quantity = existing.quantity.increment();
                }
            }
            CartAction::MinusOne { id } => {
                if let Some(existing) = self.item_mut(id.as_str()) {
                    existing.quantity = existing.quantity.decrement();
                }
            }
        }
        self
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Whether a line with this id is in the cart.
    #[must_use]
    pub fn is_in_cart(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id.as_str() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn total_unique_items(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of price times quantity over every line that has a price.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().filter_map(LineItem::line_total).sum()
    }

    fn item_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id.as_str() == id)
    }
}
