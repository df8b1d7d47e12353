//! The cart store: owns the state, dispatches actions, notifies observers.

use std::fmt;

use naked_pineapple_core::{LineItem, LineItemId, LineItemPatch};

use crate::action::CartAction;
use crate::persistence::{KeyValueStore, PersistenceBridge};
use crate::state::CartState;

/// Storage slot used when no key is configured.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Something that wants to see every committed cart state.
///
/// Observers run synchronously, in registration order, right after the
/// reducer returns. They see the state but cannot change it.
pub trait StateObserver {
    /// Called with the state the store just committed.
    fn on_commit(&mut self, state: &CartState);

    /// Called once with the current state when the observer is registered.
    ///
    /// Defaults to [`StateObserver::on_commit`].
    fn on_subscribe(&mut self, state: &CartState) {
        self.on_commit(state);
    }
}

impl<F: FnMut(&CartState)> StateObserver for F {
    fn on_commit(&mut self, state: &CartState) {
        self(state);
    }
}

/// How a persisted cart starts.
#[derive(Debug, Clone)]
pub struct CartOptions {
    /// Items to start with. When empty, the saved snapshot is used instead.
    pub initial_items: Vec<LineItem>,
    /// Storage slot for the snapshot.
    pub storage_key: String,
}

impl Default for CartOptions {
    fn default() -> Self {
        Self {
            initial_items: Vec::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartOptions {
    /// Options for the slot `storage_key` with no explicit initial items.
    #[must_use]
    pub fn with_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }
}

/// The authoritative cart.
///
/// All changes go through [`CartStore::dispatch`] (or the helper methods that
/// build an action for you). Methods that take an id accept any string; an id
/// that is not in the cart, including an empty one, is a silent no-op.
pub struct CartStore {
    state: CartState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl CartStore {
    /// Create an in-memory cart with no persistence.
    #[must_use]
    pub fn new(initial_items: Vec<LineItem>) -> Self {
        Self {
            state: CartState::new(initial_items),
            observers: Vec::new(),
        }
    }

    /// Create a cart mirrored into `storage` under `options.storage_key`.
    ///
    /// The cart starts from `options.initial_items` if non-empty, otherwise
    /// from the saved snapshot (or empty if that cannot be read). Explicit
    /// initial items and a replaced corrupt snapshot are written back
    /// immediately; a missing or unreadable snapshot is left alone until the
    /// first dispatch.
    #[must_use]
    pub fn with_persistence<S>(options: CartOptions, storage: S) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let mut bridge = PersistenceBridge::new(storage, options.storage_key);
        let items = bridge.initial_items(options.initial_items);
        let mut store = Self::new(items);
        store.subscribe(bridge);
        store
    }

    /// Register an observer.
    ///
    /// The observer's [`StateObserver::on_subscribe`] runs right away with the
    /// current state, then [`StateObserver::on_commit`] after every dispatch.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        let mut observer = Box::new(observer);
        observer.on_subscribe(&self.state);
        self.observers.push(observer);
    }

    /// Apply one action, then notify every observer.
    pub fn dispatch(&mut self, action: CartAction) {
        tracing::debug!(
            action = action.kind(),
            id = action.target().map(LineItemId::as_str),
            "Dispatching cart action"
        );
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
        for observer in &mut self.observers {
            observer.on_commit(&self.state);
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The current line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.state.item(id)
    }

    /// Whether a line with this id is in the cart.
    #[must_use]
    pub fn is_in_cart(&self, id: &str) -> bool {
        self.state.is_in_cart(id)
    }

    /// Add a line, merging into an existing line with the same id.
    pub fn add_item(&mut self, item: LineItem) {
        self.dispatch(CartAction::AddItem(item));
    }

    /// Change the fields `patch` carries on the line with the same id.
    ///
    /// A full [`LineItem`] converts into a patch that sets every field.
    pub fn update_item(&mut self, patch: impl Into<LineItemPatch>) {
        self.dispatch(CartAction::UpdateItem(patch.into()));
    }

    /// Remove the line with this id.
    pub fn remove_item(&mut self, id: &str) {
        self.dispatch_for(id, |id| CartAction::RemoveItem { id });
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// Raise the quantity of the line with this id by one.
    pub fn plus_one(&mut self, id: &str) {
        self.dispatch_for(id, |id| CartAction::PlusOne { id });
    }

    /// Lower the quantity of the line with this id by one, never below 1.
    pub fn minus_one(&mut self, id: &str) {
        self.dispatch_for(id, |id| CartAction::MinusOne { id });
    }

    fn dispatch_for(&mut self, id: &str, action: impl FnOnce(LineItemId) -> CartAction) {
        match LineItemId::parse(id) {
            Ok(id) => self.dispatch(action(id)),
            // No line can have an invalid id, so there is nothing to change
            Err(e) => tracing::debug!(error = %e, "Ignoring cart action for invalid id"),
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
