//! Shared handle to a cart store.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use naked_pineapple_core::{LineItem, LineItemPatch};

use crate::action::CartAction;
use crate::persistence::KeyValueStore;
use crate::state::CartState;
use crate::store::{CartOptions, CartStore, StateObserver};

/// A cloneable handle to one [`CartStore`].
///
/// Hand a clone to every component that needs the cart instead of reaching
/// for a global. All clones see and change the same cart. The handle is
/// single-threaded (`!Send`); observers must not call back into the context
/// they are subscribed to.
#[derive(Debug, Clone, Default)]
pub struct CartContext {
    inner: Rc<RefCell<CartStore>>,
}

impl CartContext {
    /// Wrap an existing store.
    #[must_use]
    pub fn new(store: CartStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Create a context around a cart persisted to `storage`.
    #[must_use]
    pub fn with_persistence<S>(options: CartOptions, storage: S) -> Self
    where
        S: KeyValueStore + 'static,
    {
        Self::new(CartStore::with_persistence(options, storage))
    }

    /// Borrow the current state.
    ///
    /// # Panics
    ///
    /// Panics if called from inside an observer of this cart.
    #[must_use]
    pub fn state(&self) -> Ref<'_, CartState> {
        Ref::map(self.inner.borrow(), CartStore::state)
    }

    /// Snapshot of the current line items.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.inner.borrow().items().to_vec()
    }

    /// Whether a line with this id is in the cart.
    #[must_use]
    pub fn is_in_cart(&self, id: &str) -> bool {
        self.inner.borrow().is_in_cart(id)
    }

    /// See [`CartStore::subscribe`].
    pub fn subscribe(&self, observer: impl StateObserver + 'static) {
        self.inner.borrow_mut().subscribe(observer);
    }

    /// See [`CartStore::dispatch`].
    pub fn dispatch(&self, action: CartAction) {
        self.inner.borrow_mut().dispatch(action);
    }

    /// See [`CartStore::add_item`].
    pub fn add_item(&self, item: LineItem) {
        self.inner.borrow_mut().add_item(item);
    }

    /// See [`CartStore::update_item`].
    pub fn update_item(&self, patch: impl Into<LineItemPatch>) {
        self.inner.borrow_mut().update_item(patch);
    }

    /// See [`CartStore::remove_item`].
    pub fn remove_item(&self, id: &str) {
        self.inner.borrow_mut().remove_item(id);
    }

    /// See [`CartStore::clear_cart`].
    pub fn clear_cart(&self) {
        self.inner.borrow_mut().clear_cart();
    }

    /// See [`CartStore::plus_one`].
    pub fn plus_one(&self, id: &str) {
        self.inner.borrow_mut().plus_one(id);
    }

    /// See [`CartStore::minus_one`].
    pub fn minus_one(&self, id: &str) {
        self.inner.borrow_mut().minus_one(id);
    }
}
