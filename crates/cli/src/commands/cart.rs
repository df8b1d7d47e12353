//! Cart commands.
//!
//! Every invocation opens the cart from its storage file, applies at most one
//! action, and lets the persistence bridge write the result back.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use thiserror::Error;

use naked_pineapple_cart::{
    CartAction, CartConfig, CartOptions, CartState, CartStore, ConfigError, FileStorage,
};
use naked_pineapple_core::{IdError, LineItem, LineItemId, LineItemPatch, Quantity, QuantityError};

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Line item id is invalid.
    #[error("Invalid id: {0}")]
    InvalidId(#[from] IdError),

    /// Quantity is invalid.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Price is not a decimal number.
    #[error("Invalid price {0:?}: {1}")]
    InvalidPrice(String, rust_decimal::Error),

    /// Attribute is not in `key=value` form.
    #[error("Invalid attribute {0:?}: expected key=value")]
    InvalidAttribute(String),

    /// Raw action is not valid JSON for a cart action.
    #[error("Invalid action: {0}")]
    InvalidAction(#[from] serde_json::Error),
}

/// Line item fields given on the command line.
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Line item id
    #[arg(long)]
    pub id: String,

    /// Number of units. `add` defaults to 1; `update` keeps the current quantity.
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Unit price, e.g. 24.00
    #[arg(short, long)]
    pub price: Option<String>,

    /// Extra descriptive field as key=value (repeatable). Values that parse as
    /// JSON are stored as JSON, anything else as a string.
    #[arg(short, long = "attr")]
    pub attributes: Vec<String>,
}

impl ItemArgs {
    /// Build the line item these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the id, quantity, price or an attribute is invalid.
    pub fn into_line_item(self) -> Result<LineItem, CliError> {
        let patch = self.into_patch()?;
        let mut item = LineItem::new(patch.id, patch.quantity.unwrap_or_default());
        item.price = patch.price;
        item.attributes = patch.attributes;
        Ok(item)
    }

    /// Build a patch carrying only the fields that were given.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the id, quantity, price or an attribute is invalid.
    pub fn into_patch(self) -> Result<LineItemPatch, CliError> {
        let mut patch = LineItemPatch::new(LineItemId::parse(self.id)?);
        if let Some(quantity) = self.quantity {
            patch = patch.with_quantity(Quantity::new(quantity)?);
        }
        if let Some(price) = self.price {
            let parsed =
                Decimal::from_str(&price).map_err(|e| CliError::InvalidPrice(price.clone(), e))?;
            patch = patch.with_price(parsed);
        }
        for attribute in &self.attributes {
            let (key, value) = parse_attribute(attribute)?;
            patch = patch.with_attribute(key, value);
        }
        Ok(patch)
    }
}

/// Split `key=value`, reading the value as JSON when possible.
fn parse_attribute(raw: &str) -> Result<(String, Value), CliError> {
    let (key, value) = raw
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| CliError::InvalidAttribute(raw.to_string()))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Render the cart as the JSON document `show` prints.
#[must_use]
pub fn summary(state: &CartState) -> Value {
    json!({
        "items": state.items(),
        "total_unique_items": state.total_unique_items(),
        "total_items": state.total_items(),
        "cart_total": state.cart_total().to_string(),
        "is_empty": state.is_empty(),
    })
}

/// One CLI invocation's view of the persisted cart.
#[derive(Debug)]
pub struct Session {
    cart: CartStore,
}

impl Session {
    /// Open the cart, letting `key` and `dir` override the environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the resulting storage key is invalid.
    pub fn open(key: Option<String>, dir: Option<PathBuf>) -> Result<Self, CliError> {
        let config = CartConfig::from_env()?.with_overrides(key, dir)?;

        tracing::debug!(
            key = %config.storage_key,
            dir = %config.storage_dir.display(),
            "Opening cart"
        );

        let storage = FileStorage::new(config.storage_dir);
        let cart = CartStore::with_persistence(CartOptions::with_key(config.storage_key), storage);
        Ok(Self { cart })
    }

    /// The underlying store.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Print the cart contents and totals.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidAction` if the summary cannot be rendered.
    #[allow(clippy::print_stdout)]
    pub fn show(&self) -> Result<(), CliError> {
        println!("{}", serde_json::to_string_pretty(&summary(self.cart.state()))?);
        Ok(())
    }

    /// Print whether a line is in the cart.
    #[allow(clippy::print_stdout)]
    pub fn contains(&self, id: &str) {
        println!("{}", self.cart.is_in_cart(id));
    }

    /// Add a line described by `args`.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the arguments do not describe a valid line.
    pub fn add(&mut self, args: ItemArgs) -> Result<(), CliError> {
        let item = args.into_line_item()?;
        tracing::info!(id = %item.id, quantity = %item.quantity, "Adding to cart");
        self.cart.add_item(item);
        Ok(())
    }

    /// Update the line named by `args`, changing only the fields given.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the arguments do not describe a valid patch.
    pub fn update(&mut self, args: ItemArgs) -> Result<(), CliError> {
        let patch = args.into_patch()?;
        if !self.cart.is_in_cart(patch.id.as_str()) {
            tracing::info!(id = %patch.id, "Line not in cart, nothing to update");
        }
        self.cart.update_item(patch);
        Ok(())
    }

    /// Dispatch a raw JSON action.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidAction` if `raw` is not a valid cart action.
    pub fn apply(&mut self, raw: &str) -> Result<(), CliError> {
        let action: CartAction = serde_json::from_str(raw)?;
        self.cart.dispatch(action);
        Ok(())
    }
}
