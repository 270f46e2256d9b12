//! # Cart Commands
//!
//! Serializable boundary for callers outside Rust (CLI launcher, demo script,
//! browser page).
//!
//! ## Request / Response
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller JSON                                                            │
//! │  {"op":"add_item","product":"Mouse","price":"29.99","quantity":2}       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartCommand::from_json ──► Cart::execute ──► Cart::snapshot            │
//! │       │                         │                  │                    │
//! │       └── bad JSON,             └── CartError      └── CartSnapshot     │
//! │           float quantity            (cart unchanged)   (camelCase JSON) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use cart_core::{Cart, CartCommand};
//!
//! let mut cart = Cart::new();
//! let cmd = CartCommand::from_json(r#"{"op":"add_item","product":"Pen","price":"1.25"}"#).unwrap();
//! cart.execute(cmd).unwrap();
//!
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.items[0].quantity, 1);
//! assert_eq!(snapshot.total.cents(), 138);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CartResult, ValidationError};
use crate::money::Money;
use crate::types::CartItemView;

fn default_quantity() -> i64 {
    1
}

/// A cart mutation requested by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CartCommand {
    AddItem {
        product: String,
        #[ts(type = "string | number")]
        price: Decimal,
        /// Defaults to 1 when omitted.
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    RemoveItem {
        product: String,
    },
    UpdateQuantity {
        product: String,
        quantity: i64,
    },
    ApplyDiscount {
        code: String,
    },
    Clear,
}

impl CartCommand {
    /// Parses a command from JSON.
    ///
    /// Malformed JSON, unknown ops, non-integer quantities and non-numeric
    /// prices all come back as `ValidationError::InvalidFormat`.
    pub fn from_json(json: &str) -> CartResult<Self> {
        serde_json::from_str(json).map_err(|err| {
            ValidationError::InvalidFormat {
                field: "command".to_string(),
                reason: err.to_string(),
            }
            .into()
        })
    }

    /// Name of the operation, as it appears in the `op` field.
    pub fn op(&self) -> &'static str {
        match self {
            CartCommand::AddItem { .. } => "add_item",
            CartCommand::RemoveItem { .. } => "remove_item",
            CartCommand::UpdateQuantity { .. } => "update_quantity",
            CartCommand::ApplyDiscount { .. } => "apply_discount",
            CartCommand::Clear => "clear",
        }
    }
}

/// Cart contents and figures for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub cart_id: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub discount_code: Option<String>,
    pub tax: Money,
    pub total: Money,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            cart_id: cart.id().to_string(),
            created_at: cart.created_at(),
            items: cart.cart_items(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            discount: cart.discount(),
            discount_code: cart.applied_discount_code().map(|c| c.code().to_string()),
            tax: cart.tax(),
            total: cart.total(),
        }
    }
}

impl Cart {
    /// Runs a caller command against the cart.
    pub fn execute(&mut self, command: CartCommand) -> CartResult<()> {
        debug!(cart_id = %self.id(), op = command.op(), "executing cart command");

        match command {
            CartCommand::AddItem {
                product,
                price,
                quantity,
            } => self.add_item(&product, price, quantity),
            CartCommand::RemoveItem { product } => self.remove_item(&product),
            CartCommand::UpdateQuantity { product, quantity } => {
                self.update_quantity(&product, quantity)
            }
            CartCommand::ApplyDiscount { code } => self.apply_discount(&code),
            CartCommand::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Current contents and figures.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self)
    }
}
