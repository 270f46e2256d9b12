//! # Cart
//!
//! The shopping cart entity: line items, one applied discount, and the
//! figures derived from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Mutation                 Effect                                        │
//! │  ────────                 ──────                                        │
//! │  add_item()        ────►  insert, or raise quantity of existing item    │
//! │  update_quantity() ────►  items[i].quantity = n                         │
//! │  remove_item()     ────►  items.remove(i)                               │
//! │  apply_discount()  ────►  discount = subtotal × code %  (stored)        │
//! │  clear()           ────►  items.clear(), discount = 0                   │
//! │                                                                         │
//! │  Query                    Derived from                                  │
//! │  ─────                    ────────────                                  │
//! │  subtotal()        ◄────  Σ price × qty, rounded once                   │
//! │  discount()        ◄────  stored discount, rounded                      │
//! │  tax()             ◄────  (subtotal − stored discount) × 10%, rounded   │
//! │  total()           ◄────  round(subtotal − stored discount) + tax       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Quirks
//! - **Stale discount**: the discount is stored as an amount when a code is
//!   applied. Adding, removing, or re-pricing items afterwards does not
//!   change it; only another `apply_discount` or `clear` does.
//! - **Independent rounding**: subtotal, discounted amount and tax are each
//!   rounded to cents before the total is formed, so the total can differ by
//!   a cent from one computed from unrounded intermediates.
//!
//! ## Example
//! ```rust
//! use cart_core::Cart;
//! use rust_decimal_macros::dec;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Laptop", dec!(999.99), 1).unwrap();
//! cart.add_item("Mouse", dec!(29.99), 2).unwrap();
//! assert_eq!(cart.subtotal().to_string(), "$1059.97");
//!
//! cart.apply_discount("save10").unwrap();
//! assert_eq!(cart.discount().to_string(), "$106.00");
//! assert_eq!(cart.tax().to_string(), "$95.40");
//! assert_eq!(cart.total().to_string(), "$1049.37");
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{CartError, CartResult, ValidationError};
use crate::money::Money;
use crate::types::{CartItemView, DiscountCode, LineItem};
use crate::validation::{
    validate_discount_code, validate_price, validate_product, validate_quantity,
};
use crate::{MAX_SUBTOTAL_CENTS, TAX_RATE};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product name (adding the same product raises its quantity)
/// - Every item has `unit_price >= 0` and `quantity >= 1`
/// - Items keep insertion order
/// - A rejected mutation leaves the cart unchanged
///
/// Not synchronised. Hosts that share a cart between callers wrap it in their
/// own lock, one cart per session.
#[derive(Debug, Clone)]
pub struct Cart {
    id: String,
    items: Vec<LineItem>,
    /// Discount in currency units, unrounded, fixed at apply time.
    applied_discount: Decimal,
    discount_code: Option<DiscountCode>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            id: Uuid::new_v4().to_string(),
            items: Vec::new(),
            applied_discount: Decimal::ZERO,
            discount_code: None,
            created_at: Utc::now(),
        }
    }

    /// Cart identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: quantity increases by `quantity`; the
    ///   price given here is ignored (the first price added wins)
    /// - If product not in cart: added as a new item at the end
    ///
    /// ## Errors
    /// - `Validation(Required)` for an empty product name
    /// - `Validation(Negative)` for a price below zero
    /// - `Validation(MustBePositive)` for a quantity below one
    /// - `Validation(TooLarge)` when the cart subtotal would exceed
    ///   [`MAX_SUBTOTAL_CENTS`](crate::MAX_SUBTOTAL_CENTS)
    pub fn add_item(&mut self, product: &str, price: Decimal, quantity: i64) -> CartResult<()> {
        let result = check_new_item(product, price, quantity)
            .and_then(|()| self.items_with_added(product, price, quantity));

        match result {
            Ok(items) => {
                self.items = items;
                debug!(product, %price, quantity, "added item");
                Ok(())
            }
            Err(err) => {
                warn!(product, %price, quantity, error = %err, "add_item rejected");
                Err(err.into())
            }
        }
    }

    /// Removes an item from the cart by product name.
    pub fn remove_item(&mut self, product: &str) -> CartResult<()> {
        let result = validate_product(product)
            .map_err(CartError::from)
            .and_then(|()| self.position(product));

        match result {
            Ok(index) => {
                self.items.remove(index);
                debug!(product, "removed item");
                Ok(())
            }
            Err(err) => {
                warn!(product, error = %err, "remove_item rejected");
                Err(err)
            }
        }
    }

    /// Sets the quantity of an item already in the cart.
    ///
    /// Replaces the quantity; it does not add to it. Zero is rejected rather
    /// than treated as a removal.
    pub fn update_quantity(&mut self, product: &str, quantity: i64) -> CartResult<()> {
        let result = validate_product(product)
            .and_then(|()| validate_quantity(quantity))
            .map_err(CartError::from)
            .and_then(|()| self.position(product))
            .and_then(|index| {
                let mut items = self.items.clone();
                items[index].quantity = quantity;
                check_cart_total(&items)?;
                Ok(items)
            });

        match result {
            Ok(items) => {
                self.items = items;
                debug!(product, quantity, "updated item quantity");
                Ok(())
            }
            Err(err) => {
                warn!(product, quantity, error = %err, "update_quantity rejected");
                Err(err)
            }
        }
    }

    /// Applies a discount code against the current subtotal.
    ///
    /// ## Behavior
    /// - The code is trimmed and matched case-insensitively
    /// - The discount amount is computed now and stored; later item changes
    ///   do not update it
    /// - A second valid code replaces the first (discounts never stack)
    /// - An unknown code leaves any existing discount in place
    pub fn apply_discount(&mut self, code: &str) -> CartResult<()> {
        if let Err(err) = validate_discount_code(code) {
            warn!(code, error = %err, "apply_discount rejected");
            return Err(err.into());
        }

        let Some(discount) = DiscountCode::parse(code) else {
            let err = CartError::InvalidDiscountCode(code.to_string());
            warn!(code, error = %err, "apply_discount rejected");
            return Err(err);
        };

        self.applied_discount = discount.amount_for(self.subtotal());
        self.discount_code = Some(discount);
        debug!(
            code = discount.code(),
            amount = %self.applied_discount,
            "applied discount"
        );
        Ok(())
    }

    /// Removes all items and the discount. Always succeeds.
    pub fn clear(&mut self) {
        self.items.clear();
        self.applied_discount = Decimal::ZERO;
        self.discount_code = None;
        self.created_at = Utc::now();
        debug!(cart_id = %self.id, "cleared cart");
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sum of `price × quantity` over all items, rounded to cents.
    ///
    /// Rounded once over the exact sum, not per line.
    pub fn subtotal(&self) -> Money {
        let sum = self
            .items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.raw_total()));
        Money::from_decimal(sum)
    }

    /// The applied discount, rounded to cents. Zero when none is applied.
    pub fn discount(&self) -> Money {
        Money::from_decimal(self.applied_discount)
    }

    /// Tax on the discounted amount: `(subtotal − discount) × 10%`.
    ///
    /// Uses the rounded subtotal and the unrounded stored discount. Never
    /// taxes the raw subtotal.
    pub fn tax(&self) -> Money {
        TAX_RATE.apply_to(self.discounted_subtotal())
    }

    /// `round(subtotal − discount) + tax`.
    ///
    /// The discounted amount and the tax are rounded separately before they
    /// are added, see the module docs.
    pub fn total(&self) -> Money {
        Money::from_decimal(self.discounted_subtotal()) + self.tax()
    }

    /// Copies of every item, in insertion order.
    pub fn cart_items(&self) -> Vec<CartItemView> {
        self.items.iter().map(LineItem::view).collect()
    }

    /// Copy of a single item, if present.
    pub fn get_item(&self, product: &str) -> Option<CartItemView> {
        self.items
            .iter()
            .find(|i| i.product == product)
            .map(LineItem::view)
    }

    /// Number of distinct products (not units).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all products, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stored discount amount, unrounded (e.g. `105.997`).
    pub fn applied_discount_amount(&self) -> Decimal {
        self.applied_discount
    }

    /// The code behind the current discount, if any.
    pub fn applied_discount_code(&self) -> Option<DiscountCode> {
        self.discount_code
    }

    fn discounted_subtotal(&self) -> Decimal {
        self.subtotal().to_decimal() - self.applied_discount
    }

    /// The item list after adding `quantity` of `product`, if it still fits.
    fn items_with_added(
        &self,
        product: &str,
        price: Decimal,
        quantity: i64,
    ) -> Result<Vec<LineItem>, ValidationError> {
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.product == product) {
            Some(item) => {
                item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                    ValidationError::TooLarge {
                        field: "quantity".to_string(),
                    }
                })?;
            }
            None => items.push(LineItem {
                product: product.to_string(),
                unit_price: price,
                quantity,
            }),
        }
        check_cart_total(&items)?;
        Ok(items)
    }

    fn position(&self, product: &str) -> CartResult<usize> {
        self.items
            .iter()
            .position(|i| i.product == product)
            .ok_or_else(|| CartError::ProductNotFound(product.to_string()))
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that every line and the cart subtotal fit within
/// [`MAX_SUBTOTAL_CENTS`].
fn check_cart_total(items: &[LineItem]) -> Result<(), ValidationError> {
    let subtotal = items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| {
            item.checked_total().and_then(|line| acc.checked_add(line))
        })
        .and_then(Money::try_from_decimal);

    match subtotal {
        Some(total) if total.cents() <= MAX_SUBTOTAL_CENTS => Ok(()),
        _ => Err(ValidationError::TooLarge {
            field: "cart total".to_string(),
        }),
    }
}

fn check_new_item(product: &str, price: Decimal, quantity: i64) -> Result<(), ValidationError> {
    validate_product(product)?;
    validate_price(price)?;
    validate_quantity(quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
