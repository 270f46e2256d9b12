//! # Cart Summary
//!
//! Plain-text rendering of a cart for printing or logging.
//!
//! ```text
//! Laptop: $999.99 x 1 = $999.99
//! Mouse: $29.99 x 2 = $59.98
//!
//! Subtotal: $1059.97
//! Discount: -$106.00          ◄── only when a discount is applied
//! Tax (10%): $95.40
//! ------------------------------
//! TOTAL: $1049.37
//! ```

use crate::cart::Cart;
use crate::money::Money;
use crate::{EMPTY_CART_MESSAGE, TAX_RATE};

/// Line between the tax line and the total.
pub const SUMMARY_SEPARATOR: &str = "------------------------------";

impl Cart {
    /// Formats the cart as text. Reads the cart only.
    ///
    /// An empty cart yields [`EMPTY_CART_MESSAGE`].
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return EMPTY_CART_MESSAGE.to_string();
        }

        let mut lines: Vec<String> = self
            .cart_items()
            .iter()
            .map(|item| {
                format!(
                    "{}: {} x {} = {}",
                    item.product,
                    Money::from_decimal(item.price),
                    item.quantity,
                    item.item_total
                )
            })
            .collect();

        lines.push(String::new());
        lines.push(format!("Subtotal: {}", self.subtotal()));

        let discount = self.discount();
        if discount.is_positive() {
            lines.push(format!("Discount: -{}", discount));
        }

        lines.push(format!("Tax ({}): {}", TAX_RATE.label(), self.tax()));
        lines.push(SUMMARY_SEPARATOR.to_string());
        lines.push(format!("TOTAL: {}", self.total()));

        lines.join("\n")
    }
}
