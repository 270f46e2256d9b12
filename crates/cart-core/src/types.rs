//! # Domain Types
//!
//! Value types the cart is built from.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  CartItemView   │   │  DiscountCode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product (key)  │──►│  product        │   │  code "SAVE10"  │       │
//! │  │  unit_price     │   │  price          │   │  percent_bps    │       │
//! │  │  quantity       │   │  quantity       │   │  1000 = 10%     │       │
//! │  └─────────────────┘   │  item_total     │   └─────────────────┘       │
//! │   owned by the Cart    └─────────────────┘                              │
//! │                         copy handed out      ┌─────────────────┐       │
//! │                                              │    TaxRate      │       │
//! │                                              │  bps (u32)      │       │
//! │                                              │  1000 = 10%     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DISCOUNT_CODES;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate as an exact decimal fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4)
    }

    /// Returns the rate as a whole-percent label, e.g. `"10%"`.
    ///
    /// Fractional percentages keep their digits (`825` → `"8.25%"`).
    pub fn label(&self) -> String {
        format!("{}%", (self.as_decimal() * Decimal::ONE_HUNDRED).normalize())
    }

    /// Computes tax on `amount`, rounded to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::types::TaxRate;
    /// use rust_decimal_macros::dec;
    ///
    /// let tax = TaxRate::from_bps(1000).apply_to(dec!(953.973));
    /// assert_eq!(tax.cents(), 9540); // 95.3973 → $95.40
    /// ```
    pub fn apply_to(&self, amount: Decimal) -> Money {
        Money::from_decimal(amount.saturating_mul(self.as_decimal()))
    }
}

// =============================================================================
// Discount Code
// =============================================================================

/// A recognised promotional code from the fixed discount table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountCode {
    code: &'static str,
    percent_bps: u32,
}

impl DiscountCode {
    /// Looks up a code, ignoring surrounding whitespace and ASCII case.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::types::DiscountCode;
    ///
    /// let code = DiscountCode::parse("  save20 ").unwrap();
    /// assert_eq!(code.code(), "SAVE20");
    /// assert_eq!(code.percent_bps(), 2000);
    ///
    /// assert!(DiscountCode::parse("SAVE30").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase();
        DISCOUNT_CODES
            .iter()
            .find(|(code, _)| *code == normalized)
            .map(|&(code, percent_bps)| DiscountCode { code, percent_bps })
    }

    /// The canonical (upper-case) code.
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// The discount percentage in basis points.
    #[inline]
    pub const fn percent_bps(&self) -> u32 {
        self.percent_bps
    }

    /// Discount amount for `subtotal`, left unrounded.
    ///
    /// `$1059.97` at 10% is `105.997`; rounding happens when the discount is
    /// read, not when it is stored.
    pub fn amount_for(&self, subtotal: Money) -> Decimal {
        subtotal.to_decimal() * Decimal::new(self.percent_bps as i64, 4)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry held by the cart.
///
/// The unit price is frozen by the first `add_item` for the product; later
/// adds only raise the quantity.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LineItem {
    pub(crate) product: String,
    pub(crate) unit_price: Decimal,
    pub(crate) quantity: i64,
}

impl LineItem {
    /// Unrounded `unit_price × quantity`, or `None` if it overflows.
    pub(crate) fn checked_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Unrounded `unit_price × quantity`, saturating at `Decimal::MAX`.
    ///
    /// The cart only stores items whose totals fit, so this never saturates
    /// for an item it holds.
    pub(crate) fn raw_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Copy handed to callers.
    pub(crate) fn view(&self) -> CartItemView {
        CartItemView {
            product: self.product.clone(),
            price: self.unit_price,
            quantity: self.quantity,
            item_total: Money::from_decimal(self.raw_total()),
        }
    }
}

// =============================================================================
// Cart Item View
// =============================================================================

/// Snapshot of a line item, as returned by [`Cart::cart_items`](crate::Cart::cart_items).
///
/// Owned copy: changing it never touches the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product: String,
    /// Unit price as supplied by the caller (serialized as a string).
    #[ts(type = "string")]
    pub price: Decimal,
    pub quantity: i64,
    /// `price × quantity`, rounded to cents.
    pub item_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.as_decimal(), dec!(0.1));
        assert_eq!(TaxRate::from_bps(825).as_decimal(), dec!(0.0825));
    }

    #[test]
    fn test_tax_rate_label() {
        assert_eq!(TaxRate::from_bps(1000).label(), "10%");
        assert_eq!(TaxRate::from_bps(825).label(), "8.25%");
    }

    #[test]
    fn test_tax_applies_to_decimal_amount() {
        assert_eq!(TaxRate::from_bps(1000).apply_to(dec!(100)).cents(), 1000);
        assert_eq!(TaxRate::from_bps(1000).apply_to(dec!(0.05)).cents(), 1);
        assert_eq!(TaxRate::from_bps(1000).apply_to(dec!(0.04)).cents(), 0);
    }

    #[test]
    fn test_discount_code_normalization() {
        let canonical = DiscountCode::parse("SAVE10").unwrap();
        assert_eq!(DiscountCode::parse("save10"), Some(canonical));
        assert_eq!(DiscountCode::parse("\tSaVe10\n"), Some(canonical));
        assert!(DiscountCode::parse("").is_none());
        assert!(DiscountCode::parse("SAVE 10").is_none());
    }

    #[test]
    fn test_discount_amount_is_unrounded() {
        let code = DiscountCode::parse("SAVE10").unwrap();
        assert_eq!(code.amount_for(Money::from_cents(105997)), dec!(105.997));

        let code = DiscountCode::parse("SAVE20").unwrap();
        assert_eq!(code.amount_for(Money::from_cents(10000)), dec!(20));
    }

    #[test]
    fn test_discount_amount_for_huge_subtotal() {
        // $5 quadrillion; the cent count times bps no longer fits in i64
        let subtotal = Money::from_cents(500_000_000_000_000_000);
        let code = DiscountCode::parse("SAVE20").unwrap();
        assert_eq!(code.amount_for(subtotal), dec!(1000000000000000));

        let max = Money::from_cents(i64::MAX);
        assert_eq!(code.amount_for(max), Decimal::new(i64::MAX, 2) * dec!(0.2));
    }

    #[test]
    fn test_line_item_view() {
        let item = LineItem {
            product: "Mouse".to_string(),
            unit_price: dec!(29.99),
            quantity: 2,
        };
        let view = item.view();
        assert_eq!(view.item_total, Money::from_cents(5998));
        assert_eq!(view.price, dec!(29.99));
        assert_eq!(view.quantity, 2);
    }

    #[test]
    fn test_line_item_sub_cent_price() {
        let item = LineItem {
            product: "Bolt".to_string(),
            unit_price: dec!(0.005),
            quantity: 3,
        };
        assert_eq!(item.raw_total(), dec!(0.015));
        assert_eq!(item.view().item_total.cents(), 2);
    }

    #[test]
    fn test_line_item_overflowing_total() {
        let item = LineItem {
            product: "Big".to_string(),
            unit_price: Decimal::MAX,
            quantity: 2,
        };
        assert_eq!(item.checked_total(), None);
        assert_eq!(item.raw_total(), Decimal::MAX);
    }
}
