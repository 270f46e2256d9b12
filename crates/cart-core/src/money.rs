//! # Money Module
//!
//! Provides the `Money` type for every figure the cart derives.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller input          Derived figures                                  │
//! │  ────────────          ───────────────                                  │
//! │  price: Decimal  ───►  line total, subtotal, discount, tax, total       │
//! │  (exact, any scale)    Money (integer cents)                            │
//! │                                                                         │
//! │  Decimal → Money rounds to the nearest cent, halves away from zero:    │
//! │    105.997 → 106.00     0.005 → 0.01     -0.005 → -0.01                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::from_cents(1099); // $10.99
//! assert_eq!(price.to_string(), "$10.99");
//!
//! let discount = Money::from_decimal(dec!(105.997));
//! assert_eq!(discount.cents(), 10600);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so a stale discount larger than the subtotal can surface as a
/// negative tax or total instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent.
    ///
    /// Midpoints round away from zero ("round to nearest cent"), never to
    /// even.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::from_decimal(dec!(0.125)).cents(), 13);
    /// assert_eq!(Money::from_decimal(dec!(0.135)).cents(), 14);
    /// assert_eq!(Money::from_decimal(dec!(-0.125)).cents(), -13);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        Self::try_from_decimal(amount).unwrap_or(if amount.is_sign_negative() {
            Money(i64::MIN)
        } else {
            Money(i64::MAX)
        })
    }

    /// Rounds like [`Money::from_decimal`], or `None` when the cent count
    /// does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal::Decimal;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::try_from_decimal(dec!(1.005)), Some(Money::from_cents(101)));
    /// assert_eq!(Money::try_from_decimal(Decimal::MAX), None);
    /// ```
    pub fn try_from_decimal(amount: Decimal) -> Option<Self> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Returns the value as a decimal amount of currency units.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1234.56`, with a leading `-` for negative amounts.
///
/// This is the exact format used by the cart summary.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Saturates at the `i64` bounds.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
