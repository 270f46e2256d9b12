//! # cart-core: In-Memory Shopping Cart
//!
//! Line items, one promotional discount code, tax, and totals, with no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Promo Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         External callers (CLI launcher, demo, browser page)     │   │
//! │  │    construct a Cart, send mutations, render figures              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Rust API or CartCommand JSON           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   money   │  │   types   │  │ validation│  │   │
//! │  │   │   Cart    │  │   Money   │  │  TaxRate  │  │   rules   │  │   │
//! │  │   │  summary  │  │ rounding  │  │ Discount  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO LOCKS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The `Cart` entity and its operations
//! - [`summary`] - Plain-text cart summary
//! - [`command`] - Serializable commands and snapshots for callers
//! - [`types`] - Tax rate, discount codes, item views
//! - [`money`] - Money type in integer cents, decimal rounding
//! - [`error`] - Error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Exact Arithmetic**: Prices are `Decimal`, figures are integer cents
//! 2. **Round to Cents**: Every reported figure is rounded half away from zero
//! 3. **Recoverable Failures**: Rejected input is an `Err`, logged via
//!    `tracing`, and never panics or changes the cart
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::Cart;
//! use rust_decimal_macros::dec;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Item", dec!(0.01), 3).unwrap();
//! assert_eq!(cart.subtotal().cents(), 3);
//!
//! assert!(cart.add_item("Item", dec!(-1), 1).is_err());
//! assert!(cart.apply_discount("BOGUS").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod command;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use command::{CartCommand, CartSnapshot};
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use types::{CartItemView, DiscountCode, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to the discounted subtotal (10%).
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Recognised discount codes and their percentage in basis points.
///
/// Codes are matched after trimming and upper-casing the caller's input.
pub const DISCOUNT_CODES: &[(&str, u32)] = &[("SAVE10", 1000), ("SAVE20", 2000)];

/// Largest subtotal, in cents, a cart accepts.
///
/// Half the `i64` range, so tax and a stale discount can be added to it
/// without leaving the range.
pub const MAX_SUBTOTAL_CENTS: i64 = i64::MAX / 2;

/// Summary text for a cart with no items.
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty";
