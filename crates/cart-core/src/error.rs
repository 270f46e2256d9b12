//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CartError            - Why a cart mutation was rejected               │
//! │  ├── Validation       - Malformed caller input (wraps ValidationError) │
//! │  ├── ProductNotFound  - Product is not in the cart                     │
//! │  └── InvalidDiscountCode - Code is not in the discount table           │
//! │                                                                         │
//! │  Flow: ValidationError → CartError → caller (shown / logged)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Is Not Fatal
//! A rejected mutation returns `Err(CartError)` and leaves the cart exactly as
//! it was. Nothing in this crate panics on caller input.

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Reasons a cart mutation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Product is not in the cart.
    ///
    /// ## When This Occurs
    /// - `remove_item` / `update_quantity` on a product never added
    /// - Product was already removed, or the cart was cleared
    #[error("Product not found in cart: {0}")]
    ProductNotFound(String),

    /// Discount code is not in the discount table.
    ///
    /// Holds the code as the caller typed it.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Checked before the cart is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value would push the cart past what it can total in cents.
    #[error("{field} is too large")]
    TooLarge { field: String },

    /// Invalid format (e.g., non-integer quantity, malformed JSON).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
