//! # Validation Module
//!
//! Input checks run before any cart mutation.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller input ──► validate_* ──► Ok  ──► cart mutated                   │
//! │                        │                                                │
//! │                        └──► Err(ValidationError) ──► cart untouched     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_product, validate_quantity};
//!
//! assert!(validate_product("Laptop").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Otherwise any text; names are case-sensitive keys and are stored as given
pub fn validate_product(product: &str) -> ValidationResult<()> {
    if product.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount code before lookup.
pub fn validate_discount_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "discount code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - No upper bound
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use cart_core::validation::validate_price;
/// use rust_decimal_macros::dec;
///
/// assert!(validate_price(dec!(10.99)).is_ok());
/// assert!(validate_price(dec!(0)).is_ok());
/// assert!(validate_price(dec!(-0.01)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_product() {
        assert!(validate_product("Laptop").is_ok());
        assert!(validate_product("usb-c cable (2m)").is_ok());

        assert!(validate_product("").is_err());
        assert!(validate_product("   ").is_err());
    }

    #[test]
    fn test_validate_discount_code() {
        assert!(validate_discount_code("SAVE10").is_ok());
        assert!(validate_discount_code("nonsense").is_ok());
        assert!(validate_discount_code("").is_err());
        assert!(validate_discount_code(" \t").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(dec!(0)).is_ok());
        assert!(validate_price(dec!(999.99)).is_ok());
        assert!(validate_price(dec!(0.001)).is_ok());

        assert_eq!(
            validate_price(dec!(-5)),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }
}
