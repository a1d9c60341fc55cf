//! # Validation Module
//!
//! Input validation for catalog entries.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  ProductCatalog::new(entries)                                          │
//! │  ├── validate_product_code(code)   ← THIS MODULE                       │
//! │  └── validate_price_cents(price)   ← THIS MODULE                       │
//! │                                                                         │
//! │  Checkout::scan(code)                                                  │
//! │  └── (nothing: unknown or odd codes are counted at price 0)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_price_cents, validate_product_code};
//!
//! assert!(validate_product_code("COKE-330").is_ok());
//! assert!(validate_price_cents(50).is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_PRICE_CENTS, MAX_PRODUCT_CODE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product code before it enters the catalog.
///
/// ## Rules
/// - Must not be empty or whitespace-padded
/// - At most [`MAX_PRODUCT_CODE_LEN`] characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_code;
///
/// assert!(validate_product_code("A").is_ok());
/// assert!(validate_product_code("").is_err());
/// assert!(validate_product_code(" A").is_err());
/// assert!(validate_product_code("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product code".to_string(),
        });
    }

    if code.chars().count() > MAX_PRODUCT_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "product code".to_string(),
            max: MAX_PRODUCT_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed [`MAX_PRICE_CENTS`]
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}
