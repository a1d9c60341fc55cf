//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing configuration errors                   │
//! │  └── ValidationError  - Catalog input validation failures              │
//! │                                                                         │
//! │  checkout-cli errors (separate crate)                                  │
//! │  └── CliError         - Config file, I/O and usage failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Errors Happen
//! Every error in this crate is raised while *building* a catalog, a rule or
//! a [`Checkout`](crate::Checkout). Once a checkout exists, `scan` and
//! `total` cannot fail.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing configuration errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A discount rule is bound to a product code the catalog doesn't price.
    ///
    /// ## When This Occurs
    /// - Typo in the rule's product code
    /// - Product removed from the price list but its promotion left behind
    ///
    /// ## User Workflow
    /// ```text
    /// rules: { "AA": Bulk(3, 20) }     catalog: { "A": 50 }
    ///      │
    ///      ▼
    /// Checkout::new(&catalog, &rules)
    ///      │
    ///      ▼
    /// RuleForUnknownProduct { code: "AA" }
    /// ```
    #[error("Discount rule bound to unknown product: {code}")]
    RuleForUnknownProduct { code: String },

    /// A discount rule was built with an out-of-range parameter.
    ///
    /// ## When This Occurs
    /// - Bulk threshold of zero or less
    /// - Negative discount amount
    #[error("Invalid discount rule parameter {field}: {reason}")]
    InvalidRuleParameter { field: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when catalog input doesn't meet requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., illegal characters in a product code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same product code priced twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
