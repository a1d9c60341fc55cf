//! # checkout-core: Pure Pricing Logic for the Checkout
//!
//! This crate is the **heart** of the checkout. It turns a basket of scanned
//! product codes into a payable total, applying unit prices and per-product
//! bulk discounts. Everything here is pure computation with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-cli (apps/)                          │   │
//! │  │    pricing.toml ──► PricingConfig ──► scan codes ──► receipt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │ discount  │  │ checkout  │  │   money   │  │   │
//! │  │   │  prices   │  │   Bulk    │  │  scan()   │  │   Money   │  │   │
//! │  │   │  by code  │  │  rules    │  │  total()  │  │  (cents)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductCode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Unit prices by product code
//! - [`discount`] - Discount rules (bulk discounts)
//! - [`checkout`] - The scanning session and total computation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for catalog entries
//!
//! ## Design Principles
//!
//! 1. **Derived Totals**: the total is recomputed from scan counts, so the
//!    scan order never matters
//! 2. **Eager Errors**: bad configuration fails at construction, never at
//!    `scan` or `total`
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Checkout, DiscountRule, DiscountRules, ProductCatalog};
//!
//! let catalog = ProductCatalog::new([("A", 50), ("B", 30), ("C", 20), ("D", 15)])?;
//!
//! let mut rules = DiscountRules::new();
//! rules.insert("A", DiscountRule::bulk(3, 20)?);
//! rules.insert("B", DiscountRule::bulk(2, 15)?);
//!
//! let mut checkout = Checkout::new(&catalog, &rules)?;
//! for code in ["A", "A", "A", "B", "B", "D"] {
//!     checkout.scan(code);
//! }
//!
//! assert_eq!(checkout.total().cents(), 190);
//! # Ok::<(), checkout_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Checkout` instead of
// `use checkout_core::checkout::Checkout`

pub use catalog::ProductCatalog;
pub use checkout::{Checkout, Receipt, ReceiptLine};
pub use discount::{BulkDiscount, DiscountRule, DiscountRules};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::ProductCode;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product code.
///
/// ## Business Reason
/// Codes are printed on shelf labels and receipts; anything longer is
/// almost certainly a scanner misread.
pub const MAX_PRODUCT_CODE_LEN: usize = 50;

/// Maximum unit price or bulk discount amount, in cents ($10,000,000.00).
///
/// ## Business Reason
/// Keeps every line amount far from the i64 limit. Anything above this is a
/// data-entry error (an extra zero or two), not a real price.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;
