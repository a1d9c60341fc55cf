//! # Product Catalog
//!
//! Unit prices keyed by product code.
//!
//! ## Lifecycle
//! ```text
//! entries (code, cents) ──► ProductCatalog::new ──► validated, frozen
//!                                   │
//!                                   ├── bad code    → ValidationError
//!                                   ├── price < 0   → ValidationError
//!                                   └── duplicate   → ValidationError
//! ```
//! There is no mutation API: a catalog is immutable for as long as any
//! [`Checkout`](crate::Checkout) borrows it.

use std::collections::BTreeMap;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::ProductCode;
use crate::validation::{validate_price_cents, validate_product_code};

/// Immutable mapping from product code to unit price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    prices: BTreeMap<ProductCode, Money>,
}

impl ProductCatalog {
    /// Builds a catalog from `(code, price_cents)` pairs.
    ///
    /// ## Errors
    /// - [`ValidationError::Required`] / [`ValidationError::TooLong`] /
    ///   [`ValidationError::InvalidFormat`] for a malformed code
    /// - [`ValidationError::OutOfRange`] for a negative price
    /// - [`ValidationError::Duplicate`] when a code is listed twice
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::ProductCatalog;
    ///
    /// let catalog = ProductCatalog::new([("A", 50), ("B", 30)])?;
    /// assert_eq!(catalog.price_of("A").cents(), 50);
    /// assert_eq!(catalog.price_of("Z").cents(), 0);
    /// # Ok::<(), checkout_core::CoreError>(())
    /// ```
    pub fn new<I, C>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (C, i64)>,
        C: Into<ProductCode>,
    {
        let mut prices = BTreeMap::new();

        for (code, cents) in entries {
            let code: ProductCode = code.into();
            validate_product_code(code.as_str())?;
            validate_price_cents(cents)?;

            if prices.contains_key(&code) {
                return Err(ValidationError::Duplicate {
                    field: "product code".to_string(),
                    value: code.to_string(),
                }
                .into());
            }
            prices.insert(code, Money::from_cents(cents));
        }

        Ok(ProductCatalog { prices })
    }

    /// Unit price for `code`, or zero when the catalog doesn't list it.
    #[inline]
    pub fn price_of(&self, code: &str) -> Money {
        self.prices.get(code).copied().unwrap_or_default()
    }

    /// Whether `code` has a price entry.
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.prices.contains_key(code)
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the catalog prices nothing at all.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates `(code, price)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductCode, Money)> + '_ {
        self.prices.iter().map(|(code, price)| (code, *price))
    }
}
