//! # Domain Types
//!
//! Identifier types shared by the catalog, the discount rules and the
//! checkout.
//!
//! ## Product Codes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "A" ──► ProductCode("A") ──┬──► ProductCatalog   (price lookup)        │
//! │                             ├──► DiscountRules    (rule lookup)         │
//! │                             └──► Checkout counts  (scan tally)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A code is opaque: the checkout never inspects it beyond equality and
//! hashing. Format checks happen only when a code enters the catalog
//! (see [`crate::validation`]); scanning accepts any code.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a distinct item type (e.g. `"A"`, `"COKE-330"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Creates a product code.
    pub fn new(code: impl Into<String>) -> Self {
        ProductCode(code.into())
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(code: &str) -> Self {
        ProductCode(code.to_string())
    }
}

impl From<String> for ProductCode {
    fn from(code: String) -> Self {
        ProductCode(code)
    }
}

impl From<&ProductCode> for ProductCode {
    fn from(code: &ProductCode) -> Self {
        code.clone()
    }
}

/// Lets maps keyed by `ProductCode` be queried with a plain `&str`.
impl Borrow<str> for ProductCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
