//! # Checkout
//!
//! The scanning session: tallies product codes and prices the basket.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Operations                                  │
//! │                                                                         │
//! │  Checkout::new(&catalog, &rules)                                       │
//! │       │  every rule's code must be in the catalog                      │
//! │       ▼                                                                 │
//! │  scan("A") ──► counts["A"] += 1          (never fails)                 │
//! │  scan("B") ──► counts["B"] += 1                                        │
//! │  scan("A") ──► counts["A"] += 1                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total() = Σ max(0, price(code) × count − discount(code, count))       │
//! │                                                                         │
//! │  total() is a pure query: call it between scans for a running total.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Derived Totals?
//! The total is recomputed from the per-code counts every time instead of
//! being adjusted on each scan. Counts forget scan order, so `A,A,B,A` and
//! `B,A,A,A` price identically.
//!
//! ## Negative Lines
//! A line whose discount exceeds its gross amount contributes zero, never a
//! negative amount. `net = max(0, gross − discount)`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

use crate::catalog::ProductCatalog;
use crate::discount::DiscountRules;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductCode;

// =============================================================================
// Checkout
// =============================================================================

/// One basket being scanned.
///
/// Borrows the catalog and rules for its whole lifetime, so neither can change
/// while a basket is open. Scans take `&mut self`; share a checkout across
/// threads only behind your own lock.
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    catalog: &'a ProductCatalog,
    rules: &'a DiscountRules,
    counts: HashMap<ProductCode, u64>,
}

impl<'a> Checkout<'a> {
    /// Opens an empty basket.
    ///
    /// ## Errors
    /// [`CoreError::RuleForUnknownProduct`] when a rule is bound to a code the
    /// catalog doesn't price. Nothing after construction can fail.
    pub fn new(catalog: &'a ProductCatalog, rules: &'a DiscountRules) -> CoreResult<Self> {
        if let Some((code, _)) = rules.iter().find(|(code, _)| !catalog.contains(code.as_str())) {
            return Err(CoreError::RuleForUnknownProduct {
                code: code.to_string(),
            });
        }

        debug!(
            products = catalog.len(),
            rules = rules.len(),
            "Checkout opened"
        );

        Ok(Checkout {
            catalog,
            rules,
            counts: HashMap::new(),
        })
    }

    /// Adds one unit of `code` to the basket.
    ///
    /// Codes missing from the catalog are still counted; they price at zero.
    pub fn scan(&mut self, code: impl Into<ProductCode>) {
        let code = code.into();

        if !self.catalog.contains(code.as_str()) {
            debug!(%code, "Scanned product has no price");
        }

        let count = self.counts.entry(code).or_insert(0);
        *count += 1;
        trace!(count = *count, "Scan recorded");
    }

    /// Payable total for everything scanned so far.
    pub fn total(&self) -> Money {
        self.counts
            .iter()
            .map(|(code, &count)| self.price_line(code, count).net)
            .sum()
    }

    /// Number of units of `code` scanned so far.
    pub fn quantity_of(&self, code: &str) -> u64 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Number of distinct product codes scanned.
    pub fn item_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of scans in total.
    pub fn total_quantity(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Whether nothing has been scanned yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Per-product breakdown of the current total, lines sorted by code.
    pub fn receipt(&self) -> Receipt {
        let mut lines: Vec<ReceiptLine> = self
            .counts
            .iter()
            .map(|(code, &count)| self.price_line(code, count))
            .collect();
        lines.sort_by(|a, b| a.code.cmp(&b.code));

        Receipt {
            total: lines.iter().map(|line| line.net).sum(),
            item_count: lines.len(),
            total_quantity: lines.iter().map(|line| line.quantity).sum(),
            lines,
        }
    }

    fn price_line(&self, code: &ProductCode, count: u64) -> ReceiptLine {
        let unit_price = self.catalog.price_of(code.as_str());
        let gross = unit_price.multiply_quantity(count);
        let discount = self.rules.discount_for(code.as_str(), count);

        ReceiptLine {
            code: code.clone(),
            quantity: count,
            unit_price,
            gross,
            discount,
            net: (gross - discount).clamp_non_negative(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One product's share of the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub code: ProductCode,
    pub quantity: u64,
    pub unit_price: Money,
    /// `unit_price × quantity`
    pub gross: Money,
    pub discount: Money,
    /// `max(0, gross − discount)`
    pub net: Money,
}

/// Snapshot of a basket: every line plus the total they add up to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{:<12} {:>4} x {:>9} = {:>10}",
                line.code.as_str(),
                line.quantity,
                line.unit_price.to_string(),
                line.gross.to_string()
            )?;
            if !line.discount.is_zero() {
                writeln!(f, "{:<12} {:>28}", "  discount", format!("-{}", line.discount))?;
            }
        }
        write!(f, "{:<12} {:>28}", "TOTAL", self.total.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
