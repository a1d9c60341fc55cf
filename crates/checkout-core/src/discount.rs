//! # Discount Rules
//!
//! Quantity-based discounts, bound per product code.
//!
//! ## Rule Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (rule, count) ──► DiscountRule::discount_for(count) ──► Money          │
//! │                                                                         │
//! │  No rule bound        → 0                                               │
//! │  Bulk { 3, 20 }       → floor(count / 3) × 20                           │
//! │                                                                         │
//! │    count:     1   2   3   4   5   6   7                                 │
//! │    discount:  0   0  20  20  20  40  40                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounts are computed from the *accumulated* count of a product, never
//! from "every Nth scan", so the order of scans cannot change a total.
//! Rules never look at other products: there is no cross-product bundling.
//!
//! ## Serialized Form
//! Rules are plain data. In a TOML price list a bulk rule reads:
//! ```toml
//! [rules.A]
//! kind = "bulk"
//! threshold = 3
//! discount = 20
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductCode;
use crate::MAX_PRICE_CENTS;

// =============================================================================
// Bulk Discount
// =============================================================================

/// "Every `threshold` units, take `discount` off."
///
/// Fields are private so a `BulkDiscount` can only exist with a positive
/// threshold and a non-negative discount, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBulkDiscount")]
pub struct BulkDiscount {
    threshold: u64,
    discount: Money,
}

impl BulkDiscount {
    /// Creates a bulk discount.
    ///
    /// ## Errors
    /// [`CoreError::InvalidRuleParameter`] when `threshold <= 0` or
    /// `discount_cents` is outside `0..=MAX_PRICE_CENTS`.
    pub fn new(threshold: i64, discount_cents: i64) -> CoreResult<Self> {
        if threshold <= 0 {
            return Err(CoreError::InvalidRuleParameter {
                field: "threshold".to_string(),
                reason: format!("must be positive, got {threshold}"),
            });
        }

        if discount_cents < 0 {
            return Err(CoreError::InvalidRuleParameter {
                field: "discount".to_string(),
                reason: format!("must not be negative, got {discount_cents}"),
            });
        }

        if discount_cents > MAX_PRICE_CENTS {
            return Err(CoreError::InvalidRuleParameter {
                field: "discount".to_string(),
                reason: format!("must not exceed {MAX_PRICE_CENTS}, got {discount_cents}"),
            });
        }

        Ok(BulkDiscount {
            threshold: threshold as u64,
            discount: Money::from_cents(discount_cents),
        })
    }

    /// Builds a rule from literals in a `const` item.
    ///
    /// Out-of-range parameters panic, which inside a `const` is a compile
    /// error. Use [`BulkDiscount::new`] for anything not known at compile time.
    pub const fn from_const(threshold: u64, discount_cents: i64) -> Self {
        assert!(threshold > 0, "bulk threshold must be positive");
        assert!(
            discount_cents >= 0 && discount_cents <= MAX_PRICE_CENTS,
            "bulk discount out of range"
        );
        BulkDiscount {
            threshold,
            discount: Money::from_cents(discount_cents),
        }
    }

    /// Units per discounted group.
    #[inline]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Amount taken off per complete group.
    #[inline]
    pub fn discount(&self) -> Money {
        self.discount
    }

    /// `floor(count / threshold) * discount`.
    #[inline]
    pub fn discount_for(&self, count: u64) -> Money {
        self.discount.multiply_quantity(count / self.threshold)
    }
}

/// Unchecked wire form, validated through [`BulkDiscount::new`].
#[derive(Deserialize)]
struct RawBulkDiscount {
    threshold: i64,
    discount: i64,
}

impl TryFrom<RawBulkDiscount> for BulkDiscount {
    type Error = CoreError;

    fn try_from(raw: RawBulkDiscount) -> Result<Self, Self::Error> {
        BulkDiscount::new(raw.threshold, raw.discount)
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// A discount strategy together with its parameters.
///
/// "No discount" is not a variant: it is the absence of a rule for a code in
/// [`DiscountRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountRule {
    /// Fixed amount off per complete group of units.
    Bulk(BulkDiscount),
}

impl DiscountRule {
    /// Shorthand for `DiscountRule::Bulk(BulkDiscount::new(..)?)`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::DiscountRule;
    ///
    /// let rule = DiscountRule::bulk(3, 20)?;
    /// assert_eq!(rule.discount_for(2).cents(), 0);
    /// assert_eq!(rule.discount_for(6).cents(), 40);
    /// # Ok::<(), checkout_core::CoreError>(())
    /// ```
    pub fn bulk(threshold: i64, discount_cents: i64) -> CoreResult<Self> {
        BulkDiscount::new(threshold, discount_cents).map(DiscountRule::Bulk)
    }

    /// Total discount for `count` units of the product this rule is bound to.
    pub fn discount_for(&self, count: u64) -> Money {
        match self {
            DiscountRule::Bulk(bulk) => bulk.discount_for(count),
        }
    }
}

// =============================================================================
// Discount Rules
// =============================================================================

/// At most one [`DiscountRule`] per product code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRules {
    rules: BTreeMap<ProductCode, DiscountRule>,
}

impl DiscountRules {
    /// Creates an empty rule set (every product at full price).
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `rule` to `code`, returning the rule it replaces, if any.
    pub fn insert(&mut self, code: impl Into<ProductCode>, rule: DiscountRule) -> Option<DiscountRule> {
        self.rules.insert(code.into(), rule)
    }

    /// The rule bound to `code`.
    pub fn rule_for(&self, code: &str) -> Option<&DiscountRule> {
        self.rules.get(code)
    }

    /// Discount for `count` units of `code`; zero when no rule is bound.
    pub fn discount_for(&self, code: &str, count: u64) -> Money {
        self.rule_for(code)
            .map(|rule| rule.discount_for(count))
            .unwrap_or_default()
    }

    /// Number of products with a rule bound.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no product has a rule (everything at full price).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates bound rules in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductCode, &DiscountRule)> + '_ {
        self.rules.iter()
    }
}

impl<C: Into<ProductCode>> FromIterator<(C, DiscountRule)> for DiscountRules {
    fn from_iter<I: IntoIterator<Item = (C, DiscountRule)>>(iter: I) -> Self {
        DiscountRules {
            rules: iter
                .into_iter()
                .map(|(code, rule)| (code.into(), rule))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_discount_groups() {
        let rule = DiscountRule::bulk(3, 20).unwrap();
        let discounts: Vec<i64> = (0..=7).map(|n| rule.discount_for(n).cents()).collect();
        assert_eq!(discounts, vec![0, 0, 0, 20, 20, 20, 40, 40]);
    }

    #[test]
    fn test_bulk_discount_pairs() {
        let rule = DiscountRule::bulk(2, 15).unwrap();
        assert_eq!(rule.discount_for(1).cents(), 0);
        assert_eq!(rule.discount_for(2).cents(), 15);
        assert_eq!(rule.discount_for(4).cents(), 30);
    }

    #[test]
    fn test_threshold_of_one_discounts_every_unit() {
        let rule = DiscountRule::bulk(1, 5).unwrap();
        assert_eq!(rule.discount_for(4).cents(), 20);
    }

    #[test]
    fn test_zero_discount_is_allowed() {
        let rule = DiscountRule::bulk(3, 0).unwrap();
        assert!(rule.discount_for(9).is_zero());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        for threshold in [0, -3] {
            let err = DiscountRule::bulk(threshold, 20).unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidRuleParameter { ref field, .. } if field == "threshold"
            ));
        }
    }

    #[test]
    fn test_rejects_negative_discount() {
        let err = BulkDiscount::new(3, -20).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidRuleParameter { ref field, .. } if field == "discount"
        ));
    }

    #[test]
    fn test_rejects_discount_above_price_limit() {
        assert!(BulkDiscount::new(1, MAX_PRICE_CENTS).is_ok());

        for discount in [MAX_PRICE_CENTS + 1, i64::MAX] {
            let err = DiscountRule::bulk(1, discount).unwrap_err();
            assert!(matches!(
                err,
                CoreError::InvalidRuleParameter { ref field, .. } if field == "discount"
            ));
        }
    }

    #[test]
    fn test_const_rule_matches_checked_rule() {
        const THREE_FOR_TWENTY_OFF: BulkDiscount = BulkDiscount::from_const(3, 20);
        assert_eq!(THREE_FOR_TWENTY_OFF, BulkDiscount::new(3, 20).unwrap());
    }

    #[test]
    fn test_huge_count_saturates() {
        let rule = DiscountRule::bulk(1, MAX_PRICE_CENTS).unwrap();
        assert_eq!(rule.discount_for(u64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_accessors() {
        let bulk = BulkDiscount::new(3, 20).unwrap();
        assert_eq!(bulk.threshold(), 3);
        assert_eq!(bulk.discount(), Money::from_cents(20));
    }

    #[test]
    fn test_rules_lookup_and_replace() {
        let mut rules = DiscountRules::new();
        assert!(rules.is_empty());

        assert!(rules.insert("A", DiscountRule::bulk(3, 20).unwrap()).is_none());
        let replaced = rules.insert("A", DiscountRule::bulk(2, 10).unwrap());
        assert_eq!(replaced, Some(DiscountRule::bulk(3, 20).unwrap()));

        assert_eq!(rules.len(), 1);
        assert_eq!(rules.discount_for("A", 4).cents(), 20);
        assert!(rules.discount_for("B", 4).is_zero());
        assert!(rules.rule_for("B").is_none());
    }

    #[test]
    fn test_rules_from_iter() {
        let rules: DiscountRules = [
            ("B", DiscountRule::bulk(2, 15).unwrap()),
            ("A", DiscountRule::bulk(3, 20).unwrap()),
        ]
        .into_iter()
        .collect();

        let codes: Vec<&str> = rules.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_rule_json_shape() {
        let rule = DiscountRule::bulk(3, 20).unwrap();
        let json = serde_json::to_value(rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "bulk", "threshold": 3, "discount": 20 })
        );

        let back: DiscountRule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_deserialize_validates_parameters() {
        let result: Result<DiscountRule, _> =
            serde_json::from_str(r#"{ "kind": "bulk", "threshold": 0, "discount": 20 }"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }
}
