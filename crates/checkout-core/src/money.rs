//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices, discounts and totals are all whole numbers of the           │
//! │    smallest currency unit. A bulk discount of 20 is exactly 20.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_cents(50);
//!
//! let line = price.multiply_quantity(3);           // 150
//! let net = line - Money::from_cents(20);          // 130
//! assert_eq!(net.cents(), 130);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate values (`gross - discount`) may dip below
///   zero before the checkout clamps them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ProductCatalog price ──► × quantity ──► gross                          │
/// │                                            │                            │
/// │  DiscountRule ──────────► discount ────────┤                            │
/// │                                            ▼                            │
/// │                              net = max(0, gross - discount)             │
/// │                                            │                            │
/// │                                            ▼                            │
/// │                                 Checkout::total() = Σ net               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Clamps negative values to zero.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-5).clamp_non_negative(), Money::zero());
    /// assert_eq!(Money::from_cents(5).clamp_non_negative().cents(), 5);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    ///
    /// assert_eq!(Money::from_cents(2).multiply_quantity(u64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u64) -> Self {
        let qty = if qty > i64::MAX as u64 {
            i64::MAX
        } else {
            qty as i64
        };
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition: a total can't wrap around.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Saturating subtraction.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Summing line totals into a basket total (saturating, via `Add`).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
