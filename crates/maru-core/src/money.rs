//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                       │
//! │                                                                   │
//! │  In JavaScript/floating point:                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                      │
//! │                                                                   │
//! │  OUR SOLUTION: Integer Units                                      │
//! │    The shop currency has no minor unit, so every amount is a      │
//! │    whole number of currency units (i64). Discount rates are       │
//! │    basis points, and rate math happens in integer arithmetic      │
//! │    with explicit half-up rounding.                                │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use maru_core::money::Money;
//!
//! let price = Money::from_units(10_000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // 20,000
//! let total = price + Money::from_units(500);    // 10,500
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: Intermediate results of discount math may dip below
///   zero before being floored; the sign is needed to detect that.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::money::Money;
    ///
    /// let price = Money::from_units(10_000);
    /// assert_eq!(price.units(), 10_000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::money::Money;
    ///
    /// let unit_price = Money::from_units(10_000);
    /// let line_total = unit_price.multiply_quantity(20);
    /// assert_eq!(line_total.units(), 200_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates the discount portion for a rate, rounded half-up.
    ///
    /// ## Implementation
    /// Integer math: `(units * bps + 5000) / 10000`. The +5000 provides
    /// half-up rounding (5000/10000 = 0.5). i128 prevents overflow on
    /// large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::money::Money;
    /// use maru_core::types::DiscountRate;
    ///
    /// let line = Money::from_units(200_000);
    /// let rate = DiscountRate::from_bps(1000); // 10%
    /// assert_eq!(line.rate_part(rate).units(), 20_000);
    /// ```
    pub fn rate_part(&self, rate: DiscountRate) -> Money {
        let part = (self.0 as i128 * rate.bps() as i128 + 5000) / 10_000;
        Money::from_units(part as i64)
    }

    /// Applies a rate discount and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::money::Money;
    /// use maru_core::types::DiscountRate;
    ///
    /// let line = Money::from_units(200_000);
    /// let discounted = line.apply_rate_discount(DiscountRate::from_bps(1000));
    /// assert_eq!(discounted.units(), 180_000);
    /// ```
    pub fn apply_rate_discount(&self, rate: DiscountRate) -> Money {
        *self - self.rate_part(rate)
    }

    /// Clamps negative values to zero.
    ///
    /// Amount coupons larger than the cart total would otherwise produce a
    /// negative payable total.
    #[inline]
    pub fn floor_zero(&self) -> Money {
        if self.0 < 0 {
            Money::zero()
        } else {
            *self
        }
    }

    /// Renders the value as a thousands-grouped string, e.g. `700000` →
    /// `"700,000"`.
    ///
    /// The currency suffix is a display concern and lives in the app
    /// configuration, not here.
    pub fn grouped(&self) -> String {
        let digits = self.0.abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        let first = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - first) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the grouped form. This is for debugging and logs; the UI
/// appends the configured currency suffix itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grouped())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
