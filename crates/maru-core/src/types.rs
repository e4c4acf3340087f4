//! # Domain Types
//!
//! Core domain types used throughout Maru Shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                              │
//! │                                                                   │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌────────────────┐  │
//! │  │    Product      │   │    CartItem     │   │     Coupon     │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ────────────  │  │
//! │  │  id (UUID)      │   │  product (snap) │   │  name          │  │
//! │  │  name           │   │  quantity       │   │  code          │  │
//! │  │  price_units    │   │  added_at       │   │  discount_type │  │
//! │  │  stock          │   └─────────────────┘   │  discount_value│  │
//! │  │  discounts[]    │                         └────────────────┘  │
//! │  └─────────────────┘                                             │
//! │                                                                   │
//! │  ┌─────────────────┐   ┌─────────────────┐                       │
//! │  │  DiscountRate   │   │    Discount     │                       │
//! │  │  ─────────────  │   │  ─────────────  │                       │
//! │  │  bps (u32)      │   │  quantity (min) │                       │
//! │  │  1000 = 10%     │   │  rate           │                       │
//! │  └─────────────────┘   └─────────────────┘                       │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% = the fraction 0.1
///
/// Keeping the rate as an integer lets all pricing math stay in integer
/// arithmetic; fractions only appear at the display edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a fraction (for convenience).
    ///
    /// ## Example
    /// ```rust
    /// use maru_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_fraction(0.1).bps(), 1000);
    /// ```
    pub fn from_fraction(fraction: f64) -> Self {
        DiscountRate((fraction * 10_000.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (for display only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// A bulk discount tier on a product: buy at least `quantity`, get `rate`
/// off that line.
///
/// A product may carry several tiers, duplicates included; no uniqueness
/// invariant is enforced on the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    /// Minimum quantity for the tier to apply.
    pub quantity: i64,

    /// Rate taken off the line total once the tier applies.
    pub rate: DiscountRate,
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Mutated only by admin operations, which replace the whole record. `stock`
/// is the static catalog capacity; cart actions never decrement it; the
/// stock reconciler derives the remaining purchasable amount instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the listing and the admin page.
    pub name: String,

    /// Price in whole currency units.
    pub price_units: i64,

    /// Catalog stock capacity.
    pub stock: i64,

    /// Bulk discount tiers, in admin insertion order.
    pub discounts: Vec<Discount>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_units(self.price_units)
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Flat amount in currency units.
    Amount,
    /// Percentage of the cart total, 0–100.
    Percentage,
}

impl Default for DiscountType {
    fn default() -> Self {
        DiscountType::Percentage
    }
}

/// A cart-wide discount applied on top of per-item discounts.
///
/// At most one coupon is selected per cart; selecting another replaces it
/// (no stacking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    /// Display name ("5,000 off", "10% off", ...).
    pub name: String,

    /// Business identifier, entered or picked by the shopper.
    pub code: String,

    /// Interpretation of `discount_value`.
    pub discount_type: DiscountType,

    /// Currency units for `Amount`, 0–100 percent for `Percentage`.
    pub discount_value: i64,
}

impl Coupon {
    /// The flat amount for an `Amount` coupon. Meaningless for `Percentage`.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_units(self.discount_value)
    }

    /// The rate for a `Percentage` coupon. Negative values clamp to zero;
    /// values over 100 are representable here and floored at the pricing
    /// stage instead.
    #[inline]
    pub fn rate(&self) -> DiscountRate {
        DiscountRate::from_bps((self.discount_value.max(0) * 100) as u32)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart.
///
/// ## Snapshot Pattern
/// The item carries a frozen copy of the product taken at add time, so the
/// cart keeps displaying and pricing consistent data even if an admin edits
/// the catalog record afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot at time of adding (frozen).
    pub product: Product,

    /// Quantity in cart, always positive; an item clamped to zero is
    /// removed from the cart instead.
    pub quantity: i64,

    /// When this item first entered the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item snapshotting the given product.
    pub fn new(product: &Product, quantity: i64) -> Self {
        CartItem {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// The undiscounted line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.fraction() - 0.1).abs() < 1e-9);
        assert!((rate.percent() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_discount_rate_from_fraction() {
        assert_eq!(DiscountRate::from_fraction(0.1).bps(), 1000);
        assert_eq!(DiscountRate::from_fraction(0.15).bps(), 1500);
        assert_eq!(DiscountRate::from_fraction(0.2).bps(), 2000);
    }

    #[test]
    fn test_discount_type_default() {
        assert_eq!(DiscountType::default(), DiscountType::Percentage);
    }

    #[test]
    fn test_coupon_rate_and_amount() {
        let amount = Coupon {
            name: "5,000 off".into(),
            code: "AMOUNT5000".into(),
            discount_type: DiscountType::Amount,
            discount_value: 5000,
        };
        assert_eq!(amount.amount().units(), 5000);

        let percent = Coupon {
            name: "10% off".into(),
            code: "PERCENT10".into(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        };
        assert_eq!(percent.rate().bps(), 1000);
    }

    #[test]
    fn test_cart_item_line_total() {
        let product = Product {
            id: "p1".into(),
            name: "Item".into(),
            price_units: 10_000,
            stock: 20,
            discounts: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let item = CartItem::new(&product, 20);
        assert_eq!(item.line_total().units(), 200_000);
    }
}
