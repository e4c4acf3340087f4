//! # Pricing Engine
//!
//! Computes per-item discounted totals and the cart-level price summary.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       Cart Pricing Pipeline                       │
//! │                                                                   │
//! │  CartItem ──► best applicable tier ──► discounted line total      │
//! │                                              │                    │
//! │                 Σ undiscounted lines         │ Σ (exact, scaled)  │
//! │                        │                     ▼                    │
//! │                        │            coupon on top (amount | %)    │
//! │                        ▼                     │                    │
//! │               total_before_discount          ▼  round half-up     │
//! │                        │            total_after_discount          │
//! │                        └──────┬──────────────┘                    │
//! │                               ▼                                   │
//! │              total_discount = before - after (rounded values)     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Contract
//! The three outputs are whole currency units. Intermediate per-item sums
//! are kept exact as basis-point-scaled i128 integers and rounded half-up
//! exactly once, at the cart level; `total_discount` is then derived from
//! the two rounded values so the displayed triple is always consistent.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItem, Coupon, Discount, DiscountType};

/// Basis-point scale shared by all rate math.
const RATE_SCALE: i128 = 10_000;

// =============================================================================
// Discount Selection
// =============================================================================

/// Picks the discount tier to apply for a quantity: among tiers whose
/// threshold is met, the one with the **highest rate**, not the first
/// match, so a generous low-threshold tier beats a stingier high one.
///
/// Ties on the maximum rate keep the first-encountered tier in list order.
/// Returns `None` when the list is empty or no threshold is met.
pub fn applicable_discount(discounts: &[Discount], quantity: i64) -> Option<&Discount> {
    discounts
        .iter()
        .filter(|d| quantity >= d.quantity)
        .fold(None, |best: Option<&Discount>, candidate| match best {
            Some(b) if candidate.rate.bps() <= b.rate.bps() => Some(b),
            _ => Some(candidate),
        })
}

// =============================================================================
// Item Totals
// =============================================================================

/// The discounted line total for one cart item, scaled by `RATE_SCALE`.
///
/// `line × (10000 - bps)`, exact, no rounding. Cart aggregation sums these
/// so that fractions survive until the single cart-level rounding.
fn item_total_scaled(item: &CartItem) -> i128 {
    let keep = match applicable_discount(&item.product.discounts, item.quantity) {
        Some(discount) => RATE_SCALE - discount.rate.bps() as i128,
        None => RATE_SCALE,
    };
    item.line_total().units() as i128 * keep
}

/// The discounted line total for one cart item, rounded half-up to whole
/// units: `price × quantity × (1 - rate)`, full price when no tier applies.
pub fn item_total(item: &CartItem) -> Money {
    Money::from_units(round_scaled(item_total_scaled(item), RATE_SCALE))
}

/// Rounds a non-negative scaled value half-up to whole units.
fn round_scaled(scaled: i128, scale: i128) -> i64 {
    ((scaled + scale / 2) / scale) as i64
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The three price-summary figures the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Σ price × quantity, no discounts.
    pub total_before_discount: i64,

    /// Payable total after item tiers and the coupon, never negative.
    pub total_after_discount: i64,

    /// `total_before_discount - total_after_discount`, derived from the
    /// rounded values.
    pub total_discount: i64,
}

impl CartTotals {
    /// All-zero totals, what an empty cart prices to.
    pub const fn zero() -> Self {
        CartTotals {
            total_before_discount: 0,
            total_after_discount: 0,
            total_discount: 0,
        }
    }
}

/// Prices a whole cart, applying the optional coupon on top of the per-item
/// tier discounts.
///
/// ## Coupon Semantics
/// - `Amount`: subtracted from the tier-discounted sum, floored at 0.
/// - `Percentage`: multiplies the tier-discounted sum by `1 - value/100`.
///   Values over 100 would invert the sign; the result is floored at 0
///   rather than ever displaying a negative payable total.
pub fn cart_totals(cart: &[CartItem], coupon: Option<&Coupon>) -> CartTotals {
    let total_before_discount: i64 = cart.iter().map(|item| item.line_total().units()).sum();

    // Exact tier-discounted sum at basis-point scale.
    let after_items_scaled: i128 = cart.iter().map(item_total_scaled).sum();

    let total_after_discount = match coupon {
        None => round_scaled(after_items_scaled, RATE_SCALE),
        Some(c) => match c.discount_type {
            DiscountType::Amount => {
                (round_scaled(after_items_scaled, RATE_SCALE) - c.amount().units()).max(0)
            }
            DiscountType::Percentage => {
                let keep = RATE_SCALE - c.rate().bps() as i128;
                let scaled = (after_items_scaled * keep).max(0);
                round_scaled(scaled, RATE_SCALE * RATE_SCALE)
            }
        },
    };

    CartTotals {
        total_before_discount,
        total_after_discount,
        total_discount: total_before_discount - total_after_discount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
