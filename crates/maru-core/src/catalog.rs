//! # Catalog Helpers
//!
//! Record-transformation helpers behind the admin page. Every function
//! returns a fresh record; the catalog container swaps whole records on
//! commit, mirroring how the cart replaces its item sequence.
//!
//! Field updates are explicit per-field functions rather than a generic
//! field/value setter, so each edit site is typed end to end.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::types::{Coupon, Discount, DiscountType, Product};

// =============================================================================
// Drafts
// =============================================================================

/// The in-progress "new product" admin form. `Default` is the initial empty
/// state the form resets to after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub price_units: i64,
    pub stock: i64,
    pub discounts: Vec<Discount>,
}

/// The in-progress "new coupon" admin form. Defaults to a zero-value
/// percentage coupon, the form's initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CouponDraft {
    pub name: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: i64,
}

impl Default for CouponDraft {
    fn default() -> Self {
        CouponDraft {
            name: String::new(),
            code: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 0,
        }
    }
}

impl CouponDraft {
    /// Materializes the draft into a coupon record.
    pub fn into_coupon(self) -> Coupon {
        Coupon {
            name: self.name,
            code: self.code,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
        }
    }
}

// =============================================================================
// Product Helpers
// =============================================================================

/// Creates a catalog product from a draft, assigning a fresh UUID v4 id.
///
/// UUIDs are unique without coordination, so ids never collide however fast
/// products are created within (or across) sessions.
pub fn create_product(draft: &ProductDraft) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4().to_string(),
        name: draft.name.clone(),
        price_units: draft.price_units,
        stock: draft.stock,
        discounts: draft.discounts.clone(),
        created_at: now,
        updated_at: now,
    }
}

/// Returns a copy of the product with the name replaced.
pub fn with_name(product: &Product, name: &str) -> Product {
    Product {
        name: name.to_string(),
        updated_at: Utc::now(),
        ..product.clone()
    }
}

/// Returns a copy of the product with the price replaced.
pub fn with_price(product: &Product, price_units: i64) -> Product {
    Product {
        price_units,
        updated_at: Utc::now(),
        ..product.clone()
    }
}

/// Returns a copy of the product with the stock capacity replaced.
pub fn with_stock(product: &Product, stock: i64) -> Product {
    Product {
        stock,
        updated_at: Utc::now(),
        ..product.clone()
    }
}

/// Returns a copy of the product with a discount tier appended.
pub fn add_discount(product: &Product, discount: Discount) -> Product {
    let mut discounts = product.discounts.clone();
    discounts.push(discount);
    Product {
        discounts,
        updated_at: Utc::now(),
        ..product.clone()
    }
}

/// Returns a copy of the product with the tier at `index` removed.
///
/// An out-of-range index leaves the tier list unchanged (filter semantics),
/// matching the no-op policy for invalid operations.
pub fn remove_discount(product: &Product, index: usize) -> Product {
    let discounts = product
        .discounts
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, d)| *d)
        .collect();
    Product {
        discounts,
        updated_at: Utc::now(),
        ..product.clone()
    }
}
