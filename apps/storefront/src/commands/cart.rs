//! # Cart Commands
//!
//! UI-invoked cart manipulation and the price summary.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       Cart Lifecycle                              │
//! │                                                                   │
//! │  ┌──────────┐      ┌──────────┐      ┌─────────────────┐          │
//! │  │  Empty   │─────►│ In Cart  │─────►│ Price Summary   │          │
//! │  │  Cart    │      │          │      │ (3 figures)     │          │
//! │  └──────────┘      └──────────┘      └─────────────────┘          │
//! │                         │                    ▲                    │
//! │                    add_to_cart               │                    │
//! │                    update_cart_item     apply_coupon              │
//! │                    remove_from_cart                               │
//! │                         │                                         │
//! │                         ▼                                         │
//! │                    clear_cart ──────► (back to empty)             │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Cart, CartState, CatalogState, ConfigState, CouponState};
use maru_core::pricing::CartTotals;
use maru_core::types::{CartItem, Coupon};
use maru_core::{CoreError, Money};

/// Cart response including items, coupon selection, and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub selected_coupon: Option<Coupon>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            selected_coupon: cart.selected_coupon().cloned(),
            totals: cart.totals(),
        }
    }
}

/// The three price-summary figures, pre-formatted for display
/// (locale-grouped integer + currency suffix, e.g. `"700,000원"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub total_before_discount: String,
    pub total_discount: String,
    pub total_after_discount: String,
}

/// Gets the current cart contents with totals.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Unknown product id → `NOT_FOUND`
/// - No remaining stock → the cart is returned unchanged (silent no-op;
///   the listing shows the product as sold out)
/// - Already in cart → quantity + 1; otherwise appended with quantity 1,
///   snapshotting the product at this moment
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_product(&product);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of an item in the cart.
///
/// Clamped to `[0, snapshot stock]`; 0 removes the item; an id not in the
/// cart is a no-op.
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes an item from the cart. No-op when absent.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_product(product_id);
        CartResponse::from(&*c)
    })
}

/// Applies a coupon by code, replacing any previous selection.
pub fn apply_coupon(
    coupons: &CouponState,
    cart: &CartState,
    code: &str,
) -> Result<CartResponse, ApiError> {
    debug!(code = %code, "apply_coupon command");

    let coupon = coupons
        .find_by_code(code)
        .ok_or_else(|| CoreError::CouponNotFound(code.to_string()))?;

    Ok(cart.with_cart_mut(|c| {
        c.apply_coupon(coupon);
        CartResponse::from(&*c)
    }))
}

/// Clears the cart (items and coupon) for a fresh order.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

/// The order-summary box: the three totals formatted for display.
pub fn price_summary(cart: &CartState, config: &ConfigState) -> PriceSummary {
    debug!("price_summary command");

    let totals = cart.with_cart(|c| c.totals());
    PriceSummary {
        total_before_discount: config.format_money(Money::from_units(totals.total_before_discount)),
        total_discount: config.format_money(Money::from_units(totals.total_discount)),
        total_after_discount: config.format_money(Money::from_units(totals.total_after_discount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use maru_core::types::{Discount, DiscountRate, DiscountType, Product};

    fn tiered_product(id: &str, price_units: i64, stock: i64, fraction: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_units,
            stock,
            discounts: vec![Discount {
                quantity: 10,
                rate: DiscountRate::from_fraction(fraction),
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// The demo shop: three tiered products and two coupons.
    fn demo_states() -> (CatalogState, CouponState, CartState) {
        let catalog = CatalogState::new(vec![
            tiered_product("p1", 10_000, 20, 0.1),
            tiered_product("p2", 20_000, 20, 0.15),
            tiered_product("p3", 30_000, 20, 0.2),
        ]);
        let coupons = CouponState::new(vec![
            Coupon {
                name: "5,000 off".into(),
                code: "AMOUNT5000".into(),
                discount_type: DiscountType::Amount,
                discount_value: 5000,
            },
            Coupon {
                name: "10% off".into(),
                code: "PERCENT10".into(),
                discount_type: DiscountType::Percentage,
                discount_value: 10,
            },
        ]);
        (catalog, coupons, CartState::new())
    }

    fn fill_scenario_cart(catalog: &CatalogState, cart: &CartState) {
        add_to_cart(catalog, cart, "p1").unwrap();
        update_cart_item(cart, "p1", 20);
        add_to_cart(catalog, cart, "p2").unwrap();
        update_cart_item(cart, "p2", 10);
        add_to_cart(catalog, cart, "p3").unwrap();
        update_cart_item(cart, "p3", 10);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let (catalog, _, cart) = demo_states();
        let err = add_to_cart(&catalog, &cart, "p9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_to_cart_sold_out_is_silent_noop() {
        let (catalog, _, cart) = demo_states();
        add_to_cart(&catalog, &cart, "p1").unwrap();
        update_cart_item(&cart, "p1", 20); // quantity == stock

        let response = add_to_cart(&catalog, &cart, "p1").unwrap();
        assert_eq!(response.items[0].quantity, 20);
    }

    #[test]
    fn test_scenario_totals_without_coupon() {
        let (catalog, _, cart) = demo_states();
        fill_scenario_cart(&catalog, &cart);

        let totals = get_cart(&cart).totals;
        assert_eq!(totals.total_before_discount, 700_000);
        assert_eq!(totals.total_after_discount, 590_000);
        assert_eq!(totals.total_discount, 110_000);
    }

    #[test]
    fn test_scenario_totals_with_percentage_coupon() {
        let (catalog, coupons, cart) = demo_states();
        fill_scenario_cart(&catalog, &cart);

        let response = apply_coupon(&coupons, &cart, "PERCENT10").unwrap();
        assert_eq!(response.totals.total_after_discount, 531_000);
        assert_eq!(response.totals.total_discount, 169_000);
    }

    #[test]
    fn test_scenario_totals_with_amount_coupon() {
        let (catalog, coupons, cart) = demo_states();
        fill_scenario_cart(&catalog, &cart);

        let response = apply_coupon(&coupons, &cart, "AMOUNT5000").unwrap();
        assert_eq!(response.totals.total_after_discount, 585_000);
        assert_eq!(response.totals.total_discount, 115_000);
    }

    #[test]
    fn test_apply_coupon_unknown_code() {
        let (_, coupons, cart) = demo_states();
        let err = apply_coupon(&coupons, &cart, "NOPE").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_price_summary_formats_figures() {
        let (catalog, _, cart) = demo_states();
        fill_scenario_cart(&catalog, &cart);

        let summary = price_summary(&cart, &ConfigState::default());
        assert_eq!(summary.total_before_discount, "700,000원");
        assert_eq!(summary.total_discount, "110,000원");
        assert_eq!(summary.total_after_discount, "590,000원");
    }

    #[test]
    fn test_clear_cart_resets_everything() {
        let (catalog, coupons, cart) = demo_states();
        fill_scenario_cart(&catalog, &cart);
        apply_coupon(&coupons, &cart, "PERCENT10").unwrap();

        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert!(response.selected_coupon.is_none());
        assert_eq!(response.totals.total_after_discount, 0);
    }

    #[test]
    fn test_cart_response_serializes_camel_case() {
        let (catalog, coupons, cart) = demo_states();
        add_to_cart(&catalog, &cart, "p1").unwrap();
        apply_coupon(&coupons, &cart, "PERCENT10").unwrap();

        let json = serde_json::to_value(get_cart(&cart)).unwrap();
        assert!(json.get("selectedCoupon").is_some());
        assert!(json["totals"].get("totalBeforeDiscount").is_some());
        assert_eq!(json["selectedCoupon"]["discountType"], "percentage");
    }
}
