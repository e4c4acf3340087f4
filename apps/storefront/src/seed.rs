//! # Demo Seed Data
//!
//! The demo catalog and coupon list the UI loads on first render: three
//! tiered products and two coupons.

use chrono::Utc;
use maru_core::types::{Coupon, Discount, DiscountRate, DiscountType, Product};

/// The demo products: ascending prices with increasingly generous
/// buy-10 tiers.
pub fn demo_products() -> Vec<Product> {
    let now = Utc::now();
    let product = |id: &str, name: &str, price_units: i64, fraction: f64| Product {
        id: id.to_string(),
        name: name.to_string(),
        price_units,
        stock: 20,
        discounts: vec![Discount {
            quantity: 10,
            rate: DiscountRate::from_fraction(fraction),
        }],
        created_at: now,
        updated_at: now,
    };

    vec![
        product("p1", "상품1", 10_000, 0.1),
        product("p2", "상품2", 20_000, 0.15),
        product("p3", "상품3", 30_000, 0.2),
    ]
}

/// The demo coupons: one flat amount, one percentage.
pub fn demo_coupons() -> Vec<Coupon> {
    vec![
        Coupon {
            name: "5000원 할인 쿠폰".to_string(),
            code: "AMOUNT5000".to_string(),
            discount_type: DiscountType::Amount,
            discount_value: 5000,
        },
        Coupon {
            name: "10% 할인 쿠폰".to_string(),
            code: "PERCENT10".to_string(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_products_shape() {
        let products = demo_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].price_units, 10_000);
        assert_eq!(products[2].discounts[0].rate.bps(), 2000);
        assert!(products.iter().all(|p| p.stock == 20));
    }

    #[test]
    fn test_demo_coupons_shape() {
        let coupons = demo_coupons();
        assert_eq!(coupons.len(), 2);
        assert_eq!(coupons[0].discount_type, DiscountType::Amount);
        assert_eq!(coupons[1].discount_type, DiscountType::Percentage);
    }
}
