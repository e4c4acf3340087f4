//! # Maru Storefront
//!
//! Composition root for the Maru Shop demo. Owns the state containers and
//! exposes the commands the shop and admin pages invoke.
//!
//! ## Module Organization
//! ```text
//! maru_storefront/
//! ├── lib.rs          ◄─── You are here (App composition root)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Product collection
//! │   ├── coupons.rs  ◄─── Coupon collection
//! │   ├── cart.rs     ◄─── Cart items + selected coupon
//! │   ├── admin.rs    ◄─── Admin form records
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Listing / remaining-stock queries
//! │   ├── cart.rs     ◄─── Cart manipulation + price summary
//! │   └── admin.rs    ◄─── Product & coupon management
//! ├── seed.rs         ◄─── Demo catalog and coupons
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Update Model
//! Every state change is triggered by a discrete user gesture and completes
//! before the next one is processed. Commands receive the containers they
//! need by reference (parameter injection); there is no ambient context and
//! no async runtime.

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use maru_core::types::{Coupon, Product};
use state::{AdminState, CartState, CatalogState, ConfigState, CouponState};

/// The application composition root.
///
/// Owns one of each state container and hands them to commands. A UI shell
/// constructs this once at startup with its initial data and keeps it for
/// the lifetime of the process; nothing is persisted.
#[derive(Debug)]
pub struct App {
    pub catalog: CatalogState,
    pub coupons: CouponState,
    pub cart: CartState,
    pub admin: AdminState,
    pub config: ConfigState,
}

impl App {
    /// Creates an app from initial data supplied by the embedding UI.
    pub fn new(products: Vec<Product>, coupons: Vec<Coupon>, config: ConfigState) -> Self {
        info!(
            products = products.len(),
            coupons = coupons.len(),
            "initializing storefront state"
        );

        App {
            catalog: CatalogState::new(products),
            coupons: CouponState::new(coupons),
            cart: CartState::new(),
            admin: AdminState::new(),
            config,
        }
    }

    /// Creates an app pre-loaded with the demo catalog and coupons.
    pub fn with_demo_data() -> Self {
        App::new(
            seed::demo_products(),
            seed::demo_coupons(),
            ConfigState::from_env(),
        )
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=maru=trace` - Show trace for maru crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,maru=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{admin, cart, product};
    use maru_core::catalog::CouponDraft;
    use maru_core::types::DiscountType;

    /// The shop-page walkthrough: add items, hit the stock ceiling, apply
    /// coupons, read the formatted summary.
    #[test]
    fn test_shop_page_scenario() {
        let app = App::with_demo_data();

        // One unit of 상품1: full price, no tier yet.
        cart::add_to_cart(&app.catalog, &app.cart, "p1").unwrap();
        let totals = cart::get_cart(&app.cart).totals;
        assert_eq!(totals.total_before_discount, 10_000);
        assert_eq!(totals.total_discount, 0);
        assert_eq!(totals.total_after_discount, 10_000);

        // Add the remaining 19 units; stock display reaches 0.
        for _ in 0..19 {
            cart::add_to_cart(&app.catalog, &app.cart, "p1").unwrap();
        }
        assert_eq!(
            product::get_remaining_stock(&app.catalog, &app.cart, "p1").unwrap(),
            0
        );

        // A 21st add is absorbed: cart and stock display unchanged.
        cart::add_to_cart(&app.catalog, &app.cart, "p1").unwrap();
        assert_eq!(
            product::get_remaining_stock(&app.catalog, &app.cart, "p1").unwrap(),
            0
        );
        let totals = cart::get_cart(&app.cart).totals;
        assert_eq!(totals.total_before_discount, 200_000);
        assert_eq!(totals.total_discount, 20_000);
        assert_eq!(totals.total_after_discount, 180_000);

        // Ten of each of the other two products.
        cart::add_to_cart(&app.catalog, &app.cart, "p2").unwrap();
        cart::update_cart_item(&app.cart, "p2", 10);
        cart::add_to_cart(&app.catalog, &app.cart, "p3").unwrap();
        cart::update_cart_item(&app.cart, "p3", 10);

        let summary = cart::price_summary(&app.cart, &app.config);
        assert_eq!(summary.total_before_discount, "700,000원");
        assert_eq!(summary.total_discount, "110,000원");
        assert_eq!(summary.total_after_discount, "590,000원");

        // Percentage coupon, then switching to the amount coupon.
        cart::apply_coupon(&app.coupons, &app.cart, "PERCENT10").unwrap();
        let summary = cart::price_summary(&app.cart, &app.config);
        assert_eq!(summary.total_discount, "169,000원");
        assert_eq!(summary.total_after_discount, "531,000원");

        cart::apply_coupon(&app.coupons, &app.cart, "AMOUNT5000").unwrap();
        let summary = cart::price_summary(&app.cart, &app.config);
        assert_eq!(summary.total_discount, "115,000원");
        assert_eq!(summary.total_after_discount, "585,000원");
    }

    /// The admin-page walkthrough: create a product, edit another, manage
    /// tiers, add a coupon.
    #[test]
    fn test_admin_page_scenario() {
        let app = App::with_demo_data();

        // New product.
        admin::set_new_product_form_open(&app.admin, true);
        admin::set_new_product(
            &app.admin,
            maru_core::catalog::ProductDraft {
                name: "상품4".into(),
                price_units: 15_000,
                stock: 30,
                discounts: vec![],
            },
        );
        let created = admin::submit_new_product(&app.admin, &app.catalog).unwrap();
        assert_eq!(app.catalog.products().len(), 4);
        assert_eq!(created.stock, 30);

        // Edit 상품1.
        admin::begin_product_edit(&app.admin, &app.catalog, "p1").unwrap();
        admin::edit_product_stock(&app.admin, "p1", 25);
        admin::edit_product_price(&app.admin, "p1", 12_000);
        admin::edit_product_name(&app.admin, "p1", "수정된 상품1");
        admin::finish_product_edit(&app.admin, &app.catalog).unwrap();

        let edited = app.catalog.find("p1").unwrap();
        assert_eq!(edited.name, "수정된 상품1");
        assert_eq!(edited.price_units, 12_000);
        assert_eq!(edited.stock, 25);

        // Tier management: add a 5+/5% tier, then delete both tiers.
        admin::begin_product_edit(&app.admin, &app.catalog, "p1").unwrap();
        admin::set_new_discount(
            &app.admin,
            maru_core::types::Discount {
                quantity: 5,
                rate: maru_core::types::DiscountRate::from_fraction(0.05),
            },
        );
        admin::add_discount_to_product(&app.admin, &app.catalog, "p1").unwrap();
        assert_eq!(app.catalog.find("p1").unwrap().discounts.len(), 2);

        admin::remove_discount_from_product(&app.admin, &app.catalog, "p1", 0);
        let remaining = app.catalog.find("p1").unwrap().discounts;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].quantity, 5);

        admin::remove_discount_from_product(&app.admin, &app.catalog, "p1", 0);
        assert!(app.catalog.find("p1").unwrap().discounts.is_empty());

        // New coupon shows up in the shopper-facing list.
        admin::set_new_coupon(
            &app.admin,
            CouponDraft {
                name: "새 쿠폰".into(),
                code: "NEW10".into(),
                discount_type: DiscountType::Percentage,
                discount_value: 10,
            },
        );
        admin::submit_new_coupon(&app.admin, &app.coupons).unwrap();
        assert_eq!(app.coupons.coupons().len(), 3);
        assert_eq!(app.coupons.find_by_code("NEW10").unwrap().discount_value, 10);
    }

    /// Admin edits do not disturb items already in the cart: the snapshot
    /// keeps pricing and clamping stable.
    #[test]
    fn test_cart_snapshot_survives_admin_edit() {
        let app = App::with_demo_data();

        cart::add_to_cart(&app.catalog, &app.cart, "p1").unwrap();
        cart::update_cart_item(&app.cart, "p1", 10);

        admin::begin_product_edit(&app.admin, &app.catalog, "p1").unwrap();
        admin::edit_product_price(&app.admin, "p1", 99_000);
        admin::finish_product_edit(&app.admin, &app.catalog).unwrap();

        // Cart still prices the frozen 10,000-unit snapshot.
        let totals = cart::get_cart(&app.cart).totals;
        assert_eq!(totals.total_before_discount, 100_000);
    }
}
