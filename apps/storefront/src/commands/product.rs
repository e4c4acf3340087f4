//! # Product Commands
//!
//! Listing and stock queries behind the shop page.
//!
//! ## Listing Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Shop page render                                                 │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  list_products() ──► one card per product                         │
//! │       │              (name, price, tiers)                         │
//! │       ▼                                                           │
//! │  get_remaining_stock(id) per card                                 │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  "재고: N개" label; 0 disables the add button                      │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use maru_core::types::{Discount, Product};
use maru_core::CoreError;

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from the API contract
/// - Allows selective field exposure (timestamps stay internal)
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price_units: i64,
    /// Catalog capacity; the cart page derives the displayed remaining
    /// stock from this and the cart contents.
    pub stock: i64,
    pub discounts: Vec<Discount>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            price_units: p.price_units,
            stock: p.stock,
            discounts: p.discounts,
        }
    }
}

/// Lists the full catalog, in insertion order.
pub fn list_products(catalog: &CatalogState) -> Vec<ProductDto> {
    debug!("list_products command");
    catalog.products().into_iter().map(ProductDto::from).collect()
}

/// Fetches a single product by id.
pub fn get_product_by_id(catalog: &CatalogState, product_id: &str) -> Result<ProductDto, ApiError> {
    debug!(product_id = %product_id, "get_product_by_id command");
    catalog
        .find(product_id)
        .map(ProductDto::from)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()).into())
}

/// Remaining purchasable stock for a product: catalog capacity minus the
/// quantity already committed to the cart.
pub fn get_remaining_stock(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<i64, ApiError> {
    debug!(product_id = %product_id, "get_remaining_stock command");
    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(cart.with_cart(|c| c.remaining_stock(&product)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;

    fn test_product(id: &str, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_units: 10_000,
            stock,
            discounts: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_list_products() {
        let catalog = CatalogState::new(vec![test_product("p1", 20), test_product("p2", 5)]);
        let listed = list_products(&catalog);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "p1");
        assert_eq!(listed[1].stock, 5);
    }

    #[test]
    fn test_get_product_by_id() {
        let catalog = CatalogState::new(vec![test_product("p1", 20)]);
        assert_eq!(get_product_by_id(&catalog, "p1").unwrap().id, "p1");

        let err = get_product_by_id(&catalog, "p9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_get_remaining_stock_reflects_cart() {
        let catalog = CatalogState::new(vec![test_product("p1", 20)]);
        let cart = CartState::new();

        assert_eq!(get_remaining_stock(&catalog, &cart, "p1").unwrap(), 20);

        let product = catalog.find("p1").unwrap();
        cart.with_cart_mut(|c| {
            c.add_product(&product);
            c.set_quantity("p1", 10);
        });

        assert_eq!(get_remaining_stock(&catalog, &cart, "p1").unwrap(), 10);
    }

    #[test]
    fn test_get_remaining_stock_unknown_product() {
        let catalog = CatalogState::default();
        let cart = CartState::new();
        assert!(get_remaining_stock(&catalog, &cart, "p9").is_err());
    }

    #[test]
    fn test_product_dto_serializes_camel_case() {
        let dto = ProductDto::from(test_product("p1", 20));
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("priceUnits").is_some());
        assert!(json.get("price_units").is_none());
    }
}
