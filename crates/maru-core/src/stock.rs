//! # Stock Reconciler
//!
//! Derives the stock still purchasable for a product given what the cart
//! already holds. Catalog stock is static capacity; cart actions never
//! decrement it, so the displayed figure is always `capacity - committed`.

use crate::types::{CartItem, Product};

/// Remaining purchasable stock: `product.stock` minus the quantity of that
/// product already in the cart (0 when absent).
///
/// Pure lookup, no clamping: callers that bypass the cart transitions could
/// observe a negative value. The cart transitions themselves clamp, so a
/// well-formed cart never produces one.
pub fn remaining_stock(cart: &[CartItem], product: &Product) -> i64 {
    let in_cart = cart
        .iter()
        .find(|item| item.product.id == product.id)
        .map(|item| item.quantity)
        .unwrap_or(0);

    product.stock - in_cart
}
