//! # Cart Transitions
//!
//! Pure state transitions for the shopping cart. Every function takes the
//! current item sequence and returns a **new** one; the owning state
//! container replaces its collection wholesale on each update, so callers
//! never observe partial mutation.
//!
//! ## Item Lifecycle
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     CartItem State Machine                        │
//! │                                                                   │
//! │            add (stock available)                                  │
//! │   absent ─────────────────────────► present(quantity = 1)         │
//! │     ▲                                      │                      │
//! │     │  remove, or quantity                 │ add / update         │
//! │     │  clamped to 0                        ▼                      │
//! │     └────────────────────── present(clamped to [1, stock])        │
//! │                                                                   │
//! │  Invalid operations (out-of-stock add, unknown id) are no-ops.    │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use crate::stock::remaining_stock;
use crate::types::{CartItem, Product};

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - No remaining stock → the add is rejected and the cart is returned
///   unchanged (the listing shows the item as sold out; this is not an
///   error).
/// - Already in the cart → quantity + 1, through the same clamp as
///   [`update_quantity`].
/// - Otherwise → a new snapshot item with quantity 1 is appended,
///   preserving insertion order.
pub fn add_to_cart(cart: &[CartItem], product: &Product) -> Vec<CartItem> {
    if remaining_stock(cart, product) <= 0 {
        return cart.to_vec();
    }

    if let Some(existing) = cart.iter().find(|item| item.product.id == product.id) {
        return update_quantity(cart, &product.id, existing.quantity + 1);
    }

    let mut next = cart.to_vec();
    next.push(CartItem::new(product, 1));
    next
}

/// Drops the item with the given product id. No-op when absent.
pub fn remove_from_cart(cart: &[CartItem], product_id: &str) -> Vec<CartItem> {
    cart.iter()
        .filter(|item| item.product.id != product_id)
        .cloned()
        .collect()
}

/// Sets the quantity of the matching item, clamped to `[0, snapshot stock]`.
///
/// A clamped result of 0 removes the item; an absent product id is a no-op.
pub fn update_quantity(cart: &[CartItem], product_id: &str, new_quantity: i64) -> Vec<CartItem> {
    cart.iter()
        .filter_map(|item| {
            if item.product.id != product_id {
                return Some(item.clone());
            }
            let clamped = new_quantity.clamp(0, item.product.stock);
            if clamped == 0 {
                return None;
            }
            let mut updated = item.clone();
            updated.quantity = clamped;
            Some(updated)
        })
        .collect()
}
