//! # Cart State
//!
//! Owns the current shopping cart: the item sequence plus the single
//! selected-coupon slot.
//!
//! ## Update Model
//! Every mutation goes through a pure transition in `maru_core::cart` and
//! **replaces** the item vector with the transition's output. Nothing
//! outside this container ever sees a half-applied update.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` so shared read/write capability
//! can be handed to commands by reference. The UI dispatches one gesture at
//! a time, so the lock is uncontended by construction.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maru_core::pricing::{self, CartTotals};
use maru_core::stock;
use maru_core::{cart as transitions, CartItem, Coupon, Product};

/// The shopping cart: ordered items plus at most one selected coupon.
///
/// ## Invariants
/// - One item per product id (adding the same product bumps its quantity)
/// - Item quantities stay within `[1, snapshot stock]`; a quantity clamped
///   to 0 drops the item
/// - Selecting a coupon overwrites the previous one (no stacking)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in insertion order.
    items: Vec<CartItem>,

    /// The coupon applied on top of item tiers, if any.
    selected_coupon: Option<Coupon>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            selected_coupon: None,
            created_at: Utc::now(),
        }
    }

    /// The current item sequence, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The currently selected coupon, if any.
    pub fn selected_coupon(&self) -> Option<&Coupon> {
        self.selected_coupon.as_ref()
    }

    /// Adds one unit of the product. Out-of-stock adds are silent no-ops.
    pub fn add_product(&mut self, product: &Product) {
        self.items = transitions::add_to_cart(&self.items, product);
    }

    /// Removes the item with the given product id. No-op when absent.
    pub fn remove_product(&mut self, product_id: &str) {
        self.items = transitions::remove_from_cart(&self.items, product_id);
    }

    /// Sets an item's quantity, clamped to `[0, snapshot stock]`; 0 removes
    /// the item. No-op for an unknown id.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        self.items = transitions::update_quantity(&self.items, product_id, quantity);
    }

    /// Selects a coupon, replacing any previous selection.
    pub fn apply_coupon(&mut self, coupon: Coupon) {
        self.selected_coupon = Some(coupon);
    }

    /// Clears items and coupon for a fresh order.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_coupon = None;
        self.created_at = Utc::now();
    }

    /// Prices the cart with the selected coupon.
    pub fn totals(&self) -> CartTotals {
        pricing::cart_totals(&self.items, self.selected_coupon.as_ref())
    }

    /// Remaining purchasable stock for a product, given this cart.
    pub fn remaining_stock(&self, product: &Product) -> i64 {
        stock::remaining_stock(&self.items, product)
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shared cart container handed to commands.
///
/// `Arc` allows shared ownership; `Mutex` keeps each gesture's update
/// atomic with respect to reads.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
