//! # Coupon State
//!
//! Owns the coupon list: what the cart page offers for selection and the
//! admin page appends to.

use std::sync::{Arc, Mutex};

use maru_core::Coupon;

/// Shared coupon collection handed to commands.
#[derive(Debug)]
pub struct CouponState {
    coupons: Arc<Mutex<Vec<Coupon>>>,
}

impl CouponState {
    /// Creates a coupon list pre-loaded with the given coupons.
    pub fn new(coupons: Vec<Coupon>) -> Self {
        CouponState {
            coupons: Arc::new(Mutex::new(coupons)),
        }
    }

    /// A snapshot of the full coupon list, in insertion order.
    pub fn coupons(&self) -> Vec<Coupon> {
        self.lock().clone()
    }

    /// Looks up a coupon by code.
    ///
    /// Codes are treated as identifiers; with duplicates the earliest wins.
    pub fn find_by_code(&self, code: &str) -> Option<Coupon> {
        self.lock().iter().find(|c| c.code == code).cloned()
    }

    /// Appends a coupon to the list.
    pub fn add_coupon(&self, coupon: Coupon) {
        self.lock().push(coupon);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Coupon>> {
        self.coupons.lock().expect("Coupon mutex poisoned")
    }
}

impl Default for CouponState {
    fn default() -> Self {
        CouponState::new(Vec::new())
    }
}
