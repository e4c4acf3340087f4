//! # maru-core: Pure Business Logic for Maru Shop
//!
//! This crate is the **heart** of Maru Shop. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Maru Shop Architecture                       │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐  │
//! │  │                  Frontend (React, out of scope)             │  │
//! │  │      Product List ──► Cart ──► Coupon ──► Price Summary     │  │
//! │  │      Admin: Product Management ──► Coupon Management        │  │
//! │  └──────────────────────────────┬──────────────────────────────┘  │
//! │                                 │                                 │
//! │  ┌──────────────────────────────▼──────────────────────────────┐  │
//! │  │              apps/storefront (composition root)             │  │
//! │  │    state containers + the commands the UI invokes           │  │
//! │  └──────────────────────────────┬──────────────────────────────┘  │
//! │                                 │                                 │
//! │  ┌──────────────────────────────▼──────────────────────────────┐  │
//! │  │                 ★ maru-core (THIS CRATE) ★                  │  │
//! │  │                                                             │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐ ┌────────┐  │  │
//! │  │  │  types  │ │ pricing │ │  stock  │ │  cart  │ │catalog │  │  │
//! │  │  │ Product │ │ tiers + │ │remaining│ │ add /  │ │ admin  │  │  │
//! │  │  │ Coupon  │ │ coupons │ │  stock  │ │ update │ │helpers │  │  │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └────────┘ └────────┘  │  │
//! │  │                                                             │  │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS     │  │
//! │  └─────────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Discount, Coupon, CartItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Tier selection, item totals, cart totals
//! - [`stock`] - Remaining-stock reconciliation against the cart
//! - [`cart`] - Pure cart state transitions
//! - [`catalog`] - Admin record-transformation helpers and form drafts
//! - [`validation`] - Admin form validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition takes the current collection and
//!    returns a new one; callers replace state wholesale.
//! 2. **Integer Money**: Whole currency units (i64) and basis-point rates;
//!    rounding is explicit and happens once per displayed figure.
//! 3. **No-op over error**: Invalid domain operations (out-of-stock add,
//!    unknown-id update) are absorbed silently; only lookups and form
//!    validation at the boundary produce typed errors.
//!
//! ## Example Usage
//!
//! ```rust
//! use maru_core::cart::add_to_cart;
//! use maru_core::pricing::cart_totals;
//! use maru_core::catalog::{create_product, ProductDraft};
//!
//! let product = create_product(&ProductDraft {
//!     name: "Product 1".into(),
//!     price_units: 10_000,
//!     stock: 20,
//!     discounts: vec![],
//! });
//!
//! let cart = add_to_cart(&[], &product);
//! let totals = cart_totals(&cart, None);
//! assert_eq!(totals.total_before_discount, 10_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod stock;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use maru_core::Money` instead of
// `use maru_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::CartTotals;
pub use types::*;
