//! # State Module
//!
//! State containers for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                          │
//! │                                                                   │
//! │  ┌────────────────────────────────────────────────────────────┐   │
//! │  │                   App (composition root)                   │   │
//! │  └────────────────────────────────────────────────────────────┘   │
//! │        │            │             │           │          │        │
//! │        ▼            ▼             ▼           ▼          ▼        │
//! │  ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌─────────┐ ┌────────┐  │
//! │  │ Catalog  │ │ Coupon    │ │ Cart     │ │ Admin   │ │ Config │  │
//! │  │ State    │ │ State     │ │ State    │ │ State   │ │ State  │  │
//! │  │          │ │           │ │ items +  │ │ edit +  │ │ display│  │
//! │  │ products │ │ coupons   │ │ coupon   │ │ drafts  │ │ format │  │
//! │  └──────────┘ └───────────┘ └──────────┘ └─────────┘ └────────┘  │
//! │                                                                   │
//! │  THREAD SAFETY:                                                   │
//! │  • Collections sit behind Arc<Mutex<T>> so commands can share     │
//! │    them by reference; gestures are serialized by the UI loop      │
//! │  • ConfigState: read-only after initialization                    │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod cart;
mod catalog;
mod config;
mod coupons;

pub use admin::{AdminForms, AdminState};
pub use cart::{Cart, CartState};
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use coupons::CouponState;
