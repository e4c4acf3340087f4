//! # Admin Form State
//!
//! Owns the admin page's in-progress form records: the product working copy
//! opened for editing, the new-discount input, and the new-product /
//! new-coupon drafts. Drafts reset to `Default` after a successful
//! submission; the working copy is committed to the catalog as a whole
//! record on "edit complete".

use std::sync::{Arc, Mutex};

use maru_core::catalog::{CouponDraft, ProductDraft};
use maru_core::types::{Discount, Product};

/// The admin page's form records.
#[derive(Debug, Clone, Default)]
pub struct AdminForms {
    /// Working copy of the product currently being edited, if any. Field
    /// edits apply here; the catalog record is untouched until commit.
    pub edit_product: Option<Product>,

    /// The new-discount tier form (threshold + rate inputs).
    pub new_discount: Discount,

    /// The new-product form.
    pub new_product: ProductDraft,

    /// The new-coupon form.
    pub new_coupon: CouponDraft,

    /// Whether the new-product form is open.
    pub show_new_product_form: bool,
}

/// Shared admin form state handed to commands.
#[derive(Debug, Default)]
pub struct AdminState {
    forms: Arc<Mutex<AdminForms>>,
}

impl AdminState {
    /// Creates fresh admin state with all forms in their initial state.
    pub fn new() -> Self {
        AdminState::default()
    }

    /// Executes a function with read access to the forms.
    pub fn with_forms<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AdminForms) -> R,
    {
        let forms = self.forms.lock().expect("Admin mutex poisoned");
        f(&forms)
    }

    /// Executes a function with write access to the forms.
    pub fn with_forms_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AdminForms) -> R,
    {
        let mut forms = self.forms.lock().expect("Admin mutex poisoned");
        f(&mut forms)
    }
}
