//! # Admin Commands
//!
//! The operations behind the admin page: editing catalog products,
//! managing discount tiers, and creating products and coupons.
//!
//! ## Edit Workflow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                    Product Edit Workflow                          │
//! │                                                                   │
//! │  click "수정" ──► begin_product_edit ──► working copy in forms    │
//! │                                              │                    │
//! │        name/price/stock inputs ──► edit_product_* (copy only)     │
//! │                                              │                    │
//! │  click "수정 완료" ──► finish_product_edit ──► validate, commit   │
//! │                                              whole record to      │
//! │                                              catalog, clear form  │
//! │                                                                   │
//! │  Discount tiers commit immediately (add/remove), keeping the      │
//! │  working copy in sync so the open editor shows the change.        │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{AdminState, CatalogState, CouponState};
use maru_core::catalog::{self, CouponDraft, ProductDraft};
use maru_core::types::{Coupon, Discount};
use maru_core::CoreError;
use maru_core::validation::{
    validate_coupon, validate_discount, validate_price_units, validate_product_name, validate_stock,
};

// =============================================================================
// Product Editing
// =============================================================================

/// Opens a product for editing: copies the catalog record into the form
/// state as a working copy.
pub fn begin_product_edit(
    admin: &AdminState,
    catalog: &CatalogState,
    product_id: &str,
) -> Result<(), ApiError> {
    debug!(product_id = %product_id, "begin_product_edit command");

    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    admin.with_forms_mut(|forms| forms.edit_product = Some(product));
    Ok(())
}

/// Abandons the current edit, discarding the working copy.
pub fn cancel_product_edit(admin: &AdminState) {
    debug!("cancel_product_edit command");
    admin.with_forms_mut(|forms| forms.edit_product = None);
}

/// Updates the working copy's name. Silently ignored unless a product with
/// the given id is open for editing.
pub fn edit_product_name(admin: &AdminState, product_id: &str, name: &str) {
    debug!(product_id = %product_id, "edit_product_name command");
    admin.with_forms_mut(|forms| {
        if let Some(editing) = forms.edit_product.as_ref().filter(|p| p.id == product_id) {
            forms.edit_product = Some(catalog::with_name(editing, name));
        }
    });
}

/// Updates the working copy's price. Same guard as [`edit_product_name`].
pub fn edit_product_price(admin: &AdminState, product_id: &str, price_units: i64) {
    debug!(product_id = %product_id, price_units = %price_units, "edit_product_price command");
    admin.with_forms_mut(|forms| {
        if let Some(editing) = forms.edit_product.as_ref().filter(|p| p.id == product_id) {
            forms.edit_product = Some(catalog::with_price(editing, price_units));
        }
    });
}

/// Updates the working copy's stock capacity. Same guard as
/// [`edit_product_name`].
pub fn edit_product_stock(admin: &AdminState, product_id: &str, stock: i64) {
    debug!(product_id = %product_id, stock = %stock, "edit_product_stock command");
    admin.with_forms_mut(|forms| {
        if let Some(editing) = forms.edit_product.as_ref().filter(|p| p.id == product_id) {
            forms.edit_product = Some(catalog::with_stock(editing, stock));
        }
    });
}

/// Commits the working copy to the catalog and closes the editor.
///
/// Returns the committed record, or `None` when no edit is open. The copy
/// is validated before committing so a bad intermediate field value cannot
/// land in the catalog.
pub fn finish_product_edit(
    admin: &AdminState,
    catalog: &CatalogState,
) -> Result<Option<ProductDto>, ApiError> {
    debug!("finish_product_edit command");

    let Some(edited) = admin.with_forms(|forms| forms.edit_product.clone()) else {
        return Ok(None);
    };

    validate_product_name(&edited.name)?;
    validate_price_units(edited.price_units)?;
    validate_stock(edited.stock)?;

    catalog.update_product(edited.clone());
    admin.with_forms_mut(|forms| forms.edit_product = None);
    Ok(Some(ProductDto::from(edited)))
}

// =============================================================================
// Discount Tiers
// =============================================================================

/// Updates the new-discount form inputs.
pub fn set_new_discount(admin: &AdminState, discount: Discount) {
    admin.with_forms_mut(|forms| forms.new_discount = discount);
}

/// Appends the new-discount form's tier to the product being edited.
///
/// Commits to the catalog immediately, keeps the working copy in sync, and
/// resets the tier form. Silently ignored unless a product with the given
/// id is open for editing.
pub fn add_discount_to_product(
    admin: &AdminState,
    catalog: &CatalogState,
    product_id: &str,
) -> Result<Option<ProductDto>, ApiError> {
    debug!(product_id = %product_id, "add_discount_to_product command");

    let Some((editing, tier)) = admin.with_forms(|forms| {
        forms
            .edit_product
            .clone()
            .filter(|p| p.id == product_id)
            .map(|p| (p, forms.new_discount))
    }) else {
        return Ok(None);
    };

    validate_discount(&tier)?;

    let updated = catalog::add_discount(&editing, tier);
    catalog.update_product(updated.clone());
    admin.with_forms_mut(|forms| {
        forms.edit_product = Some(updated.clone());
        forms.new_discount = Discount::default();
    });
    Ok(Some(ProductDto::from(updated)))
}

/// Removes the tier at `index` from the product being edited.
///
/// Commits immediately and keeps the working copy in sync. An out-of-range
/// index, or no matching open editor, is a no-op.
pub fn remove_discount_from_product(
    admin: &AdminState,
    catalog: &CatalogState,
    product_id: &str,
    index: usize,
) -> Option<ProductDto> {
    debug!(product_id = %product_id, index = %index, "remove_discount_from_product command");

    let editing = admin.with_forms(|forms| {
        forms.edit_product.clone().filter(|p| p.id == product_id)
    })?;

    let updated = catalog::remove_discount(&editing, index);
    catalog.update_product(updated.clone());
    admin.with_forms_mut(|forms| forms.edit_product = Some(updated.clone()));
    Some(ProductDto::from(updated))
}

// =============================================================================
// New Product
// =============================================================================

/// Opens or closes the new-product form.
pub fn set_new_product_form_open(admin: &AdminState, open: bool) {
    admin.with_forms_mut(|forms| forms.show_new_product_form = open);
}

/// Updates the new-product form fields.
pub fn set_new_product(admin: &AdminState, draft: ProductDraft) {
    admin.with_forms_mut(|forms| forms.new_product = draft);
}

/// Creates a product from the new-product form and appends it to the
/// catalog. On success the form resets to its initial state and closes.
pub fn submit_new_product(
    admin: &AdminState,
    catalog: &CatalogState,
) -> Result<ProductDto, ApiError> {
    debug!("submit_new_product command");

    let draft = admin.with_forms(|forms| forms.new_product.clone());

    validate_product_name(&draft.name)?;
    validate_price_units(draft.price_units)?;
    validate_stock(draft.stock)?;
    for tier in &draft.discounts {
        validate_discount(tier)?;
    }

    let product = catalog::create_product(&draft);
    catalog.add_product(product.clone());
    admin.with_forms_mut(|forms| {
        forms.new_product = ProductDraft::default();
        forms.show_new_product_form = false;
    });
    Ok(ProductDto::from(product))
}

// =============================================================================
// New Coupon
// =============================================================================

/// Updates the new-coupon form fields.
pub fn set_new_coupon(admin: &AdminState, draft: CouponDraft) {
    admin.with_forms_mut(|forms| forms.new_coupon = draft);
}

/// Creates a coupon from the new-coupon form and appends it to the coupon
/// list. On success the form resets to its initial state.
pub fn submit_new_coupon(admin: &AdminState, coupons: &CouponState) -> Result<Coupon, ApiError> {
    debug!("submit_new_coupon command");

    let coupon = admin.with_forms(|forms| forms.new_coupon.clone()).into_coupon();
    validate_coupon(&coupon)?;

    coupons.add_coupon(coupon.clone());
    admin.with_forms_mut(|forms| forms.new_coupon = CouponDraft::default());
    Ok(coupon)
}
