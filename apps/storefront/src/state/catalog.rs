//! # Catalog State
//!
//! Owns the product collection shown on the shop page and edited on the
//! admin page. Admin commits replace whole records; partial field edits
//! live in the admin form state until committed.

use std::sync::{Arc, Mutex};

use maru_core::Product;

/// Shared product collection handed to commands.
#[derive(Debug)]
pub struct CatalogState {
    products: Arc<Mutex<Vec<Product>>>,
}

impl CatalogState {
    /// Creates a catalog pre-loaded with the given products.
    pub fn new(products: Vec<Product>) -> Self {
        CatalogState {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// A snapshot of the full product list, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.lock().clone()
    }

    /// Looks up a product by id.
    pub fn find(&self, product_id: &str) -> Option<Product> {
        self.lock().iter().find(|p| p.id == product_id).cloned()
    }

    /// Appends a new product to the catalog.
    pub fn add_product(&self, product: Product) {
        self.lock().push(product);
    }

    /// Replaces the record whose id matches `updated`. An unknown id is a
    /// no-op, matching the map-by-id update the admin page performs.
    pub fn update_product(&self, updated: Product) {
        let mut products = self.lock();
        if let Some(slot) = products.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.products.lock().expect("Catalog mutex poisoned")
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::new(Vec::new())
    }
}
