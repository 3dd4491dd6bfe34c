//! # Catalog Store
//!
//! Holds the immutable product list and the derived facet value sets used
//! to populate the filter sidebar.
//!
//! ## Load Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::load(seed)                                                    │
//! │       │                                                                 │
//! │       ├── duplicate id?      → CoreError::DuplicateProductId           │
//! │       │                                                                 │
//! │       ├── parcels < 1?       → CoreError::InvalidParcelCount           │
//! │       │                                                                 │
//! │       └── OK → Catalog { products, brands, categories }                │
//! │                                                                         │
//! │  The static seed never trips these checks, but the contract must hold  │
//! │  for any future dynamic loader.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Facets (distinct brands and categories) are derived by a single scan at
//! load time and kept as sorted vectors. The catalog is never mutated after
//! load, so there is no re-derivation path.

use std::collections::{BTreeSet, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

// =============================================================================
// Catalog
// =============================================================================

/// The immutable product catalog plus derived facet lists.
///
/// Owns the product list for the lifetime of the page; loaded once,
/// never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    brands: Vec<String>,
    categories: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from a seed list, enforcing the load contract.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateProductId`] if any `id` repeats
    /// - [`CoreError::InvalidParcelCount`] if any `parcels < 1`
    ///
    /// ## Example
    /// ```rust
    /// use pecaaq_core::{seed, Catalog};
    ///
    /// let catalog = Catalog::load(seed::sample_products()).unwrap();
    /// assert_eq!(catalog.len(), 10);
    /// assert!(catalog.brands().contains(&"Bosch".to_string()));
    /// ```
    pub fn load(seed: Vec<Product>) -> CoreResult<Self> {
        let mut seen_ids = HashSet::with_capacity(seed.len());
        for product in &seed {
            if !seen_ids.insert(product.id) {
                return Err(CoreError::DuplicateProductId { id: product.id });
            }
            if product.parcels < 1 {
                return Err(CoreError::InvalidParcelCount {
                    id: product.id,
                    parcels: product.parcels,
                });
            }
        }

        // Single scan; BTreeSet gives uniqueness plus the ascending
        // case-sensitive order the sidebar presents.
        let mut brands = BTreeSet::new();
        let mut categories = BTreeSet::new();
        for product in &seed {
            brands.insert(product.brand.clone());
            categories.insert(product.category.clone());
        }

        Ok(Catalog {
            products: seed,
            brands: brands.into_iter().collect(),
            categories: categories.into_iter().collect(),
        })
    }

    /// The products in catalog order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct brands, sorted ascending (case-sensitive).
    #[inline]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Distinct categories, sorted ascending (case-sensitive).
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
