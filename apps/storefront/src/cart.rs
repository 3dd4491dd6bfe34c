//! # Cart Accumulator
//!
//! A bare in-memory cart: an ordered, append-only sequence of products.
//!
//! ## Deliberately Minimal
//! The storefront's cart contract is just "accumulate and count":
//! - duplicates are allowed (adding the same product twice = two entries,
//!   there is no merge-by-id)
//! - no removal, no quantities, no totals
//! - no persistence and no checkout - those live outside this system
//!
//! The visible badge count is simply the sequence length.

use pecaaq_core::Product;

/// The shopping cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a product. No dedup: every call grows the cart by one.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Number of entries (the badge count).
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The accumulated entries, in add order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}
