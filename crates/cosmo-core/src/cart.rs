//! Shopping cart.
//!
//! The cart is an ordered multiset: adding the same product twice yields two
//! distinct entries.

use serde::{Deserialize, Serialize};

use crate::catalog::{Price, Product, ProductId};

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Insertion position: the number of successful adds that preceded this one.
    pub position: u64,
}

/// Ordered cart contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
    next_position: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product. Always succeeds.
    pub fn add(&mut self, product: Product) -> &CartItem {
        let position = self.next_position;
        self.next_position += 1;
        self.items.push(CartItem { product, position });
        &self.items[self.items.len() - 1]
    }

    /// Removes every entry whose product id matches and returns how many were
    /// removed.
    ///
    /// All matching entries go, not just the first; with duplicates allowed a
    /// single-entry policy would be equally plausible, but this mirrors what
    /// the storefront has always done.
    pub fn remove(&mut self, product_id: ProductId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        before - self.items.len()
    }

    /// Exact sum of every entry's price. Zero for an empty cart.
    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.product.price).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Empty-state signal for the view layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries for a given product.
    pub fn count_of(&self, product_id: ProductId) -> usize {
        self.items
            .iter()
            .filter(|item| item.product.id == product_id)
            .count()
    }
}
