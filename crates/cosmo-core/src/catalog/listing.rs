use std::collections::BTreeSet;

use super::builtin::builtin_products;
use super::model::{Product, ProductId};

/// Category label that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Number of products the local fallback rule suggests.
pub const FALLBACK_SIZE: usize = 2;

/// The static, ordered product catalog.
///
/// Catalog order is significant: it drives both listing order and the local
/// fallback recommendation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from products in the given order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in 25-product catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name or description contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        self.filter(term, ALL_CATEGORIES)
    }

    /// Applies the search term and the category selector together.
    ///
    /// The category `"All"` disables category filtering; any other value must
    /// equal the product category exactly.
    pub fn filter(&self, term: &str, category: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_term(&needle))
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    /// Distinct categories, sorted, with `"All"` first.
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        std::iter::once(ALL_CATEGORIES)
            .chain(distinct.into_iter().filter(|c| *c != ALL_CATEGORIES))
            .map(str::to_string)
            .collect()
    }

    /// Local substitute for the remote recommendation: the first
    /// [`FALLBACK_SIZE`] products, in catalog order, whose name differs from
    /// `excluded_name`.
    pub fn fallback_for(&self, excluded_name: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.name != excluded_name)
            .take(FALLBACK_SIZE)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
