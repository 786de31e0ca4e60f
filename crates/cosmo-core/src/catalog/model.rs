//! Product domain model.

use serde::{Deserialize, Serialize};

use super::price::Price;

/// Stable catalog identifier of a product.
pub type ProductId = u32;

/// A product offered by the storefront.
///
/// Products are immutable and come from the static catalog; the core never
/// creates or destroys them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: ProductId,
    /// Display name (also the signal sent to the recommendation service)
    pub name: String,
    pub price: Price,
    /// Image URL
    pub image: String,
    pub description: String,
    pub category: String,
}

impl Product {
    /// Case-insensitive substring match over name and description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
