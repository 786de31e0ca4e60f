//! Recommendation domain model.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, Price, Product};

/// Maximum number of recommendations the storefront shows at once.
pub const DISPLAY_LIMIT: usize = 2;

/// A suggested product as described by the personalization service.
///
/// Items are untrusted: they mirror `Product` structurally but may reference
/// products the local catalog does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    /// Opaque identifier; the service may send it as a number or a string.
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub product_id: String,
    pub product_name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&Product> for RecommendationItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.to_string(),
            product_name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            category: Some(product.category.clone()),
        }
    }
}

/// Where a recommendation set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Returned by the personalization service.
    Remote,
    /// Computed locally because the service failed.
    Fallback,
}

/// Ordered suggestions produced for one add-to-cart action.
///
/// A new set replaces the previous one; sets are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    items: Vec<RecommendationItem>,
    source: RecommendationSource,
}

impl RecommendationSet {
    /// Wraps the service response verbatim. No capping happens here.
    pub fn remote(items: Vec<RecommendationItem>) -> Self {
        Self {
            items,
            source: RecommendationSource::Remote,
        }
    }

    /// Builds the local substitute for a failed remote call.
    pub fn fallback(catalog: &Catalog, just_added_name: &str) -> Self {
        Self {
            items: catalog
                .fallback_for(just_added_name)
                .into_iter()
                .map(RecommendationItem::from)
                .collect(),
            source: RecommendationSource::Fallback,
        }
    }

    /// Empty remote set, the state before any add-to-cart action.
    pub fn empty() -> Self {
        Self::remote(Vec::new())
    }

    /// Every item, exactly as resolved.
    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    /// The items the storefront shows: at most [`DISPLAY_LIMIT`].
    pub fn displayed(&self) -> &[RecommendationItem] {
        &self.items[..self.items.len().min(DISPLAY_LIMIT)]
    }

    pub fn source(&self) -> RecommendationSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RecommendationSource::Fallback
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for RecommendationSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Wire forms an identifier may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum OpaqueId {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OpaqueId::deserialize(deserializer)? {
        OpaqueId::Number(n) => n.to_string(),
        OpaqueId::Text(s) => s,
    })
}
