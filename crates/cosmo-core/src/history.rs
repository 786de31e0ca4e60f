//! Viewed-product history for the current session.

use serde::{Deserialize, Serialize};

/// Append-only, ordered log of product names the visitor engaged with.
///
/// Grows without bound for the lifetime of the session; entries are never
/// deduplicated or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewedHistory {
    entries: Vec<String>,
}

impl ViewedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a product name and returns the full updated sequence.
    pub fn append(&mut self, product_name: impl Into<String>) -> &[String] {
        self.entries.push(product_name.into());
        &self.entries
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
