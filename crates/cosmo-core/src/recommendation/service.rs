//! Interfaces to the remote personalization service.
//!
//! The storefront talks to one service for two purposes: recording that a
//! session touched a product, and asking for follow-up suggestions. Both are
//! expressed as traits so the application layer can be exercised without a
//! network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::RecommendationItem;
use crate::catalog::ProductId;
use crate::error::Result;
use crate::session::SessionToken;

/// Categorical kind of interaction reported to the service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InteractionKind {
    View,
    Cart,
    Purchase,
}

/// Notifies the service that a session interacted with a product.
#[async_trait]
pub trait InteractionRecorder: Send + Sync {
    /// Sends one notification. Callers treat this as best-effort.
    async fn record(
        &self,
        session: &SessionToken,
        product_id: ProductId,
        kind: InteractionKind,
    ) -> Result<()>;
}

/// Fetches personalized suggestions for a session.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Sends the session and its full viewed history; returns the ordered
    /// suggestions exactly as the service produced them.
    async fn recommend(
        &self,
        session: &SessionToken,
        viewed_products: &[String],
    ) -> Result<Vec<RecommendationItem>>;
}
