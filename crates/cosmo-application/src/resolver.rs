//! Remote recommendations with a deterministic local fallback.

use std::sync::Arc;

use cosmo_core::catalog::Catalog;
use cosmo_core::recommendation::{RecommendationService, RecommendationSet};
use cosmo_core::session::SessionToken;

/// A resolved set plus, when the fallback was used, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub set: RecommendationSet,
    pub fallback_reason: Option<String>,
}

/// Always produces a [`RecommendationSet`].
///
/// Every call goes to the service; nothing is cached. Any failure (transport,
/// status, or payload) is replaced by the first two catalog products other
/// than the one just added.
#[derive(Clone)]
pub struct RecommendationResolver {
    service: Arc<dyn RecommendationService>,
    catalog: Arc<Catalog>,
}

impl RecommendationResolver {
    pub fn new(service: Arc<dyn RecommendationService>, catalog: Arc<Catalog>) -> Self {
        Self { service, catalog }
    }

    pub async fn resolve(
        &self,
        session: &SessionToken,
        viewed_history: &[String],
        just_added_name: &str,
    ) -> RecommendationSet {
        self.resolve_reported(session, viewed_history, just_added_name)
            .await
            .set
    }

    pub async fn resolve_reported(
        &self,
        session: &SessionToken,
        viewed_history: &[String],
        just_added_name: &str,
    ) -> Resolution {
        match self.service.recommend(session, viewed_history).await {
            Ok(items) => Resolution {
                set: RecommendationSet::remote(items),
                fallback_reason: None,
            },
            Err(e) => {
                tracing::warn!(
                    "[RecommendationResolver] Using local fallback after '{}': {}",
                    just_added_name,
                    e
                );
                Resolution {
                    set: RecommendationSet::fallback(&self.catalog, just_added_name),
                    fallback_reason: Some(e.to_string()),
                }
            }
        }
    }
}
