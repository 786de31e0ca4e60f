//! The storefront session: one shopper's catalog view, cart and suggestions.

use std::sync::Arc;

use cosmo_core::cart::CartItem;
use cosmo_core::catalog::{Catalog, Price, Product, ProductId};
use cosmo_core::recommendation::{
    InteractionRecorder, RecommendationService, RecommendationSet,
};
use cosmo_core::session::{SessionIdentity, SessionToken, SessionTokenRepository};
use cosmo_core::{CosmoError, Result};
use tokio::sync::Mutex;

use crate::notifier::InteractionNotifier;
use crate::orchestrator::{AddToCartOrchestrator, ConcurrencyPolicy, StorefrontState};
use crate::resolver::RecommendationResolver;
use crate::workflow::{AddToCartOutcome, Confirmation};

/// Top-level store for a running storefront.
///
/// Reads return snapshots; all mutation goes through `add_to_cart` and
/// `remove_from_cart`.
pub struct StorefrontSession {
    catalog: Arc<Catalog>,
    state: Arc<Mutex<StorefrontState>>,
    orchestrator: AddToCartOrchestrator,
}

impl StorefrontSession {
    pub fn new(
        catalog: Arc<Catalog>,
        token_repository: Arc<dyn SessionTokenRepository>,
        recorder: Arc<dyn InteractionRecorder>,
        service: Arc<dyn RecommendationService>,
        policy: ConcurrencyPolicy,
    ) -> Self {
        let state = Arc::new(Mutex::new(StorefrontState::default()));
        let orchestrator = AddToCartOrchestrator::new(
            Arc::new(SessionIdentity::new(token_repository)),
            InteractionNotifier::new(recorder),
            RecommendationResolver::new(service, catalog.clone()),
            state.clone(),
            policy,
        );

        Self {
            catalog,
            state,
            orchestrator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> ConcurrencyPolicy {
        self.orchestrator.policy()
    }

    pub async fn session_token(&self) -> SessionToken {
        self.orchestrator.session_token().await
    }

    pub fn product(&self, product_id: ProductId) -> Result<&Product> {
        self.catalog
            .get(product_id)
            .ok_or_else(|| CosmoError::not_found("Product", product_id.to_string()))
    }

    /// Products matching `term` (case-insensitive, name or description)
    /// within `category` (`"All"` for every category).
    pub fn browse(&self, term: &str, category: &str) -> Vec<&Product> {
        self.catalog.filter(term, category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Adds a catalog product by id and runs the add-to-cart workflow.
    ///
    /// Only an unknown id is an error; service failures are absorbed.
    pub async fn add_to_cart(&self, product_id: ProductId) -> Result<AddToCartOutcome> {
        let product = self.product(product_id)?.clone();
        Ok(self.orchestrator.add_to_cart(product).await)
    }

    /// Removes every cart entry for `product_id`; returns how many went.
    pub async fn remove_from_cart(&self, product_id: ProductId) -> usize {
        let removed = self.state.lock().await.cart.remove(product_id);
        tracing::info!(
            "[Storefront] Removed {} cart entries for product {}",
            removed,
            product_id
        );
        removed
    }

    pub async fn cart(&self) -> Vec<CartItem> {
        self.state.lock().await.cart.items().to_vec()
    }

    pub async fn cart_total(&self) -> Price {
        self.state.lock().await.cart.total()
    }

    pub async fn viewed_history(&self) -> Vec<String> {
        self.state.lock().await.history.entries().to_vec()
    }

    pub async fn recommendations(&self) -> RecommendationSet {
        self.state.lock().await.recommendations.clone()
    }

    pub async fn last_confirmation(&self) -> Option<Confirmation> {
        self.state.lock().await.confirmation.clone()
    }

    pub async fn dismiss_confirmation(&self) {
        self.state.lock().await.confirmation = None;
    }

    /// Not offered by this storefront yet.
    pub async fn checkout(&self) -> Result<()> {
        let state = self.state.lock().await;
        tracing::info!(
            "[Storefront] Checkout requested with {} items totalling {}",
            state.cart.len(),
            state.cart.total()
        );
        Err(CosmoError::Unsupported("checkout".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockRecommendationService, MockRecorder, MockTokenRepository, Reply, item,
    };
    use cosmo_core::recommendation::RecommendationSource;

    fn storefront(reply: Reply, recorder: MockRecorder) -> StorefrontSession {
        StorefrontSession::new(
            Arc::new(Catalog::builtin()),
            Arc::new(MockTokenRepository::default()),
            Arc::new(recorder),
            Arc::new(MockRecommendationService::new(reply)),
            ConcurrencyPolicy::default(),
        )
    }

    #[tokio::test]
    async fn test_add_speaker_with_one_remote_recommendation() {
        let store = storefront(
            Reply::Items(vec![item("4", "Running Shoes")]),
            MockRecorder::default(),
        );

        let outcome = store.add_to_cart(3).await.unwrap();

        assert_eq!(outcome.confirmation.product.name, "Bluetooth Speaker");
        assert_eq!(store.cart().await.len(), 1);
        assert_eq!(store.cart_total().await.to_string(), "79.99");

        let recs = store.recommendations().await;
        assert_eq!(recs.items(), &[item("4", "Running Shoes")]);
        assert_eq!(recs.source(), RecommendationSource::Remote);
        assert_eq!(store.viewed_history().await, vec!["Bluetooth Speaker"]);
    }

    #[tokio::test]
    async fn test_unreachable_service_still_fills_cart_and_recommendations() {
        let store = storefront(
            Reply::Fail(CosmoError::network("connection refused")),
            MockRecorder::failing(),
        );

        store.add_to_cart(3).await.unwrap();

        assert_eq!(store.cart().await.len(), 1);
        let recs = store.recommendations().await;
        assert!(recs.is_fallback());
        assert_eq!(recs.len(), 2);
        assert!(recs.items().iter().all(|i| i.product_name != "Bluetooth Speaker"));
    }

    #[tokio::test]
    async fn test_total_of_bottle_and_headphones() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());

        store.add_to_cart(7).await.unwrap();
        store.add_to_cart(1).await.unwrap();

        assert_eq!(store.cart_total().await.to_string(), "319.98");
    }

    #[tokio::test]
    async fn test_remove_drops_every_matching_entry() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());
        store.add_to_cart(7).await.unwrap();
        store.add_to_cart(7).await.unwrap();
        store.add_to_cart(3).await.unwrap();

        let removed = store.remove_from_cart(7).await;

        assert_eq!(removed, 2);
        let cart = store.cart().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product.id, 3);
        // History is not rewritten by removal
        assert_eq!(store.viewed_history().await.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_cart() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());

        assert!(store.cart().await.is_empty());
        assert_eq!(store.cart_total().await.to_string(), "0.00");
        assert_eq!(store.remove_from_cart(1).await, 0);
        assert!(store.recommendations().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found_and_changes_nothing() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());

        let err = store.add_to_cart(999).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(store.cart().await.is_empty());
        assert!(store.viewed_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_confirmation_can_be_dismissed() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());
        store.add_to_cart(7).await.unwrap();

        assert_eq!(
            store.last_confirmation().await.map(|c| c.product.id),
            Some(7)
        );
        store.dismiss_confirmation().await;
        assert!(store.last_confirmation().await.is_none());
    }

    #[tokio::test]
    async fn test_checkout_is_unsupported() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());
        store.add_to_cart(7).await.unwrap();

        let err = store.checkout().await.unwrap_err();

        assert!(matches!(err, CosmoError::Unsupported(_)));
        assert_eq!(store.cart().await.len(), 1);
    }

    #[tokio::test]
    async fn test_session_token_is_stable() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());

        let first = store.session_token().await;
        let second = store.session_token().await;

        assert_eq!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn test_browse_and_categories() {
        let store = storefront(Reply::Items(Vec::new()), MockRecorder::default());

        assert_eq!(store.categories()[0], "All");
        let sports: Vec<_> = store.browse("", "Sports").iter().map(|p| p.id).collect();
        assert_eq!(sports, vec![4, 5, 7, 23]);
        assert_eq!(store.browse("", "All").len(), store.catalog().len());
    }
}
