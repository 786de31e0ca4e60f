//! The add-to-cart workflow.
//!
//! One invocation runs `CommitCart`, `RecordInteraction`,
//! `ResolveRecommendations` and `Confirm` in that order. The shared state is
//! locked only around synchronous mutations, never across the two network
//! awaits, so under [`ConcurrencyPolicy::Interleaved`] two invocations may
//! overlap: each appends to the history in the order it reaches that step, and
//! whichever resolve finishes last owns the displayed recommendations, even if
//! it was computed from an older history.

use std::sync::Arc;

use cosmo_core::cart::CartStore;
use cosmo_core::catalog::Product;
use cosmo_core::config::WorkflowConfig;
use cosmo_core::history::ViewedHistory;
use cosmo_core::recommendation::{InteractionKind, RecommendationSet};
use cosmo_core::session::{SessionIdentity, SessionToken};
use tokio::sync::Mutex;

use crate::notifier::{Delivery, InteractionNotifier};
use crate::resolver::RecommendationResolver;
use crate::workflow::{AddToCartOutcome, Confirmation, StepReport, StepStatus, WorkflowStep};

/// How concurrent add-to-cart invocations on one session relate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    /// No mutual exclusion across the network awaits.
    #[default]
    Interleaved,
    /// One invocation at a time, start to finish.
    Serialized,
}

impl From<&WorkflowConfig> for ConcurrencyPolicy {
    fn from(config: &WorkflowConfig) -> Self {
        if config.serialize_add_to_cart {
            ConcurrencyPolicy::Serialized
        } else {
            ConcurrencyPolicy::Interleaved
        }
    }
}

/// Mutable per-session state.
#[derive(Debug, Default)]
pub struct StorefrontState {
    pub cart: CartStore,
    pub history: ViewedHistory,
    pub recommendations: RecommendationSet,
    pub confirmation: Option<Confirmation>,
}

pub struct AddToCartOrchestrator {
    identity: Arc<SessionIdentity>,
    notifier: InteractionNotifier,
    resolver: RecommendationResolver,
    state: Arc<Mutex<StorefrontState>>,
    policy: ConcurrencyPolicy,
    in_flight: Mutex<()>,
}

impl AddToCartOrchestrator {
    pub fn new(
        identity: Arc<SessionIdentity>,
        notifier: InteractionNotifier,
        resolver: RecommendationResolver,
        state: Arc<Mutex<StorefrontState>>,
        policy: ConcurrencyPolicy,
    ) -> Self {
        Self {
            identity,
            notifier,
            resolver,
            state,
            policy,
            in_flight: Mutex::new(()),
        }
    }

    pub fn policy(&self) -> ConcurrencyPolicy {
        self.policy
    }

    pub async fn session_token(&self) -> SessionToken {
        self.identity.get_or_create().await
    }

    /// Runs the whole workflow for `product`. Never fails: remote problems
    /// show up as swallowed or fallen-back steps in the outcome.
    pub async fn add_to_cart(&self, product: Product) -> AddToCartOutcome {
        let _guard = match self.policy {
            ConcurrencyPolicy::Serialized => Some(self.in_flight.lock().await),
            ConcurrencyPolicy::Interleaved => None,
        };

        let mut steps = Vec::with_capacity(4);

        // CommitCart
        {
            let mut state = self.state.lock().await;
            let position = state.cart.add(product.clone()).position;
            tracing::info!(
                "[AddToCart] Added '{}' (id {}) at position {}",
                product.name,
                product.id,
                position
            );
        }
        steps.push(StepReport::new(WorkflowStep::CommitCart, StepStatus::Completed));

        let session = self.identity.get_or_create().await;

        // RecordInteraction
        let recorded = match self
            .notifier
            .notify(&session, product.id, InteractionKind::Cart)
            .await
        {
            Delivery::Delivered => StepStatus::Completed,
            Delivery::Swallowed(reason) => StepStatus::Swallowed(reason),
        };
        steps.push(StepReport::new(WorkflowStep::RecordInteraction, recorded));

        // ResolveRecommendations
        let viewed = {
            let mut state = self.state.lock().await;
            state.history.append(product.name.as_str()).to_vec()
        };
        let resolution = self
            .resolver
            .resolve_reported(&session, &viewed, &product.name)
            .await;
        let resolved = match resolution.fallback_reason {
            None => StepStatus::Completed,
            Some(reason) => StepStatus::FellBack(reason),
        };
        steps.push(StepReport::new(WorkflowStep::ResolveRecommendations, resolved));

        // Confirm
        let recommendations = resolution.set;
        let confirmation = Confirmation {
            product,
            recommendations: recommendations.clone(),
        };
        let (cart, total) = {
            let mut state = self.state.lock().await;
            state.recommendations = recommendations.clone();
            state.confirmation = Some(confirmation.clone());
            (state.cart.items().to_vec(), state.cart.total())
        };
        steps.push(StepReport::new(WorkflowStep::Confirm, StepStatus::Completed));

        tracing::debug!(
            "[AddToCart] Confirmed '{}' with {} recommendations ({:?})",
            confirmation.product.name,
            recommendations.len(),
            recommendations.source()
        );

        AddToCartOutcome {
            cart,
            total,
            recommendations,
            confirmation,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockRecommendationService, MockRecorder, MockTokenRepository, Reply, item,
    };
    use cosmo_core::CosmoError;
    use cosmo_core::catalog::Catalog;
    use cosmo_core::recommendation::RecommendationSource;

    struct Harness {
        orchestrator: AddToCartOrchestrator,
        state: Arc<Mutex<StorefrontState>>,
        recorder: Arc<MockRecorder>,
        service: Arc<MockRecommendationService>,
        catalog: Arc<Catalog>,
    }

    fn harness(
        recorder: MockRecorder,
        service: MockRecommendationService,
        policy: ConcurrencyPolicy,
    ) -> Harness {
        let catalog = Arc::new(Catalog::builtin());
        let recorder = Arc::new(recorder);
        let service = Arc::new(service);
        let state = Arc::new(Mutex::new(StorefrontState::default()));
        let identity = Arc::new(SessionIdentity::new(Arc::new(
            MockTokenRepository::default(),
        )));

        let orchestrator = AddToCartOrchestrator::new(
            identity,
            InteractionNotifier::new(recorder.clone()),
            RecommendationResolver::new(service.clone(), catalog.clone()),
            state.clone(),
            policy,
        );

        Harness {
            orchestrator,
            state,
            recorder,
            service,
            catalog,
        }
    }

    fn product(catalog: &Catalog, id: u32) -> Product {
        catalog.get(id).cloned().unwrap()
    }

    #[tokio::test]
    async fn test_clean_run_reports_every_step() {
        let h = harness(
            MockRecorder::default(),
            MockRecommendationService::new(Reply::Items(vec![item("9", "Yoga Mat")])),
            ConcurrencyPolicy::Interleaved,
        );
        let speaker = product(&h.catalog, 3);

        let outcome = h.orchestrator.add_to_cart(speaker.clone()).await;

        assert!(outcome.is_clean());
        let order: Vec<_> = outcome.steps.iter().map(|r| r.step).collect();
        assert_eq!(
            order,
            vec![
                WorkflowStep::CommitCart,
                WorkflowStep::RecordInteraction,
                WorkflowStep::ResolveRecommendations,
                WorkflowStep::Confirm,
            ]
        );
        assert_eq!(outcome.cart.len(), 1);
        assert_eq!(outcome.total.to_string(), "79.99");
        assert_eq!(outcome.recommendations.items(), &[item("9", "Yoga Mat")]);
        assert_eq!(outcome.confirmation.product, speaker);

        let token = h.orchestrator.session_token().await;
        assert_eq!(
            h.recorder.calls(),
            vec![(token.as_str().to_string(), 3, InteractionKind::Cart)]
        );
        assert_eq!(h.service.calls(), vec![vec![speaker.name.clone()]]);
    }

    #[tokio::test]
    async fn test_service_failures_never_roll_back_the_cart() {
        let h = harness(
            MockRecorder::failing(),
            MockRecommendationService::new(Reply::Fail(CosmoError::network("refused"))),
            ConcurrencyPolicy::Interleaved,
        );
        let speaker = product(&h.catalog, 3);

        let outcome = h.orchestrator.add_to_cart(speaker).await;

        assert!(!outcome.is_clean());
        assert!(matches!(
            outcome.step(WorkflowStep::RecordInteraction).unwrap().status,
            StepStatus::Swallowed(_)
        ));
        assert!(matches!(
            outcome.step(WorkflowStep::ResolveRecommendations).unwrap().status,
            StepStatus::FellBack(_)
        ));
        assert_eq!(outcome.cart.len(), 1);
        assert_eq!(outcome.recommendations.source(), RecommendationSource::Fallback);
        assert_eq!(outcome.recommendations.len(), 2);

        let state = h.state.lock().await;
        assert_eq!(state.cart.len(), 1);
        assert!(state.recommendations.is_fallback());
        assert!(state.confirmation.is_some());
    }

    #[tokio::test]
    async fn test_history_grows_by_one_per_add() {
        let h = harness(
            MockRecorder::default(),
            MockRecommendationService::new(Reply::EchoHistoryLength),
            ConcurrencyPolicy::Interleaved,
        );
        let ids = [1, 7, 1, 3];

        for id in ids {
            h.orchestrator.add_to_cart(product(&h.catalog, id)).await;
        }

        let calls = h.service.calls();
        assert_eq!(calls.len(), ids.len());
        for (n, call) in calls.iter().enumerate() {
            let expected: Vec<String> = ids[..=n]
                .iter()
                .map(|id| product(&h.catalog, *id).name)
                .collect();
            assert_eq!(call, &expected);
        }
        assert_eq!(h.state.lock().await.history.len(), 4);
    }

    #[tokio::test]
    async fn test_interleaved_adds_let_the_slower_resolve_win() {
        let h = harness(
            MockRecorder::default(),
            MockRecommendationService::gated(Reply::EchoHistoryLength),
            ConcurrencyPolicy::Interleaved,
        );
        let headphones = product(&h.catalog, 1);
        let bottle = product(&h.catalog, 7);

        let (first, second) = tokio::join!(h.orchestrator.add_to_cart(headphones.clone()), async {
            h.service.entered.notified().await;
            let outcome = h.orchestrator.add_to_cart(bottle.clone()).await;
            h.service.gate.notify_one();
            outcome
        });

        // Both histories were appended in call order
        assert_eq!(
            h.service.calls(),
            vec![
                vec![headphones.name.clone()],
                vec![headphones.name.clone(), bottle.name.clone()],
            ]
        );
        assert_eq!(second.recommendations.items()[0].product_id, "rec-2");
        assert_eq!(first.recommendations.items()[0].product_id, "rec-1");

        // The first add resolved last, so its older result is what stays visible
        let state = h.state.lock().await;
        assert_eq!(state.recommendations.items()[0].product_id, "rec-1");
        assert_eq!(state.cart.len(), 2);
        assert_eq!(
            state.confirmation.as_ref().unwrap().product,
            headphones
        );
    }

    #[tokio::test]
    async fn test_serialized_adds_run_one_at_a_time() {
        let h = harness(
            MockRecorder::default(),
            MockRecommendationService::gated(Reply::EchoHistoryLength),
            ConcurrencyPolicy::Serialized,
        );
        let headphones = product(&h.catalog, 1);
        let bottle = product(&h.catalog, 7);

        let (first, second, ()) = tokio::join!(
            h.orchestrator.add_to_cart(headphones.clone()),
            h.orchestrator.add_to_cart(bottle.clone()),
            async {
                h.service.entered.notified().await;
                // The second add is parked on the in-flight guard, not in the cart
                assert_eq!(h.state.lock().await.cart.len(), 1);
                h.service.gate.notify_one();
            }
        );

        assert_eq!(
            h.service.calls(),
            vec![
                vec![headphones.name.clone()],
                vec![headphones.name.clone(), bottle.name.clone()],
            ]
        );
        assert_eq!(first.cart.len(), 1);
        assert_eq!(second.cart.len(), 2);

        let state = h.state.lock().await;
        assert_eq!(state.recommendations.items()[0].product_id, "rec-2");
        assert_eq!(state.confirmation.as_ref().unwrap().product, bottle);
    }

    #[test]
    fn test_policy_from_config() {
        assert_eq!(
            ConcurrencyPolicy::from(&WorkflowConfig::default()),
            ConcurrencyPolicy::Interleaved
        );
        assert_eq!(
            ConcurrencyPolicy::from(&WorkflowConfig {
                serialize_add_to_cart: true
            }),
            ConcurrencyPolicy::Serialized
        );
    }
}
