//! Best-effort interaction reporting.

use std::sync::Arc;

use cosmo_core::catalog::ProductId;
use cosmo_core::recommendation::{InteractionKind, InteractionRecorder};
use cosmo_core::session::SessionToken;

/// Result of one notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The recorder failed; the reason was logged and dropped.
    Swallowed(String),
}

/// Wraps an [`InteractionRecorder`] so that failures never propagate.
///
/// At most one attempt per call; there is no retry queue.
#[derive(Clone)]
pub struct InteractionNotifier {
    recorder: Arc<dyn InteractionRecorder>,
}

impl InteractionNotifier {
    pub fn new(recorder: Arc<dyn InteractionRecorder>) -> Self {
        Self { recorder }
    }

    pub async fn notify(
        &self,
        session: &SessionToken,
        product_id: ProductId,
        kind: InteractionKind,
    ) -> Delivery {
        match self.recorder.record(session, product_id, kind).await {
            Ok(()) => Delivery::Delivered,
            Err(e) => {
                tracing::warn!(
                    "[InteractionNotifier] Dropped {} interaction for product {}: {}",
                    kind,
                    product_id,
                    e
                );
                Delivery::Swallowed(e.to_string())
            }
        }
    }
}
