//! Application layer for CosmoCart.
//!
//! Use cases that coordinate the domain types with the personalization
//! service: the add-to-cart workflow and the storefront session built on it.

pub mod notifier;
pub mod orchestrator;
pub mod resolver;
pub mod storefront;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use notifier::{Delivery, InteractionNotifier};
pub use orchestrator::{AddToCartOrchestrator, ConcurrencyPolicy, StorefrontState};
pub use resolver::{RecommendationResolver, Resolution};
pub use storefront::StorefrontSession;
pub use workflow::{
    AddToCartOutcome, Confirmation, StepPolicy, StepReport, StepStatus, WorkflowStep,
};
