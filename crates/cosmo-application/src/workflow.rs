//! Vocabulary of the add-to-cart saga.
//!
//! The workflow runs a fixed sequence of steps. Each step carries a policy
//! deciding what a failure means, and reports how it actually ended, so
//! callers (and tests) can see that nothing after `CommitCart` is rolled back.

use cosmo_core::cart::CartItem;
use cosmo_core::catalog::{Price, Product};
use cosmo_core::recommendation::RecommendationSet;
use serde::{Serialize, Serializer};
use strum::{Display, EnumIter};

/// Steps of the add-to-cart workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    CommitCart,
    RecordInteraction,
    ResolveRecommendations,
    Confirm,
}

impl WorkflowStep {
    pub fn policy(self) -> StepPolicy {
        match self {
            WorkflowStep::CommitCart | WorkflowStep::Confirm => StepPolicy::Commit,
            WorkflowStep::RecordInteraction => StepPolicy::Swallow,
            WorkflowStep::ResolveRecommendations => StepPolicy::Fallback,
        }
    }
}

/// What a step does when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepPolicy {
    /// Local and infallible; always applied.
    Commit,
    /// Failure is logged and ignored.
    Swallow,
    /// Failure is replaced by a locally computed result.
    Fallback,
}

/// How a step ended.
///
/// The failure reason stays in process for logs and tests; it serializes as
/// the bare status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Swallowed(String),
    FellBack(String),
}

impl StepStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Swallowed(_) => "swallowed",
            StepStatus::FellBack(_) => "fell_back",
        }
    }
}

impl Serialize for StepStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: WorkflowStep,
    pub policy: StepPolicy,
    pub status: StepStatus,
}

impl StepReport {
    pub fn new(step: WorkflowStep, status: StepStatus) -> Self {
        Self {
            step,
            policy: step.policy(),
            status,
        }
    }
}

/// The "added to cart" notice shown after a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub product: Product,
    pub recommendations: RecommendationSet,
}

/// Everything one add-to-cart invocation produced.
///
/// `cart`, `total` and `recommendations` are snapshots taken when this
/// invocation confirmed; a concurrent invocation may have changed the live
/// session since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartOutcome {
    pub cart: Vec<CartItem>,
    pub total: Price,
    pub recommendations: RecommendationSet,
    pub confirmation: Confirmation,
    pub steps: Vec<StepReport>,
}

impl AddToCartOutcome {
    pub fn step(&self, step: WorkflowStep) -> Option<&StepReport> {
        self.steps.iter().find(|report| report.step == step)
    }

    /// True when every step ran without swallowing or falling back.
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(|report| report.status.is_completed())
    }
}
