//! Recommendation domain module.
//!
//! - `model`: `RecommendationItem`, `RecommendationSet` and its source flag
//! - `service`: traits for the remote personalization service

mod model;
mod service;

pub use model::{DISPLAY_LIMIT, RecommendationItem, RecommendationSet, RecommendationSource};
pub use service::{InteractionKind, InteractionRecorder, RecommendationService};
