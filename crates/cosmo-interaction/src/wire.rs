//! JSON bodies exchanged with the personalization service.

use cosmo_core::catalog::ProductId;
use cosmo_core::recommendation::InteractionKind;
use serde::{Deserialize, Serialize};

/// `POST /record-interaction`
#[derive(Debug, Serialize)]
pub(crate) struct RecordInteractionRequest<'a> {
    pub session_id: &'a str,
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
}

/// `POST /recommend`
#[derive(Debug, Serialize)]
pub(crate) struct RecommendRequest<'a> {
    pub session_id: &'a str,
    pub viewed_products: &'a [String],
}

/// `{"error": "..."}`, sent alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
