//! reqwest client for the personalization service.
//!
//! One client implements both `InteractionRecorder` and
//! `RecommendationService`; they share a connection pool and base URL.

use async_trait::async_trait;
use cosmo_core::catalog::ProductId;
use cosmo_core::config::ServiceConfig;
use cosmo_core::recommendation::{
    InteractionKind, InteractionRecorder, RecommendationItem, RecommendationService,
};
use cosmo_core::session::SessionToken;
use cosmo_core::{CosmoError, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::wire::{ErrorBody, RecommendRequest, RecordInteractionRequest};

#[derive(Debug, Clone)]
pub struct PersonalizationClient {
    client: Client,
    base_url: String,
}

impl PersonalizationClient {
    /// Client without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Client for `[service]`, applying `request_timeout_secs` when set.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CosmoError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// POSTs `body` and returns the raw response text of a 2xx answer.
    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String> {
        let url = self.endpoint(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| CosmoError::network(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| CosmoError::network(format!("Failed to read response from {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(map_http_error(status, &body_text));
        }
        Ok(body_text)
    }
}

#[async_trait]
impl InteractionRecorder for PersonalizationClient {
    async fn record(
        &self,
        session: &SessionToken,
        product_id: ProductId,
        kind: InteractionKind,
    ) -> Result<()> {
        let request = RecordInteractionRequest {
            session_id: session.as_str(),
            product_id,
            kind,
        };

        // Response body carries nothing the storefront uses
        self.post_json("record-interaction", &request).await?;

        tracing::debug!(
            "[Personalization] Recorded {} interaction for product {}",
            kind,
            product_id
        );
        Ok(())
    }
}

#[async_trait]
impl RecommendationService for PersonalizationClient {
    async fn recommend(
        &self,
        session: &SessionToken,
        viewed_products: &[String],
    ) -> Result<Vec<RecommendationItem>> {
        let request = RecommendRequest {
            session_id: session.as_str(),
            viewed_products,
        };

        let body = self.post_json("recommend", &request).await?;
        let items: Vec<RecommendationItem> = serde_json::from_str(&body).map_err(|e| {
            CosmoError::protocol(format!("Unexpected /recommend response: {}", e))
        })?;

        tracing::debug!(
            "[Personalization] Received {} recommendations for {} viewed products",
            items.len(),
            viewed_products.len()
        );
        Ok(items)
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn map_http_error(status: StatusCode, body: &str) -> CosmoError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|wrapper| wrapper.error)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    CosmoError::http_status(status.as_u16(), message)
}
