//! In-memory doubles for the service and storage traits.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use cosmo_core::catalog::{Price, ProductId};
use cosmo_core::recommendation::{
    InteractionKind, InteractionRecorder, RecommendationItem, RecommendationService,
};
use cosmo_core::session::{SessionToken, SessionTokenRepository};
use cosmo_core::{CosmoError, Result};
use tokio::sync::Notify;

#[derive(Default)]
pub struct MockTokenRepository {
    stored: Mutex<Option<String>>,
}

#[async_trait]
impl SessionTokenRepository for MockTokenRepository {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, token: &str) -> Result<()> {
        *self.stored.lock().unwrap() = Some(token.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockRecorder {
    pub calls: Mutex<Vec<(String, ProductId, InteractionKind)>>,
    pub fail: AtomicBool,
}

impl MockRecorder {
    pub fn failing() -> Self {
        Self {
            fail: AtomicBool::new(true),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, ProductId, InteractionKind)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionRecorder for MockRecorder {
    async fn record(
        &self,
        session: &SessionToken,
        product_id: ProductId,
        kind: InteractionKind,
    ) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((session.as_str().to_string(), product_id, kind));
        if self.fail.load(Ordering::SeqCst) {
            return Err(CosmoError::network("connection refused"));
        }
        Ok(())
    }
}

/// What the mock service answers.
pub enum Reply {
    /// One item per call, named after the length of the viewed history.
    EchoHistoryLength,
    Items(Vec<RecommendationItem>),
    Fail(CosmoError),
}

/// Recommendation service that records every request.
///
/// When gated, the first call signals `entered` and then waits for `gate`
/// before answering, which lets tests force two workflows to interleave.
pub struct MockRecommendationService {
    reply: Reply,
    pub calls: Mutex<Vec<Vec<String>>>,
    gate_first_call: bool,
    pub entered: Notify,
    pub gate: Notify,
}

impl MockRecommendationService {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
            gate_first_call: false,
            entered: Notify::new(),
            gate: Notify::new(),
        }
    }

    pub fn gated(reply: Reply) -> Self {
        Self {
            gate_first_call: true,
            ..Self::new(reply)
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecommendationService for MockRecommendationService {
    async fn recommend(
        &self,
        _session: &SessionToken,
        viewed_products: &[String],
    ) -> Result<Vec<RecommendationItem>> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(viewed_products.to_vec());
            calls.len() - 1
        };

        if self.gate_first_call && call_index == 0 {
            self.entered.notify_one();
            self.gate.notified().await;
        }

        match &self.reply {
            Reply::EchoHistoryLength => Ok(vec![item(
                &format!("rec-{}", viewed_products.len()),
                &format!("Pick for {} viewed", viewed_products.len()),
            )]),
            Reply::Items(items) => Ok(items.clone()),
            Reply::Fail(err) => Err(err.clone()),
        }
    }
}

pub fn item(id: &str, name: &str) -> RecommendationItem {
    RecommendationItem {
        product_id: id.to_string(),
        product_name: name.to_string(),
        price: Price::from_cents(1000),
        image: String::new(),
        description: String::new(),
        category: None,
    }
}
