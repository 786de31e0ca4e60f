//! Lazy, durable session identity.

use std::sync::Arc;

use rand::Rng;
use rand::distributions::Alphanumeric;
use tokio::sync::OnceCell;

use super::model::{SessionOrigin, SessionToken};
use super::repository::SessionTokenRepository;

/// Length of freshly minted session tokens.
pub const SESSION_TOKEN_LEN: usize = 12;

/// Owns the stable per-installation session token.
///
/// The token is established on first use and memoized for the lifetime of
/// this value, so storage is consulted at most once per process. Storage
/// failures never surface: the token degrades to an in-memory one instead.
pub struct SessionIdentity {
    repository: Arc<dyn SessionTokenRepository>,
    token: OnceCell<SessionToken>,
}

impl SessionIdentity {
    pub fn new(repository: Arc<dyn SessionTokenRepository>) -> Self {
        Self {
            repository,
            token: OnceCell::new(),
        }
    }

    /// Returns the session token, reading or minting it on first call.
    pub async fn get_or_create(&self) -> SessionToken {
        self.token.get_or_init(|| self.establish()).await.clone()
    }

    /// The token if it has already been established.
    pub fn current(&self) -> Option<&SessionToken> {
        self.token.get()
    }

    async fn establish(&self) -> SessionToken {
        match self.repository.load().await {
            Ok(Some(value)) if !value.trim().is_empty() => {
                tracing::debug!("[SessionIdentity] Restored persisted session token");
                return SessionToken::new(value, SessionOrigin::Restored);
            }
            Ok(_) => {
                tracing::debug!("[SessionIdentity] No persisted session token, minting one");
            }
            Err(e) => {
                tracing::warn!(
                    "[SessionIdentity] Could not read persisted session token, minting a new one: {}",
                    e
                );
            }
        }

        let value = generate_token();
        match self.repository.save(&value).await {
            Ok(()) => {
                tracing::info!("[SessionIdentity] Minted new session token");
                SessionToken::new(value, SessionOrigin::Minted)
            }
            Err(e) => {
                tracing::warn!(
                    "[SessionIdentity] Session token storage unavailable, using an ephemeral token: {}",
                    e
                );
                SessionToken::new(value, SessionOrigin::Ephemeral)
            }
        }
    }
}

/// Generates a random alphanumeric token.
pub(crate) fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}
