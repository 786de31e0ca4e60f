//! Session token repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Persistence for the single per-installation session token.
///
/// Implementations store exactly one token; `save` replaces whatever was there.
#[async_trait]
pub trait SessionTokenRepository: Send + Sync {
    /// Loads the persisted token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: a token was persisted earlier
    /// - `Ok(None)`: nothing persisted yet
    /// - `Err(_)`: storage could not be read
    async fn load(&self) -> Result<Option<String>>;

    /// Persists the token.
    async fn save(&self, token: &str) -> Result<()>;
}
