//! Wiring from configuration to a ready `StorefrontSession`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cosmo_application::{ConcurrencyPolicy, StorefrontSession};
use cosmo_core::catalog::Catalog;
use cosmo_core::config::StorefrontConfig;
use cosmo_infrastructure::{ConfigService, CosmoPaths, TomlSessionTokenRepository};
use cosmo_interaction::PersonalizationClient;

/// Resolved paths and effective configuration for one invocation.
pub struct AppContext {
    pub paths: CosmoPaths,
    pub config: StorefrontConfig,
}

impl AppContext {
    pub fn load(config_dir: Option<PathBuf>, service_url: Option<String>) -> Result<Self> {
        let paths = CosmoPaths::new(config_dir).context("Failed to resolve config directory")?;
        let config = ConfigService::from_paths(&paths)
            .load_with_service_url(service_url.as_deref())
            .context("Failed to load configuration")?;

        Ok(Self { paths, config })
    }

    pub fn config_service(&self) -> ConfigService {
        ConfigService::from_paths(&self.paths)
    }

    pub fn token_repository(&self) -> TomlSessionTokenRepository {
        TomlSessionTokenRepository::from_paths(&self.paths)
    }

    pub fn storefront(&self) -> Result<StorefrontSession> {
        let client = Arc::new(
            PersonalizationClient::from_config(&self.config.service)
                .context("Failed to create personalization client")?,
        );
        let policy = ConcurrencyPolicy::from(&self.config.workflow);

        tracing::debug!(
            "[App] Storefront using {} ({:?})",
            client.base_url(),
            policy
        );

        Ok(StorefrontSession::new(
            Arc::new(Catalog::builtin()),
            Arc::new(self.token_repository()),
            client.clone(),
            client,
            policy,
        ))
    }
}
