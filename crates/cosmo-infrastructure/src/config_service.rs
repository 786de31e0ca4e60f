//! Configuration service implementation.
//!
//! Reads `StorefrontConfig` from `config.toml` and layers environment
//! overrides on top. A missing file is not an error: every field has a default.

use std::path::{Path, PathBuf};

use cosmo_core::config::StorefrontConfig;
use cosmo_core::{CosmoError, Result};

use crate::paths::CosmoPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// Overrides `service.base_url`.
pub const ENV_SERVICE_URL: &str = "COSMOCART_SERVICE_URL";
/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "COSMOCART_LOG_LEVEL";

pub struct ConfigService {
    file: AtomicTomlFile<StorefrontConfig>,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicTomlFile::new(path.into()),
        }
    }

    pub fn from_paths(paths: &CosmoPaths) -> Self {
        Self::new(paths.config_file())
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the file and applies process environment overrides.
    pub fn load(&self) -> Result<StorefrontConfig> {
        self.load_with_service_url(None)
    }

    /// Like [`ConfigService::load`], with a command-line base URL layered on
    /// top of the environment. The merged result is validated as a whole.
    pub fn load_with_service_url(&self, service_url: Option<&str>) -> Result<StorefrontConfig> {
        let mut config = self.load_file()?;
        config = apply_overrides(config, |key| std::env::var(key).ok());
        if let Some(url) = service_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.service.base_url = url.to_string();
        }
        validate(&config)?;
        Ok(config)
    }

    /// Loads the file alone, without environment overrides.
    pub fn load_file(&self) -> Result<StorefrontConfig> {
        match self.file.load() {
            Ok(Some(config)) => {
                tracing::debug!("[ConfigService] Loaded {}", self.file.path().display());
                Ok(config)
            }
            Ok(None) => {
                tracing::debug!(
                    "[ConfigService] No config at {}, using defaults",
                    self.file.path().display()
                );
                Ok(StorefrontConfig::default())
            }
            Err(AtomicTomlError::Parse(e)) => Err(CosmoError::config(format!(
                "{} is not valid: {}",
                self.file.path().display(),
                e
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `config` back to disk, e.g. to materialize the defaults.
    pub fn save(&self, config: &StorefrontConfig) -> Result<()> {
        self.file.save(config)?;
        tracing::info!("[ConfigService] Wrote {}", self.file.path().display());
        Ok(())
    }
}

/// Layers overrides from `lookup` (normally the process environment).
/// Blank values are ignored.
pub fn apply_overrides<F>(mut config: StorefrontConfig, lookup: F) -> StorefrontConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_blank(ENV_SERVICE_URL) {
        config.service.base_url = url.trim().to_string();
    }
    if let Some(level) = non_blank(ENV_LOG_LEVEL) {
        config.logging.level = level.trim().to_string();
    }
    config
}

fn validate(config: &StorefrontConfig) -> Result<()> {
    let url = config.service.base_url.as_str();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CosmoError::config(format!(
            "service.base_url must be an http(s) URL, got '{}'",
            url
        )));
    }
    if config.service.request_timeout_secs == Some(0) {
        return Err(CosmoError::config(
            "service.request_timeout_secs must be positive; omit it to wait indefinitely",
        ));
    }
    Ok(())
}
