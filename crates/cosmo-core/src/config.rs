//! Storefront configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field is optional in the file; missing values take the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Address of the personalization service when nothing else is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Default `tracing` filter directive. Degraded service calls log at `warn`,
/// so the console stays quiet about them unless asked.
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub service: ServiceConfig,
    pub workflow: WorkflowConfig,
    pub logging: LoggingConfig,
}

/// `[service]`: where and how to reach the personalization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Per-request bound. Unset means requests may wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// `[workflow]`: add-to-cart orchestration behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Run concurrent add-to-cart actions one at a time instead of letting
    /// their network calls interleave.
    pub serialize_add_to_cart: bool,
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"cosmo_application=debug"`.
    pub level: String,
    /// Also write a daily rolling log file in the logs directory.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.service.base_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.service.request_timeout(), None);
        assert!(!config.workflow.serialize_add_to_cart);
    }

    #[test]
    fn test_partial_sections() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [service]
            request_timeout_secs = 5

            [workflow]
            serialize_add_to_cart = true
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.service.request_timeout(), Some(Duration::from_secs(5)));
        assert!(config.workflow.serialize_add_to_cart);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }
}
