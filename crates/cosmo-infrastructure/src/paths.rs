//! Path management for CosmoCart's per-user files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cosmocart/         # Config directory (platform default)
//! ├── config.toml              # Storefront configuration
//! ├── session.toml             # Persisted session token
//! └── logs/                    # Rolling log files
//!     └── cosmocart.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "cosmocart";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform has no per-user config directory.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find the user config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for cosmo_core::CosmoError {
    fn from(e: PathError) -> Self {
        cosmo_core::CosmoError::storage(e.to_string())
    }
}

/// Resolves every file CosmoCart reads or writes.
///
/// By default everything lives under the platform config directory; an
/// explicit root replaces it entirely (used by `--config-dir` and tests).
#[derive(Debug, Clone)]
pub struct CosmoPaths {
    root: PathBuf,
}

impl CosmoPaths {
    /// Uses `root_override` when given, else `<platform config dir>/cosmocart`.
    pub fn new(root_override: Option<PathBuf>) -> Result<Self, PathError> {
        let root = match root_override {
            Some(root) => root,
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR_NAME),
        };
        Ok(Self { root })
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join("session.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
