//! TOML-backed `SessionTokenRepository`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cosmo_core::session::SessionTokenRepository;
use cosmo_core::{CosmoError, Result};

use crate::dto::SessionFileDto;
use crate::paths::CosmoPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// Stores the installation's session token in `session.toml`.
///
/// File access runs on the blocking pool so callers on the async runtime
/// never stall on disk I/O.
#[derive(Clone)]
pub struct TomlSessionTokenRepository {
    file: Arc<AtomicTomlFile<SessionFileDto>>,
}

impl TomlSessionTokenRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path.into())),
        }
    }

    /// Repository at `session.toml` under the given paths.
    pub fn from_paths(paths: &CosmoPaths) -> Self {
        Self::new(paths.session_file())
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Reads the whole record, including its creation time.
    pub async fn load_record(&self) -> Result<Option<SessionFileDto>> {
        let file = self.file.clone();
        run_blocking(move || file.load()).await
    }

    /// Forgets the persisted token; the next run mints a fresh one.
    pub async fn clear(&self) -> Result<()> {
        let file = self.file.clone();
        run_blocking(move || file.remove()).await?;
        tracing::info!(
            "[TomlSessionTokenRepository] Cleared session token at {}",
            self.file.path().display()
        );
        Ok(())
    }
}

#[async_trait]
impl SessionTokenRepository for TomlSessionTokenRepository {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self
            .load_record()
            .await?
            .map(|record| record.session_id)
            .filter(|id| !id.trim().is_empty()))
    }

    async fn save(&self, token: &str) -> Result<()> {
        let file = self.file.clone();
        let token = token.to_string();

        run_blocking(move || {
            let written = file.update(SessionFileDto::new(&token), |record| {
                // Re-saving the same token keeps its first creation time
                if record.session_id != token {
                    *record = SessionFileDto::new(&token);
                }
                Ok(())
            });

            match written {
                Err(AtomicTomlError::Parse(e)) => {
                    tracing::warn!(
                        "[TomlSessionTokenRepository] Overwriting unreadable session file {}: {}",
                        file.path().display(),
                        e
                    );
                    file.save(&SessionFileDto::new(&token))
                }
                other => other.map(|_| ()),
            }
        })
        .await?;

        tracing::debug!(
            "[TomlSessionTokenRepository] Saved session token to {}",
            self.file.path().display()
        );
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> std::result::Result<T, AtomicTomlError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| CosmoError::internal(format!("Storage task failed: {}", e)))?
        .map_err(CosmoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_core::session::{SessionIdentity, SessionOrigin};
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionTokenRepository::new(temp_dir.path().join("session.toml"));

        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionTokenRepository::new(temp_dir.path().join("session.toml"));

        repo.save("abcDEF123456").await.unwrap();

        assert_eq!(repo.load().await.unwrap().as_deref(), Some("abcDEF123456"));
        let on_disk = fs::read_to_string(repo.path()).unwrap();
        assert!(on_disk.contains(r#"session_id = "abcDEF123456""#));
    }

    #[tokio::test]
    async fn test_resaving_same_token_keeps_created_at() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionTokenRepository::new(temp_dir.path().join("session.toml"));

        repo.save("token000001").await.unwrap();
        let first = repo.load_record().await.unwrap().unwrap();
        repo.save("token000001").await.unwrap();
        let second = repo.load_record().await.unwrap().unwrap();

        assert_eq!(first.created_at, second.created_at);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error_then_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        fs::write(&path, "session_id = ").unwrap();
        let repo = TomlSessionTokenRepository::new(&path);

        assert!(repo.load().await.is_err());

        repo.save("freshtoken01").await.unwrap();
        assert_eq!(repo.load().await.unwrap().as_deref(), Some("freshtoken01"));
    }

    #[tokio::test]
    async fn test_blank_session_id_counts_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        fs::write(&path, "session_id = \"  \"\n").unwrap();
        let repo = TomlSessionTokenRepository::new(&path);

        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_forgets_token() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlSessionTokenRepository::new(temp_dir.path().join("session.toml"));
        repo.save("token000002").await.unwrap();

        repo.clear().await.unwrap();

        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_identity_is_stable_across_restarts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let first_run = SessionIdentity::new(Arc::new(TomlSessionTokenRepository::new(&path)));
        let minted = first_run.get_or_create().await;
        assert_eq!(minted.origin(), SessionOrigin::Minted);

        let second_run = SessionIdentity::new(Arc::new(TomlSessionTokenRepository::new(&path)));
        let restored = second_run.get_or_create().await;
        assert_eq!(restored.origin(), SessionOrigin::Restored);
        assert_eq!(restored.as_str(), minted.as_str());
    }

    #[tokio::test]
    async fn test_unwritable_location_yields_ephemeral_identity() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let repo = TomlSessionTokenRepository::new(blocker.join("session.toml"));

        let identity = SessionIdentity::new(Arc::new(repo));
        let token = identity.get_or_create().await;

        assert!(token.is_ephemeral());
        assert_eq!(identity.get_or_create().await, token);
    }
}
