//! Data Transfer Objects (DTOs) for persistence.
//!
//! Private to the infrastructure layer: the domain only ever sees the
//! session token string, never the file layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contents of `session.toml`.
///
/// ```toml
/// session_id = "aZ3kP0qLx9Tb"
/// created_at = "2026-10-18T09:12:44Z"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFileDto {
    pub session_id: String,
    /// When this installation first minted its token. Informational only.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl SessionFileDto {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            created_at: Utc::now(),
        }
    }
}
