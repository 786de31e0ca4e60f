//! Session token domain model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the current session token was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// Read back from persisted storage.
    Restored,
    /// Generated on this run and persisted successfully.
    Minted,
    /// Generated on this run, but persistence failed; valid for this process only.
    Ephemeral,
}

/// Opaque identifier of one anonymous storefront installation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken {
    value: String,
    origin: SessionOrigin,
}

impl SessionToken {
    pub fn new(value: impl Into<String>, origin: SessionOrigin) -> Self {
        Self {
            value: value.into(),
            origin,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    /// True when the token will not survive a restart.
    pub fn is_ephemeral(&self) -> bool {
        self.origin == SessionOrigin::Ephemeral
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
