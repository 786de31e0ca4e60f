//! Error types for the CosmoCart storefront.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole storefront.
///
/// Every failure the core can observe maps onto one of these variants. None of
/// them is fatal to the add-to-cart flow: callers decide per step whether an
/// error is swallowed, replaced by a fallback, or propagated.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CosmoError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The personalization service could not be reached or answered with a
    /// non-success status.
    #[error("Network error{}: {message}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Network {
        status: Option<u16>,
        message: String,
    },

    /// The remote answered, but the payload did not match the expected shape.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Persisted storage (session token, config) was unavailable.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A price string or number could not be turned into an amount.
    #[error("Invalid price: '{0}'")]
    InvalidPrice(String),

    /// The storefront does not implement this action.
    #[error("Unsupported action: {0}")]
    Unsupported(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CosmoError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Network error without an HTTP status (connection level).
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Network error for a non-success HTTP status.
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::Network {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a Protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the "transient network failure" class: unreachable service,
    /// non-success status, or an unparsable response.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Protocol(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CosmoError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for CosmoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CosmoError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CosmoError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CosmoError>`.
pub type Result<T> = std::result::Result<T, CosmoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display_with_status() {
        let err = CosmoError::http_status(503, "service unavailable");
        assert_eq!(err.to_string(), "Network error (503): service unavailable");
        assert!(err.is_transient());
    }

    #[test]
    fn test_network_display_without_status() {
        let err = CosmoError::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_protocol_is_transient_but_storage_is_not() {
        assert!(CosmoError::protocol("bad json").is_transient());
        assert!(!CosmoError::storage("disk full").is_transient());
        assert!(CosmoError::storage("disk full").is_storage());
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CosmoError = io.into();
        assert!(err.is_storage());
    }
}
