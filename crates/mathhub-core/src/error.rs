//! Error types for the Math Formula Hub application.

use thiserror::Error;

/// A shared error type for the entire application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Errors stay detailed inside
/// the library crates; the application layer collapses them to user-facing
/// messages at the view boundary.
#[derive(Error, Debug, Clone)]
pub enum HubError {
    /// Upstream service error (transport failure or non-success HTTP status)
    #[error("API error{}: {message}", .status_code.map(|c| format!(" ({c})")).unwrap_or_default())]
    Api {
        status_code: Option<u16>,
        message: String,
    },

    /// Upstream response violated the expected contract
    /// (no candidates, non-JSON text, or JSON missing required keys)
    #[error("Schema violation: {0}")]
    Schema(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HubError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Api error
    pub fn api(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a Schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a Schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HubError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HubError>`.
pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = HubError::api(Some(429), "rate limited");
        assert_eq!(err.to_string(), "API error (429): rate limited");

        let err = HubError::api(None, "connection refused");
        assert_eq!(err.to_string(), "API error: connection refused");
    }

    #[test]
    fn test_type_checks() {
        assert!(HubError::schema("missing key").is_schema());
        assert!(HubError::config("bad model").is_config());
        assert!(!HubError::internal("oops").is_api());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let hub: HubError = err.into();
        assert!(matches!(hub, HubError::Serialization { ref format, .. } if format == "JSON"));
    }
}
