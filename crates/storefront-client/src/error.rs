//! # Client Error Types
//!
//! Error types for the catalog and order services.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Http           │  │  Status                 │ │
//! │  │  InvalidUrl     │  │  (connect,      │  │  (non-2xx, optional     │ │
//! │  │  ConfigLoad     │  │   timeout)      │  │   server message)       │ │
//! │  │  ConfigSave     │  │                 │  │  Decode                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Services hand these to the runtime, which maps them onto the          │
//! │  core's FetchFailure / OrderFailure before they reach the reducer.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{FetchFailure, OrderFailure};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request never produced a response (connect refused, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Server answered with a non-2xx status.
    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// 2xx body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }

    /// Collapses into what the reducer needs to know about a failed load/search.
    pub fn into_fetch_failure(self) -> FetchFailure {
        match self {
            ClientError::Status { status, .. } => FetchFailure::Status { status },
            other => FetchFailure::Transport(other.to_string()),
        }
    }

    /// Collapses into an order failure, keeping the server's message.
    ///
    /// A 2xx body that cannot be read counts as a transport failure: the
    /// customer cannot tell whether the order went through.
    pub fn into_order_failure(self) -> OrderFailure {
        match self {
            ClientError::Status { status, message } => OrderFailure::Rejected { status, message },
            other => OrderFailure::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors() {
        assert!(ClientError::InvalidUrl("ftp://x".into()).is_config_error());
        assert!(ClientError::ConfigLoadFailed("missing".into()).is_config_error());
        assert!(!ClientError::Http("refused".into()).is_config_error());
    }

    #[test]
    fn test_fetch_failure_mapping() {
        let err = ClientError::Status {
            status: 503,
            message: None,
        };
        assert_eq!(err.into_fetch_failure(), FetchFailure::Status { status: 503 });

        let err = ClientError::Decode("expected array".into());
        assert!(matches!(err.into_fetch_failure(), FetchFailure::Transport(_)));
    }

    #[test]
    fn test_order_failure_keeps_message() {
        let err = ClientError::Status {
            status: 400,
            message: Some("Lesson full".into()),
        };
        let failure = err.into_order_failure();
        assert_eq!(failure.user_message(), "Lesson full");

        let err = ClientError::Http("connection refused".into());
        assert_eq!(
            err.into_order_failure().user_message(),
            "Failed to place order. Please try again."
        );
    }
}
