//! Shared error type across routestat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Host or process metrics could not be read.
    MetricsUnavailable,
    /// Report could not be serialized.
    Serialization,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in plain-text and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::MetricsUnavailable => "METRICS_UNAVAILABLE",
            ClientCode::Serialization => "SERIALIZATION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("metrics unavailable: {0}")]
    MetricsUnavailable(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatsError::BadRequest(_) => ClientCode::BadRequest,
            StatsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StatsError::MetricsUnavailable(_) => ClientCode::MetricsUnavailable,
            StatsError::Serialization(_) => ClientCode::Serialization,
            StatsError::Internal(_) => ClientCode::Internal,
        }
    }
}
