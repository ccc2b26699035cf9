//! Error types for panel API operations.
//!
//! The panel reports application-level failures (bad `sid`, insufficient
//! resources) inside the JSON body rather than through HTTP status codes, so
//! those are not represented here; they reach the caller as ordinary decoded
//! JSON. This module only covers failures of the client itself.

use thiserror::Error;

/// Main error type for panel API operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Credentials or endpoint configuration rejected before any request
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP verb outside the supported set (GET/POST)
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Network-level failure (DNS, refused connection, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not valid JSON, or a documented field was missing
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Specialized result type for panel API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the stable machine-readable code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::UnsupportedMethod(_) => "UNSUPPORTED_METHOD",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Returns true if the failure happened before a request was issued.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Config(_) | Self::UnsupportedMethod(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else if err.is_connect() {
            Self::Transport(format!("connection failed: {err}"))
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid endpoint URL: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}
