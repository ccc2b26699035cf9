//! Credentials and endpoint configuration for the panel API.
//!
//! Constructing either type performs no network I/O; the panel does not
//! offer an authentication handshake, so credentials are only checked for
//! presence here and rejected (if wrong) by the vendor on the first request.

use crate::error::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default base URL of the panel API.
pub const DEFAULT_BASE_URL: &str = "https://panel.cloudatcost.com/api";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Account credentials attached to every outgoing request.
///
/// The panel authenticates each request individually through the `login`
/// (account email) and `key` (API key generated in the panel) parameters.
/// The key is held as a [`SecretString`] so it is redacted from `Debug`
/// output.
#[derive(Debug, Clone)]
pub struct Credentials {
    login: String,
    key: SecretString,
}

impl Credentials {
    /// Create credentials from a panel login and API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either value is empty.
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let login = login.into();
        let key = key.into();

        if login.is_empty() {
            return Err(Error::Config("login must not be empty".to_string()));
        }
        if key.is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }

        Ok(Self {
            login,
            key: SecretString::from(key),
        })
    }

    /// Returns the account login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the API key in the clear, for request assembly.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.expose_secret()
    }
}

/// Configuration for reaching the panel API.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PanelConfig {
    /// Base URL of the panel API
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version path segment inserted between the base URL and the endpoint
    #[validate(length(min = 1))]
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds; `None` leaves the transport default in
    /// force and a hung request blocks until the peer or OS gives up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl PanelConfig {
    /// Create a configuration pointing at the production panel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: None,
        }
    }

    /// Override the base URL (primarily for tests and staging panels).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the API version path segment.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Get the request timeout as a [`Duration`], if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Build the full URL for an endpoint path such as `/listservers.php`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the assembled URL does not parse.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let full = format!("{base}/{version}{endpoint}", version = self.api_version);
        Ok(Url::parse(&full)?)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new()
    }
}
