//! The shared request transport all panel operations funnel through.
//!
//! Every operation in the client crates is one call to
//! [`PanelTransport::request`]: assemble the endpoint URL, merge the
//! account credentials into the parameters, send, decode the JSON body,
//! return it unchanged. There is no retry, no caching, and no status-code
//! classification; the panel embeds failure information in the JSON body
//! rather than in HTTP status codes.

use crate::config::{Credentials, PanelConfig};
use crate::error::{Error, Result};
use crate::observe::{RequestObserver, TracingObserver};
use crate::params::ParamSet;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use validator::Validate;

const USER_AGENT: &str = concat!("cac-core/", env!("CARGO_PKG_VERSION"));

/// HTTP verbs the panel API supports.
///
/// The set is closed: the panel only ever speaks GET and POST, so an
/// unsupported verb is unrepresentable once past the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Read-only query carrying parameters in the query string.
    Get,
    /// State-changing request carrying parameters as a form body.
    Post,
}

impl Verb {
    /// Returns the verb's wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(Error::UnsupportedMethod(other.to_string())),
        }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Self::GET,
            Verb::Post => Self::POST,
        }
    }
}

/// Builder for [`PanelTransport`].
#[derive(Clone)]
pub struct PanelTransportBuilder {
    credentials: Credentials,
    config: PanelConfig,
    observer: Option<Arc<dyn RequestObserver>>,
    user_agent: Option<String>,
}

impl PanelTransportBuilder {
    /// Create a builder for the production panel with the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: PanelConfig::new(),
            observer: None,
            user_agent: None,
        }
    }

    /// Replace the endpoint configuration.
    #[must_use]
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the base URL (primarily for tests and staging panels).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.request_timeout_secs = Some(seconds);
        self
    }

    /// Install a request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the transport.
    ///
    /// Performs no network I/O and no authentication handshake; bad
    /// credentials surface on the first request, as vendor-reported JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration fails validation or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<PanelTransport> {
        self.config.validate()?;

        let mut http = reqwest::Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));
        if let Some(timeout) = self.config.timeout() {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(PanelTransport {
            http,
            config: self.config,
            credentials: self.credentials,
            observer: self
                .observer
                .unwrap_or_else(|| Arc::new(TracingObserver)),
        })
    }
}

/// The shared panel transport.
///
/// Holds the credential pair, the validated endpoint configuration, and the
/// underlying HTTP handle. All of that state is immutable after
/// construction; the transport is `Clone` and safe to share across tasks.
#[derive(Clone)]
pub struct PanelTransport {
    http: reqwest::Client,
    config: PanelConfig,
    credentials: Credentials,
    observer: Arc<dyn RequestObserver>,
}

impl PanelTransport {
    /// Construct a transport for the production panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either credential is empty.
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        PanelTransportBuilder::new(Credentials::new(login, key)?).build()
    }

    /// Create a builder with the given credentials.
    #[must_use]
    pub fn builder(credentials: Credentials) -> PanelTransportBuilder {
        PanelTransportBuilder::new(credentials)
    }

    /// Returns the endpoint configuration.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Issue one request against an endpoint path and decode the JSON body.
    ///
    /// The credential pair is merged into `params` last (query string for
    /// GET, form body for POST). The response body is returned as decoded
    /// JSON regardless of HTTP status: the panel reports application errors
    /// inside the body, and those are the caller's to inspect.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the endpoint does not form a valid URL.
    /// - [`Error::Transport`] on network failure, propagated unretried.
    /// - [`Error::Decode`] if the body is not valid JSON.
    pub async fn request(&self, verb: Verb, endpoint: &str, params: ParamSet) -> Result<Value> {
        let url = self.config.endpoint_url(endpoint)?;
        let pairs = params.into_pairs_with_credentials(&self.credentials);

        self.observer.before_send(verb, &url);

        let request = match verb {
            Verb::Get => self.http.get(url).query(&pairs),
            Verb::Post => self.http.post(url).form(&pairs),
        };

        let response = request.send().await?;
        let body = response.text().await?;
        let value = serde_json::from_str::<Value>(&body)
            .map_err(|err| Error::Decode(format!("{endpoint}: {err}")))?;

        self.observer.after_decode(endpoint, &value);
        Ok(value)
    }
}
