//! Asynchronous client for the CloudPRO operations.

use crate::models::BuildRequest;
use crate::Result;
use cac_core::client::{PanelTransport, PanelTransportBuilder, Verb};
use cac_core::config::{Credentials, PanelConfig};
use cac_core::id::ServerId;
use cac_core::observe::RequestObserver;
use cac_core::params::ParamSet;
use serde_json::Value;
use std::sync::Arc;

const USER_AGENT: &str = concat!("cac-cloudpro/", env!("CARGO_PKG_VERSION"));

const BUILD_ENDPOINT: &str = "/cloudpro/build.php";
const DELETE_ENDPOINT: &str = "/cloudpro/delete.php";
const RESOURCES_ENDPOINT: &str = "/cloudpro/resources.php";

/// Builder for [`CloudProClient`].
#[derive(Clone)]
pub struct CloudProClientBuilder {
    inner: PanelTransportBuilder,
}

impl CloudProClientBuilder {
    /// Create a builder for the production panel with the given credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        let inner = PanelTransportBuilder::new(credentials).with_user_agent(USER_AGENT);
        Self { inner }
    }

    /// Replace the endpoint configuration.
    #[must_use]
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.inner = self.inner.with_config(config);
        self
    }

    /// Override the base URL (primarily for tests and staging panels).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.with_base_url(base_url);
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.inner = self.inner.with_timeout(seconds);
        self
    }

    /// Install a request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.inner = self.inner.with_observer(observer);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`cac_core::Error::Config`] if the configuration fails
    /// validation.
    pub fn build(self) -> Result<CloudProClient> {
        let transport = self.inner.build()?;
        Ok(CloudProClient { transport })
    }
}

/// Asynchronous client for the CloudPRO operations.
///
/// These endpoints are only available to CloudPRO accounts; a base-tier
/// account gets a vendor-reported JSON error back.
#[derive(Clone)]
pub struct CloudProClient {
    transport: PanelTransport,
}

impl CloudProClient {
    /// Construct a client for the production panel.
    ///
    /// # Errors
    ///
    /// Returns [`cac_core::Error::Config`] if either credential is empty.
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        CloudProClientBuilder::new(Credentials::new(login, key)?).build()
    }

    /// Wrap an existing transport.
    #[must_use]
    pub const fn from_transport(transport: PanelTransport) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &PanelTransport {
        &self.transport
    }

    /// Provision a server against the account's resource pool.
    ///
    /// Returns the panel's build-status object, including the task the
    /// build was queued under.
    pub async fn build_server(&self, request: &BuildRequest) -> Result<Value> {
        self.transport
            .request(Verb::Post, BUILD_ENDPOINT, request.to_params())
            .await
    }

    /// Delete a server and return its resources to the pool.
    pub async fn delete_server(&self, sid: &ServerId) -> Result<Value> {
        let mut params = ParamSet::new();
        params.push("sid", sid);
        self.transport
            .request(Verb::Post, DELETE_ENDPOINT, params)
            .await
    }

    /// Query the account's purchased and used resources.
    ///
    /// Returns the resource-usage object as the panel sent it.
    pub async fn resources(&self) -> Result<Value> {
        self.transport
            .request(Verb::Get, RESOURCES_ENDPOINT, ParamSet::new())
            .await
    }
}
