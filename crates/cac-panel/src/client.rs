//! Asynchronous client for the base-tier panel operations.

use crate::models::{PowerAction, RunMode};
use crate::Result;
use cac_core::client::{PanelTransport, PanelTransportBuilder, Verb};
use cac_core::config::{Credentials, PanelConfig};
use cac_core::error::Error;
use cac_core::id::ServerId;
use cac_core::observe::RequestObserver;
use cac_core::params::ParamSet;
use serde_json::Value;
use std::sync::Arc;

const USER_AGENT: &str = concat!("cac-panel/", env!("CARGO_PKG_VERSION"));

const LIST_SERVERS_ENDPOINT: &str = "/listservers.php";
const LIST_TEMPLATES_ENDPOINT: &str = "/listtemplates.php";
const LIST_TASKS_ENDPOINT: &str = "/listtasks.php";
const POWER_OP_ENDPOINT: &str = "/powerop.php";
const CONSOLE_ENDPOINT: &str = "/console.php";
const RENAME_SERVER_ENDPOINT: &str = "/renameserver.php";
const REVERSE_DNS_ENDPOINT: &str = "/rdns.php";
const RUN_MODE_ENDPOINT: &str = "/runmode.php";

/// Builder for [`PanelClient`].
#[derive(Clone)]
pub struct PanelClientBuilder {
    inner: PanelTransportBuilder,
}

impl PanelClientBuilder {
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
    /// Returns [`Error::Config`] if the configuration fails validation.
    pub fn build(self) -> Result<PanelClient> {
        let transport = self.inner.build()?;
        Ok(PanelClient { transport })
    }
}

/// Asynchronous client for the base-tier panel operations.
#[derive(Clone)]
pub struct PanelClient {
    transport: PanelTransport,
}

impl PanelClient {
    /// Construct a client for the production panel.
    ///
    /// Performs no network I/O; bad credentials surface on the first
    /// request as vendor-reported JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if either credential is empty.
    pub fn new(login: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        PanelClientBuilder::new(Credentials::new(login, key)?).build()
    }

    /// Wrap an existing transport.
    #[must_use]
    pub const fn from_transport(transport: PanelTransport) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport, the raw-body escape hatch for
    /// callers that need an undocumented endpoint or field.
    #[must_use]
    pub const fn transport(&self) -> &PanelTransport {
        &self.transport
    }

    /// List the account's servers.
    ///
    /// Returns the `data` array of server records as the panel sent them.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] if the response carries no `data` array.
    pub async fn list_servers(&self) -> Result<Vec<Value>> {
        self.data_array(LIST_SERVERS_ENDPOINT).await
    }

    /// List the OS templates available for provisioning.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] if the response carries no `data` array.
    pub async fn list_templates(&self) -> Result<Vec<Value>> {
        self.data_array(LIST_TEMPLATES_ENDPOINT).await
    }

    /// List the account's pending and recent panel tasks.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] if the response carries no `data` array.
    pub async fn list_tasks(&self) -> Result<Vec<Value>> {
        self.data_array(LIST_TASKS_ENDPOINT).await
    }

    /// Power the server on.
    pub async fn power_on(&self, sid: &ServerId) -> Result<Value> {
        self.power_operation(sid, PowerAction::PowerOn).await
    }

    /// Power the server off.
    ///
    /// The panel treats repeated power-off of a stopped server as a no-op;
    /// the client does not.
    pub async fn power_off(&self, sid: &ServerId) -> Result<Value> {
        self.power_operation(sid, PowerAction::PowerOff).await
    }

    /// Power cycle the server.
    pub async fn reset(&self, sid: &ServerId) -> Result<Value> {
        self.power_operation(sid, PowerAction::Reset).await
    }

    /// Fetch the web console URL for a server.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] if the response carries no `console` string.
    pub async fn console_url(&self, sid: &ServerId) -> Result<String> {
        let mut params = ParamSet::new();
        params.push("sid", sid);

        let mut body = self
            .transport
            .request(Verb::Post, CONSOLE_ENDPOINT, params)
            .await?;
        match body.get_mut("console").map(Value::take) {
            Some(Value::String(url)) => Ok(url),
            Some(_) => Err(Error::Decode(format!(
                "`console` field in {CONSOLE_ENDPOINT} response is not a string"
            ))),
            None => Err(Error::Decode(format!(
                "{CONSOLE_ENDPOINT} response is missing the `console` field"
            ))),
        }
    }

    /// Change the server's name label in the panel.
    pub async fn rename_server(&self, sid: &ServerId, name: &str) -> Result<Value> {
        let mut params = ParamSet::new();
        params.push("sid", sid);
        params.push("name", name);
        self.transport
            .request(Verb::Post, RENAME_SERVER_ENDPOINT, params)
            .await
    }

    /// Change the server's reverse-DNS hostname.
    pub async fn change_hostname(&self, sid: &ServerId, hostname: &str) -> Result<Value> {
        let mut params = ParamSet::new();
        params.push("sid", sid);
        params.push("hostname", hostname);
        self.transport
            .request(Verb::Post, REVERSE_DNS_ENDPOINT, params)
            .await
    }

    /// Set the server's idle policy.
    pub async fn set_run_mode(&self, sid: &ServerId, mode: RunMode) -> Result<Value> {
        let mut params = ParamSet::new();
        params.push("sid", sid);
        params.push("mode", mode);
        self.transport
            .request(Verb::Post, RUN_MODE_ENDPOINT, params)
            .await
    }

    async fn power_operation(&self, sid: &ServerId, action: PowerAction) -> Result<Value> {
        let mut params = ParamSet::new();
        params.push("sid", sid);
        params.push("action", action);
        self.transport
            .request(Verb::Post, POWER_OP_ENDPOINT, params)
            .await
    }

    async fn data_array(&self, endpoint: &str) -> Result<Vec<Value>> {
        let mut body = self
            .transport
            .request(Verb::Get, endpoint, ParamSet::new())
            .await?;
        match body.get_mut("data").map(Value::take) {
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(Error::Decode(format!(
                "`data` field in {endpoint} response is not an array"
            ))),
            None => Err(Error::Decode(format!(
                "{endpoint} response is missing the `data` field"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> PanelClient {
        PanelClientBuilder::new(Credentials::new("apiuser", "secret").unwrap())
            .with_base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn list_servers_returns_the_data_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/listservers.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "data": [{"sid": "123", "status": "Powered On"}]
            })))
            .mount(&server)
            .await;

        let servers = test_client(&server).list_servers().await.unwrap();
        assert_eq!(servers, vec![json!({"sid": "123", "status": "Powered On"})]);
    }

    #[tokio::test]
    async fn list_templates_and_tasks_share_the_extraction() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/listtemplates.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"ce_id": "26", "name": "CentOS 7 64bit"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/listtasks.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let templates = client.list_templates().await.unwrap();
        assert_eq!(templates[0]["name"], "CentOS 7 64bit");
        assert!(client.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_data_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/listservers.php"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(json!({"status": "error", "error_description": "bad key"})))
            .mount(&server)
            .await;

        let err = test_client(&server).list_servers().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("/listservers.php"));
    }

    #[tokio::test]
    async fn non_array_data_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/listtasks.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "none"})))
            .mount(&server)
            .await;

        let err = test_client(&server).list_tasks().await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn power_on_posts_sid_and_action() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/powerop.php"))
            .and(body_string_contains("sid=123"))
            .and(body_string_contains("action=poweron"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "action": "poweron",
                "taskid": 5_551_212
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = test_client(&server)
            .power_on(&ServerId::new("123"))
            .await
            .unwrap();
        assert_eq!(status["status"], "ok");
        assert_eq!(status["taskid"], 5_551_212);
    }

    #[tokio::test]
    async fn reset_and_power_off_use_their_wire_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/powerop.php"))
            .and(body_string_contains("action=reset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/powerop.php"))
            .and(body_string_contains("action=poweroff"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let sid = ServerId::new("123");
        client.reset(&sid).await.unwrap();
        client.power_off(&sid).await.unwrap();
    }

    #[tokio::test]
    async fn console_url_extracts_the_console_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/console.php"))
            .and(body_string_contains("sid=123"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(json!({"console": "https://example/console/abc"})))
            .mount(&server)
            .await;

        let url = test_client(&server)
            .console_url(&ServerId::new("123"))
            .await
            .unwrap();
        assert_eq!(url, "https://example/console/abc");
    }

    #[tokio::test]
    async fn missing_console_field_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/console.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "error"})))
            .mount(&server)
            .await;

        let err = test_client(&server)
            .console_url(&ServerId::new("123"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn rename_and_rdns_and_runmode_post_their_params() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/renameserver.php"))
            .and(body_string_contains("sid=123"))
            .and(body_string_contains("name=web-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/rdns.php"))
            .and(body_string_contains("hostname=web-01.example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/runmode.php"))
            .and(body_string_contains("mode=safe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let sid = ServerId::new("123");
        client.rename_server(&sid, "web-01").await.unwrap();
        client
            .change_hostname(&sid, "web-01.example.com")
            .await
            .unwrap();
        client.set_run_mode(&sid, RunMode::Safe).await.unwrap();
    }

    #[tokio::test]
    async fn vendor_error_body_passes_through_power_operations() {
        let server = MockServer::start().await;
        let error_body = json!({"status": "error", "error_description": "invalid sid"});
        Mock::given(method("POST"))
            .and(path("/v1/powerop.php"))
            .respond_with(ResponseTemplate::new(412).set_body_json(error_body.clone()))
            .mount(&server)
            .await;

        let status = test_client(&server)
            .power_on(&ServerId::new("nope"))
            .await
            .unwrap();
        assert_eq!(status, error_body);
    }
}
