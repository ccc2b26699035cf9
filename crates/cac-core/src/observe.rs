//! Request lifecycle observation hooks.
//!
//! Observers are notified at two fixed extension points: immediately before
//! a request is sent, and after its body has been decoded. They are never
//! required for correctness; the transport behaves identically with the
//! no-op observer installed.

use crate::client::Verb;
use url::Url;

/// Observation hooks around the request lifecycle.
#[cfg_attr(test, mockall::automock)]
pub trait RequestObserver: Send + Sync {
    /// Called immediately before a request is sent.
    fn before_send(&self, verb: Verb, url: &Url);

    /// Called after the response body has been decoded.
    fn after_decode(&self, endpoint: &str, body: &serde_json::Value);
}

/// Default observer emitting `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn before_send(&self, verb: Verb, url: &Url) {
        tracing::debug!(%verb, %url, "sending panel request");
    }

    fn after_decode(&self, endpoint: &str, body: &serde_json::Value) {
        tracing::debug!(
            endpoint,
            status = body.get("status").and_then(serde_json::Value::as_str),
            "decoded panel response"
        );
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn before_send(&self, _verb: Verb, _url: &Url) {}

    fn after_decode(&self, _endpoint: &str, _body: &serde_json::Value) {}
}
