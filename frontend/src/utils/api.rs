use crate::config;
use crate::form::submission::{SubmitError, Transport};
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use serde_json::Value;
use web_sys::RequestMode;

/// Posts quote requests to the lead webhook through the CORS relay.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookClient {
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Client for the configured relay + webhook pair
    pub fn from_config() -> Self {
        Self::new(config::get_submit_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, body: String) -> Result<Value, SubmitError> {
        let response = Request::post(&self.url)
            .mode(RequestMode::Cors)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            log::warn!("Webhook relay answered with status {}", response.status());
        }

        // the reply only matters for logging, but it still has to be JSON
        response.json::<Value>().await.map_err(reply_error)
    }
}

impl Transport for WebhookClient {
    fn post_json(&self, body: String) -> LocalBoxFuture<'_, Result<Value, SubmitError>> {
        Box::pin(self.send(body))
    }
}

fn network_error(e: GlooError) -> SubmitError {
    SubmitError::Network(e.to_string())
}

/// A reply that is not JSON is a decode failure, anything else is the network.
fn reply_error(e: GlooError) -> SubmitError {
    match e {
        GlooError::SerdeError(e) => SubmitError::Decode(e.to_string()),
        other => network_error(other),
    }
}
