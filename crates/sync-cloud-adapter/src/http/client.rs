/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{Result, SyncCloudError};
use crate::types::Envelope;

/// Default management API address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5244";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the sync cloud management API
#[derive(Debug, Clone)]
pub struct SyncCloudClient {
    http_client: Client,
    base_url: Url,
}

impl SyncCloudClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let mut base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(SyncCloudError::Config(format!(
                "base url cannot carry paths: {}",
                config.base_url
            )));
        }
        // Endpoints are joined relative to the base so path prefixes survive
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for an API endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and unwrap the response envelope
    pub(crate) async fn send_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Result<Option<T>> {
        debug!(endpoint, "sending request");
        let response = builder.send().await.map_err(|err| {
            let err = SyncCloudError::from(err);
            warn!(
                endpoint,
                transport = err.is_transport(),
                error = %err,
                "request failed before response"
            );
            err
        })?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            warn!(endpoint, status = status.as_u16(), %message, "request rejected");
            return Err(SyncCloudError::api_error(status, message));
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|err| {
            warn!(endpoint, error = %err, "malformed response envelope");
            SyncCloudError::InvalidResponse(format!("{endpoint}: {err}"))
        })?;
        envelope.into_result().inspect_err(|err| {
            warn!(
                endpoint,
                transport = err.is_transport(),
                error = %err,
                "request reported failure"
            );
        })
    }
}
