//! Pluggable transport used by the fact client.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::fact::error::TransportError;

/// Raw response as seen by the client: status plus undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET.
///
/// Chosen once at construction time. The real service and the development
/// mock both implement this, and tests can substitute their own.
#[async_trait]
pub trait FactTransport: Send + Sync {
    /// Returns the name of this transport for logging.
    fn name(&self) -> &'static str;

    /// Issue a GET and return status and body.
    ///
    /// Non-200 statuses are not errors at this level.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Transport backed by `reqwest`.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FactTransport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if status != 200 {
            // A non-200 status is the failure itself; keep it even if the body read fails.
            let body = match response.bytes().await {
                Ok(body) => body.to_vec(),
                Err(e) => {
                    tracing::debug!(url, status, error = %e, "error body unreadable");
                    Vec::new()
                }
            };
            return Ok(TransportResponse::new(status, body));
        }
        let body = response.bytes().await?;
        tracing::debug!(url, status, bytes = body.len(), "GET completed");
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
