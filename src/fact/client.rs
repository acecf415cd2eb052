use serde_json::Value;
use std::sync::Arc;

use crate::config::{Config, EndpointConfig};
use crate::fact::error::{FetchError, TransportError};
use crate::fact::mock::MockTransport;
use crate::fact::transport::{FactTransport, HttpTransport};
use crate::fact::Fact;

/// Fetches one fact per call from a fixed endpoint.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FactClient {
    transport: Arc<dyn FactTransport>,
    url: String,
}

impl FactClient {
    pub fn new(transport: Arc<dyn FactTransport>, endpoint: &EndpointConfig) -> Self {
        Self {
            transport,
            url: endpoint.url(),
        }
    }

    /// Builds the client with the transport selected by `config.mock`.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let url = config.endpoint.url();
        let transport: Arc<dyn FactTransport> = if config.mock.enabled {
            match config.mock.seed {
                Some(seed) => Arc::new(MockTransport::seeded(url, seed)),
                None => Arc::new(MockTransport::sentences(url)),
            }
        } else {
            Arc::new(HttpTransport::new(&config.http)?)
        };
        tracing::info!(transport = transport.name(), "Fact client ready");
        Ok(Self::new(transport, &config.endpoint))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// GET the endpoint, require status 200, and extract the `text` field.
    pub async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        let response = self.transport.get(&self.url).await?;
        if response.status != 200 {
            return Err(FetchError::Status {
                code: response.status,
            });
        }

        let fact = parse_fact(&response.body)?;
        tracing::info!("Got a new fact: {}", fact);
        Ok(fact)
    }
}

fn parse_fact(body: &[u8]) -> Result<Fact, FetchError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        reason: format!("body is not JSON: {}", e),
    })?;

    match value.get("text") {
        Some(Value::String(text)) => Ok(Fact::new(text.clone())),
        Some(other) => Err(FetchError::Decode {
            reason: format!("`text` is not a string: {}", other),
        }),
        None => Err(FetchError::Decode {
            reason: "missing `text` field".to_string(),
        }),
    }
}
