//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use catfact::config::{Config, EndpointConfig};
use catfact::fact::{FactClient, FactTransport, MockTransport};
use catfact::ui::app::App;
use catfact::ui::events::AppEvent;
use catfact::ui::worker::FactWorker;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub const FACT_PATH: &str = "/facts/random?animal_type=cat&amount=1";

pub fn endpoint(base_url: &str) -> EndpointConfig {
    EndpointConfig {
        base_url: base_url.to_string(),
        path: FACT_PATH.to_string(),
    }
}

/// Endpoint the in-process mock transport answers on.
pub fn mock_endpoint() -> EndpointConfig {
    endpoint("http://mock.local")
}

/// Mock transport that always returns `status` and `body`.
pub fn fixed_transport(status: u16, body: &str) -> Arc<MockTransport> {
    Arc::new(MockTransport::fixed(
        mock_endpoint().url(),
        status,
        body.as_bytes().to_vec(),
    ))
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// An `App` wired to a real tokio runtime, with the event channel exposed so
/// tests can step the loop by hand.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn new(transport: Arc<dyn FactTransport>, endpoint: &EndpointConfig) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let (tx, rx) = mpsc::channel();
        let client = FactClient::new(transport, endpoint);
        let worker = FactWorker::new(client, runtime.handle().clone(), tx);
        Self {
            app: App::new(worker),
            events: rx,
            runtime,
        }
    }

    pub fn with_mock(transport: Arc<dyn FactTransport>) -> Self {
        Self::new(transport, &mock_endpoint())
    }

    /// Wait for the next fetch result and feed it to the app.
    ///
    /// Returns `Some(applied)` or `None` on timeout.
    pub fn pump(&mut self, timeout: Duration) -> Option<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::FactFetched { generation, result }) => {
                    return Some(self.app.on_fetch_complete(generation, result));
                }
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    /// Raw next fetch event without applying it.
    pub fn next_fetch_event(&self, timeout: Duration) -> Option<(u64, AppEvent)> {
        match self.events.recv_timeout(timeout) {
            Ok(event @ AppEvent::FactFetched { generation, .. }) => Some((generation, event)),
            _ => None,
        }
    }
}

pub const WAIT: Duration = Duration::from_secs(5);
