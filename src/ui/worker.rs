//! Runs fetches off the UI thread.
//!
//! Each fetch is a tokio task whose result is posted back to the UI loop as
//! `AppEvent::FactFetched`. At most one task is kept; dropping the worker
//! aborts it so nothing outlives the screen.

use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::fact::FactClient;
use crate::ui::events::AppEvent;

pub struct FactWorker {
    client: FactClient,
    runtime: Handle,
    events: Sender<AppEvent>,
    in_flight: Option<JoinHandle<()>>,
}

impl FactWorker {
    pub fn new(client: FactClient, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            runtime,
            events,
            in_flight: None,
        }
    }

    pub fn client(&self) -> &FactClient {
        &self.client
    }

    /// Start a fetch tagged with `generation`, aborting any previous one.
    pub fn spawn(&mut self, generation: u64) {
        self.cancel();

        let client = self.client.clone();
        let events = self.events.clone();
        tracing::debug!(generation, "Starting fact fetch");
        let handle = self.runtime.spawn(async move {
            let result = client.fetch_fact().await;
            if events
                .send(AppEvent::FactFetched { generation, result })
                .is_err()
            {
                tracing::trace!(generation, "Fetch result dropped (UI gone)");
            }
        });
        self.in_flight = Some(handle);
    }

    /// Abort the outstanding fetch, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                tracing::debug!("Aborting in-flight fetch");
                handle.abort();
            }
        }
    }
}

impl Drop for FactWorker {
    fn drop(&mut self) {
        self.cancel();
    }
}
