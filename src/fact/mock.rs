//! Development-mode transport.
//!
//! Intercepts GETs to the configured endpoint and answers with a synthetic
//! lorem-ipsum sentence, so the app runs without reaching the real service.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::fact::error::TransportError;
use crate::fact::transport::{FactTransport, TransportResponse};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

const MIN_WORDS: usize = 4;
const MAX_WORDS: usize = 12;

enum Reply {
    Sentence(Mutex<StdRng>),
    Fixed { status: u16, body: Vec<u8> },
}

/// Mock transport bound to a single endpoint URL.
///
/// Requests to any other URL get a 404, mirroring an interceptor that only
/// knows one route.
pub struct MockTransport {
    url: String,
    reply: Reply,
    delay: Option<Duration>,
    requests: AtomicUsize,
}

impl MockTransport {
    /// Random sentences from OS entropy.
    pub fn sentences(url: impl Into<String>) -> Self {
        Self::with_reply(url, Reply::Sentence(Mutex::new(StdRng::from_entropy())))
    }

    /// Reproducible sentences.
    pub fn seeded(url: impl Into<String>, seed: u64) -> Self {
        Self::with_reply(url, Reply::Sentence(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Same status and body for every request.
    pub fn fixed(url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(
            url,
            Reply::Fixed {
                status,
                body: body.into(),
            },
        )
    }

    fn with_reply(url: impl Into<String>, reply: Reply) -> Self {
        Self {
            url: url.into(),
            reply,
            delay: None,
            requests: AtomicUsize::new(0),
        }
    }

    /// Hold every response for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of GETs received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn next_body(&self) -> (u16, Vec<u8>) {
        match &self.reply {
            Reply::Sentence(rng) => {
                let sentence = lorem_sentence(&mut *rng.lock());
                let body = serde_json::json!({ "text": sentence });
                (200, body.to_string().into_bytes())
            }
            Reply::Fixed { status, body } => (*status, body.clone()),
        }
    }
}

#[async_trait]
impl FactTransport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if url != self.url {
            tracing::debug!(url, "mock has no route for url");
            return Ok(TransportResponse::new(404, b"{}".to_vec()));
        }

        let (status, body) = self.next_body();
        Ok(TransportResponse::new(status, body))
    }
}

/// Capitalized sentence of random lorem words ending in a period.
pub fn lorem_sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(MIN_WORDS..=MAX_WORDS);
    let words: Vec<&str> = (0..count)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect();

    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get(..1) {
        let upper = first.to_uppercase();
        sentence.replace_range(..1, &upper);
    }
    sentence.push('.');
    sentence
}
