//! Fact client: one GET against a fixed endpoint, normalized to a `Fact`
//! or a `FetchError`.
//!
//! The transport is injected at construction time:
//! - `HttpTransport` - real network via reqwest
//! - `MockTransport` - development stand-in with synthetic sentences

mod client;
mod error;
mod mock;
mod transport;

use std::fmt;

pub use client::FactClient;
pub use error::{FetchError, TransportError, GENERIC_ERROR_MESSAGE};
pub use mock::{lorem_sentence, MockTransport};
pub use transport::{FactTransport, HttpTransport, TransportResponse};

/// Natural-language text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact(String);

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
