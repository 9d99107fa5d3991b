//! Model-provider boundary.
//!
//! The core requires, per provider identifier, a client capable of one
//! synchronous chat-style completion. Providers must surface rate-limit
//! and quota conditions in their error messages so the dispatcher can
//! apply its backoff heuristic.

pub mod groq;

pub use groq::GroqClient;

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Cannot reach provider at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Provider returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Missing API key for {0}")]
    MissingCredentials(String),
}

/// Chat-completion client abstraction (allows mocking).
///
/// One synchronous call: system message, user message, sampling
/// parameters in, generated text out. Implementations must be safe for
/// sequential reuse; thread safety is not required by the core.
pub trait ChatCompletion {
    fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ProviderError>;
}

/// Registered provider clients, keyed by provider identifier.
///
/// Clients are constructed once at session start and reused for every
/// tier attempt. A tier whose provider has no registered client is
/// skipped by the dispatcher.
#[derive(Default)]
pub struct ProviderRegistry {
    clients: HashMap<String, Box<dyn ChatCompletion>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: impl Into<String>, client: Box<dyn ChatCompletion>) {
        self.clients.insert(provider.into(), client);
    }

    pub fn get(&self, provider: &str) -> Option<&dyn ChatCompletion> {
        self.clients.get(provider).map(|c| c.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
