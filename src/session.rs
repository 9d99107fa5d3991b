//! Per-session mutable state.
//!
//! Everything the core mutates lives here, owned by the caller: one
//! `SessionContext` per user session, constructed at session start and
//! dropped (or reset) when the session ends. Nothing in it is shared
//! across sessions.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::knowledge::KnowledgeBase;
use crate::analysis::rate_limit::RateLimitState;

/// Mutable state owned by one user session.
pub struct SessionContext {
    pub id: Uuid,
    pub rate: RateLimitState,
    pub knowledge: KnowledgeBase,
    /// Per-model success counters, keyed by `"<provider>/<model>"`.
    pub models_used: HashMap<String, u32>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// Construct with an explicit session-start instant.
    pub fn started_at(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            rate: RateLimitState::new(now),
            knowledge: KnowledgeBase::new(),
            models_used: HashMap::new(),
        }
    }

    /// Reinitialize to the session-start state, keeping the session id.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.rate = RateLimitState::new(now);
        self.knowledge = KnowledgeBase::new();
        self.models_used.clear();
    }

    /// Count one successful generation against the named model.
    pub fn record_model_use(&mut self, model: &str) {
        *self.models_used.entry(model.to_string()).or_insert(0) += 1;
    }

    pub fn model_use_count(&self, model: &str) -> u32 {
        self.models_used.get(model).copied().unwrap_or(0)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
