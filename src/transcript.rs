//! Session transcript boundary.
//!
//! The conversation store is an external collaborator: the core only
//! appends role-tagged messages and reads ordered history back when
//! enriching prompts. `InMemoryTranscript` is the reference
//! implementation, used by tests and by embedders without a store.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{ChatRole, ChatTurn};

/// Persistence collaborator for session transcripts.
pub trait TranscriptStore {
    /// Append one role-tagged message to a session's transcript.
    fn append(&mut self, session: Uuid, role: ChatRole, content: &str);

    /// The session's transcript in append order. Empty for unknown
    /// sessions.
    fn history(&self, session: Uuid) -> Vec<ChatTurn>;
}

/// In-memory transcript store.
#[derive(Debug, Default)]
pub struct InMemoryTranscript {
    sessions: HashMap<Uuid, Vec<ChatTurn>>,
}

impl InMemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TranscriptStore for InMemoryTranscript {
    fn append(&mut self, session: Uuid, role: ChatRole, content: &str) {
        self.sessions.entry(session).or_default().push(ChatTurn {
            role,
            content: content.to_string(),
        });
    }

    fn history(&self, session: Uuid) -> Vec<ChatTurn> {
        self.sessions.get(&session).cloned().unwrap_or_default()
    }
}
