//! SessionManager: concurrent per-session access via DashMap.

use campus_assistant::Assistant;
use campus_core::intent::Intent;
use campus_core::models::{ChatMessage, ContextSnapshot};
use dashmap::DashMap;
use std::sync::Arc;

use crate::analytics::SessionAnalytics;
use crate::context::ChatSession;

/// Thread-safe session manager using `DashMap` for concurrent access.
///
/// Turns within one session are serialized by the shard lock held for the
/// duration of `send`.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<DashMap<String, ChatSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Create a new session and return its ID. An existing session with the
    /// same ID is kept.
    pub fn create_session(&self, session_id: impl Into<String>) -> String {
        let session_id = session_id.into();
        self.sessions
            .entry(session_id.clone())
            .or_insert_with(|| ChatSession::new(session_id.clone()));
        session_id
    }

    /// Get a session by ID (cloned snapshot).
    pub fn get_session(&self, session_id: &str) -> Option<ChatSession> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    pub fn remove_session(&self, session_id: &str) -> Option<ChatSession> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Answer an utterance in a session, creating the session if needed.
    /// Returns a copy of the assistant message, or `None` for blank input.
    pub fn send(
        &self,
        session_id: &str,
        assistant: &Assistant,
        utterance: &str,
        snapshot: &ContextSnapshot,
    ) -> Option<ChatMessage> {
        let _span = campus_observability::turn_span!(session_id).entered();
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| ChatSession::new(session_id));
        entry.send(assistant, utterance, snapshot).cloned()
    }

    /// Append a pre-composed turn. Returns false if the session doesn't
    /// exist or the utterance is blank.
    pub fn append_turn(&self, session_id: &str, utterance: &str, response: String, intent: Intent) -> bool {
        match self.sessions.get_mut(session_id) {
            Some(mut session) => session.append_turn(utterance, response, intent),
            None => false,
        }
    }

    /// Copy of a session's transcript.
    pub fn transcript(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        self.sessions
            .get(session_id)
            .map(|s| s.messages().to_vec())
    }

    /// Analytics summed over every live session.
    pub fn aggregate_analytics(&self) -> SessionAnalytics {
        let mut total = SessionAnalytics::default();
        for session in self.sessions.iter() {
            total.merge(session.analytics());
        }
        total
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get all session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

#[cfg(test)]
impl SessionManager {
    /// Shift a live session's last activity into the past.
    pub(crate) fn backdate(&self, session_id: &str, by: chrono::Duration) {
        if let Some(mut session) = self.sessions.get_mut(session_id) {
            session.last_activity -= by;
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
