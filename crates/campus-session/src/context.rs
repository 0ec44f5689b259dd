//! ChatSession: the append-only transcript of one chat widget.

use campus_assistant::Assistant;
use campus_core::errors::CampusResult;
use campus_core::intent::Intent;
use campus_core::models::{ChatMessage, ContextSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::SessionAnalytics;

/// One conversation. Messages are only ever appended, in pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    #[serde(default)]
    analytics: SessionAnalytics,
}

impl ChatSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            created_at: now,
            last_activity: now,
            messages: Vec::new(),
            analytics: SessionAnalytics::default(),
        }
    }

    /// A session with a random id.
    pub fn anonymous() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    /// Answer one utterance and append the user/assistant pair.
    ///
    /// Blank utterances are ignored: nothing is appended and `None` is
    /// returned. Otherwise returns the appended assistant message.
    pub fn send(
        &mut self,
        assistant: &Assistant,
        utterance: &str,
        snapshot: &ContextSnapshot,
    ) -> Option<&ChatMessage> {
        if utterance.trim().is_empty() {
            return None;
        }
        let reply = assistant.reply(utterance, snapshot);
        if !self.append_turn(utterance, reply.text, reply.intent) {
            return None;
        }
        self.messages.last()
    }

    /// Append a user message and exactly one assistant message.
    ///
    /// Returns false, appending nothing, if the utterance is blank.
    pub fn append_turn(&mut self, utterance: &str, response: String, intent: Intent) -> bool {
        if utterance.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::user(utterance));
        self.messages.push(ChatMessage::assistant(response));
        self.analytics.record_intent(intent);
        self.last_activity = Utc::now();

        if intent == Intent::Escalation {
            campus_observability::events::escalation_triggered(&self.session_id, "out_of_scope");
        }
        campus_observability::events::turn_completed(
            &self.session_id,
            intent.as_str(),
            self.messages.len(),
        );
        true
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn analytics(&self) -> &SessionAnalytics {
        &self.analytics
    }

    /// Number of completed turns.
    pub fn turn_count(&self) -> usize {
        self.messages.len() / 2
    }

    /// Transcript as a JSON array of messages.
    pub fn to_json(&self) -> CampusResult<String> {
        Ok(serde_json::to_string(&self.messages)?)
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }

    /// Duration since session creation.
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.created_at
    }
}
