//! Async responder that files a support ticket for escalated utterances.

use std::time::Duration;

use campus_assistant::{Assistant, Reply};
use campus_core::config::CampusConfig;
use campus_core::errors::{CampusResult, SupportError};
use campus_core::intent::Intent;
use campus_core::models::{ChatMessage, ContextSnapshot};
use campus_core::traits::ITicketSink;
use campus_observability::events;
use campus_session::{ChatSession, SessionManager};
use chrono::Utc;

use crate::http_sink::HttpTicketSink;
use crate::ticket::build_ticket_request;

/// Reply when a ticket could not be filed.
pub const TICKET_FAILURE_TEXT: &str = "I'm sorry, I couldn't reach the student support team \
right now. Please try again in a few minutes, or contact the support office directly.";

/// Wraps an [`Assistant`] and files a ticket whenever a turn escalates.
pub struct SupportAssistant<S> {
    assistant: Assistant,
    sink: S,
    timeout: Duration,
}

impl SupportAssistant<HttpTicketSink> {
    /// Build from config. Fails with `SupportError::NotConfigured` when the
    /// support extension is disabled or has no endpoint.
    pub fn from_config(config: &CampusConfig) -> CampusResult<Self> {
        if !config.support.enabled {
            return Err(SupportError::NotConfigured.into());
        }
        let sink = HttpTicketSink::from_config(&config.support)?;
        Ok(Self::new(
            Assistant::new(config.assistant.clone()),
            sink,
            Duration::from_millis(config.support.timeout_ms),
        ))
    }
}

impl<S: ITicketSink> SupportAssistant<S> {
    pub fn new(assistant: Assistant, sink: S, timeout: Duration) -> Self {
        Self {
            assistant,
            sink,
            timeout,
        }
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    /// Compose a reply. Escalations await the ticket call, bounded by the
    /// configured timeout; any failure yields [`TICKET_FAILURE_TEXT`].
    pub async fn reply(&self, utterance: &str, snapshot: &ContextSnapshot) -> Reply {
        let reply = self.assistant.reply(utterance, snapshot);
        if reply.intent != Intent::Escalation {
            return reply;
        }

        let request = build_ticket_request(utterance, snapshot, Utc::now());
        let outcome = tokio::time::timeout(self.timeout, self.sink.create_ticket(&request)).await;
        let text = match outcome {
            Ok(Ok(receipt)) => {
                events::ticket_created(&receipt.id, &receipt.status);
                format!("{}\n\nYour ticket number is {}.", reply.text, receipt.id)
            }
            Ok(Err(e)) => {
                events::ticket_failed(&e.to_string());
                TICKET_FAILURE_TEXT.to_string()
            }
            Err(_) => {
                let err = SupportError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                };
                events::ticket_failed(&err.to_string());
                TICKET_FAILURE_TEXT.to_string()
            }
        };
        Reply {
            intent: reply.intent,
            text,
        }
    }

    pub async fn respond(&self, utterance: &str, snapshot: &ContextSnapshot) -> String {
        self.reply(utterance, snapshot).await.text
    }

    /// Answer and append the user/assistant pair once the reply is ready.
    /// Blank utterances are ignored.
    pub async fn send(
        &self,
        session: &mut ChatSession,
        utterance: &str,
        snapshot: &ContextSnapshot,
    ) -> Option<ChatMessage> {
        if utterance.trim().is_empty() {
            return None;
        }
        let reply = self.reply(utterance, snapshot).await;
        if !session.append_turn(utterance, reply.text, reply.intent) {
            return None;
        }
        session.messages().last().cloned()
    }

    /// Like [`send`](Self::send), for a session held by a [`SessionManager`].
    /// No session lock is held while the ticket call is in flight.
    pub async fn send_in(
        &self,
        manager: &SessionManager,
        session_id: &str,
        utterance: &str,
        snapshot: &ContextSnapshot,
    ) -> Option<ChatMessage> {
        if utterance.trim().is_empty() {
            return None;
        }
        let reply = self.reply(utterance, snapshot).await;
        manager.create_session(session_id);
        if !manager.append_turn(session_id, utterance, reply.text, reply.intent) {
            return None;
        }
        manager
            .transcript(session_id)
            .and_then(|messages| messages.last().cloned())
    }
}
