//! Structured log events for key assistant operations.
//!
//! Each function emits a `tracing` event with structured fields. Utterance
//! text is never logged.

/// Log a completed chat turn.
pub fn turn_completed(session_id: &str, intent: &str, transcript_len: usize) {
    tracing::info!(
        event = "turn_completed",
        session_id = %session_id,
        intent = %intent,
        transcript_len = transcript_len,
        "turn completed"
    );
}

/// Log an utterance routed to escalation.
pub fn escalation_triggered(session_id: &str, reason: &str) {
    tracing::info!(
        event = "escalation_triggered",
        session_id = %session_id,
        reason = %reason,
        "escalation triggered"
    );
}

/// Log a support ticket accepted by the support desk.
pub fn ticket_created(ticket_id: &str, status: &str) {
    tracing::info!(
        event = "ticket_created",
        ticket_id = %ticket_id,
        status = %status,
        "support ticket created"
    );
}

/// Log a failed or timed-out support ticket submission.
pub fn ticket_failed(reason: &str) {
    tracing::warn!(
        event = "ticket_failed",
        reason = %reason,
        "support ticket submission failed"
    );
}

/// Log an out-of-scope pattern that failed to compile and now matches nothing.
pub fn pattern_degraded(pattern: &str) {
    tracing::warn!(
        event = "pattern_degraded",
        pattern = %pattern,
        "out-of-scope pattern unavailable"
    );
}
