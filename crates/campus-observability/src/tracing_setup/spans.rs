//! Span definitions per operation: chat turn and ticket submission.

/// Create a span covering one chat turn.
#[macro_export]
macro_rules! turn_span {
    ($session_id:expr) => {
        tracing::info_span!("campus.turn", session_id = %$session_id)
    };
}

/// Create a span covering one support ticket submission.
#[macro_export]
macro_rules! ticket_span {
    ($endpoint:expr) => {
        tracing::info_span!("campus.ticket", endpoint = %$endpoint)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TURN: &str = "campus.turn";
    pub const TICKET: &str = "campus.ticket";
}
