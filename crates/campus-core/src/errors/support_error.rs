/// Errors from the support-ticket extension.
#[derive(Debug, thiserror::Error)]
pub enum SupportError {
    #[error("support desk is not configured")]
    NotConfigured,

    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("ticket request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("ticket rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid ticket response: {reason}")]
    InvalidResponse { reason: String },
}
