use super::{ConfigError, SupportError};

/// Umbrella error for the campus assistant workspace.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("support desk error: {0}")]
    SupportError(#[from] SupportError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CampusResult<T> = Result<T, CampusError>;
