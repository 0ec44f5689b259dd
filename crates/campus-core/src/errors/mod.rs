//! Error handling. One error enum per subsystem, `thiserror` only.

pub mod campus_error;
pub mod config_error;
pub mod support_error;

pub use campus_error::{CampusError, CampusResult};
pub use config_error::ConfigError;
pub use support_error::SupportError;
