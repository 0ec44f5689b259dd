//! # campus-core
//!
//! Foundation crate for the campus assistant.
//! Defines the context snapshot types, the intent taxonomy, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CampusConfig;
pub use errors::{CampusError, CampusResult};
pub use intent::Intent;
pub use models::{
    Announcement, ChatMessage, ContextSnapshot, Course, CourseStatus, Event, EventKind, Note,
    Priority, Profile, Role,
};
