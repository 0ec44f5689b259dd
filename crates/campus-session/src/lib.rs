//! # campus-session
//!
//! Chat widget state: one append-only transcript per session.
//! Concurrent access to many sessions via `DashMap`.
//!
//! ## Modules
//!
//! - `context`: `ChatSession`, the transcript and its append rules
//! - `manager`: `SessionManager` with `DashMap` for concurrent access
//! - `analytics`: Per-session intent distribution and escalation counts
//! - `cleanup`: Idle and over-age session removal

pub mod analytics;
pub mod cleanup;
pub mod context;
pub mod manager;

pub use analytics::SessionAnalytics;
pub use cleanup::{cleanup_idle_sessions, cleanup_stale_sessions};
pub use context::ChatSession;
pub use manager::SessionManager;
