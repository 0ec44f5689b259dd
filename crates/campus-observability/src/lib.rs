//! # campus-observability
//!
//! Structured tracing for the campus assistant: subscriber setup, span
//! definitions, and one helper per notable event (turn completed,
//! escalation, ticket outcome, degraded detector).

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
