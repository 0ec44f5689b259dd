//! # campus-support
//!
//! Optional support-desk extension. When an utterance escalates, a ticket
//! is filed through an [`ITicketSink`](campus_core::traits::ITicketSink)
//! under a hard timeout; the chat always gets exactly one reply.
//!
//! ## Modules
//!
//! - `http_sink`: `HttpTicketSink`, reqwest client with retry and backoff
//! - `ticket`: builds the ticket payload from an utterance and snapshot
//! - `assistant`: `SupportAssistant`, the async responder

pub mod assistant;
pub mod http_sink;
pub mod ticket;

pub use assistant::{SupportAssistant, TICKET_FAILURE_TEXT};
pub use http_sink::{HttpTicketSink, HttpTicketSinkConfig};
pub use ticket::build_ticket_request;
