//! Context snapshot entities, as delivered by the portal UI.
//!
//! Everything except [`ChatMessage`] is read-only from the assistant's
//! perspective. Defaulting (empty collections, sentinel profile, unknown
//! event types) happens here, at deserialization, so composers never
//! see missing data.

pub mod announcement;
pub mod chat_message;
pub mod course;
pub mod event;
pub mod note;
pub mod profile;
pub mod snapshot;
pub mod ticket;

mod serde_helpers;

pub use announcement::{Announcement, Priority};
pub use chat_message::{ChatMessage, Role};
pub use course::{Course, CourseStatus, GradeRecord};
pub use event::{Event, EventKind};
pub use note::{Note, NoteAttachment};
pub use profile::Profile;
pub use snapshot::ContextSnapshot;
pub use ticket::{TicketReceipt, TicketRequest};
