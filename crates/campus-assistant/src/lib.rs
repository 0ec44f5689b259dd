//! # campus-assistant
//!
//! The decision procedure behind the portal's chat widget. One pass per
//! utterance: guard → classify → resolve → compose.
//!
//! ## Architecture
//!
//! ```text
//! Assistant
//! ├── Escalation guard (regex patterns, runs first)
//! ├── Intent matcher
//! │   ├── Rule table (ordered, first match wins)
//! │   └── Sub-routing (per-intent second-level keywords)
//! ├── Course resolver (title → code → long title word)
//! └── Composers (one per intent, pure functions of the snapshot)
//! ```

pub mod clock;
pub mod compose;
pub mod display_name;
pub mod engine;
pub mod entity;
pub mod escalation;
pub mod intent;
pub mod random;
pub mod text;

pub use clock::{FixedClock, SystemClock};
pub use display_name::resolve_display_name;
pub use engine::{Assistant, Reply};
pub use entity::resolve_course;
pub use escalation::is_out_of_scope;
pub use intent::{match_intent, IntentRule, INTENT_RULES};
pub use random::{FixedRandom, ThreadRandom};
