//! Top-level intent matching and second-level routing.

pub mod routing;
pub mod rules;

pub use routing::{AnnouncementRoute, CourseRoute, EventRoute, GradeRoute, NoteRoute};
pub use rules::{match_intent, match_keyword_rule, IntentRule, KeywordMode, INTENT_RULES};
