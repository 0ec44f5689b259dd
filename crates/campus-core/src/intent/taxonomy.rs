use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse category of a student's request, in matching priority order.
/// `Escalation` is not matched by keyword; the out-of-scope guard selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Help,
    PersonalInfo,
    Courses,
    Grades,
    Events,
    Announcements,
    Notes,
    Thanks,
    GenericQuestion,
    Fallback,
    Escalation,
}

impl Intent {
    /// Total number of intent types.
    pub const COUNT: usize = 12;

    /// All variants, keyword-matched intents first in priority order.
    pub const ALL: [Intent; 12] = [
        Self::Greeting,
        Self::Help,
        Self::PersonalInfo,
        Self::Courses,
        Self::Grades,
        Self::Events,
        Self::Announcements,
        Self::Notes,
        Self::Thanks,
        Self::GenericQuestion,
        Self::Fallback,
        Self::Escalation,
    ];

    /// Stable snake_case label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Help => "help",
            Self::PersonalInfo => "personal_info",
            Self::Courses => "courses",
            Self::Grades => "grades",
            Self::Events => "events",
            Self::Announcements => "announcements",
            Self::Notes => "notes",
            Self::Thanks => "thanks",
            Self::GenericQuestion => "generic_question",
            Self::Fallback => "fallback",
            Self::Escalation => "escalation",
        }
    }

    /// Intents whose response can be narrowed to a single course.
    pub fn is_course_scoped(&self) -> bool {
        matches!(self, Self::Courses | Self::Grades | Self::Notes)
    }

    /// Intents whose response reads the context snapshot.
    pub fn reads_context(&self) -> bool {
        matches!(
            self,
            Self::PersonalInfo
                | Self::Courses
                | Self::Grades
                | Self::Events
                | Self::Announcements
                | Self::Notes
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
