//! Per-intent response composers. Each is a pure function of the compose
//! context; nothing here mutates state or fails.

pub mod announcements;
pub mod canned;
pub mod courses;
pub mod events;
pub mod grades;
pub mod notes;
pub mod profile;

use campus_core::config::AssistantConfig;
use campus_core::models::{ContextSnapshot, Course};
use campus_core::traits::IRandomSource;
use chrono::NaiveDate;

/// Everything a composer may read for one turn.
pub struct ComposeContext<'a> {
    /// Lowercased, trimmed utterance.
    pub text: &'a str,
    pub snapshot: &'a ContextSnapshot,
    pub display_name: &'a str,
    pub today: NaiveDate,
    pub config: &'a AssistantConfig,
    pub random: &'a dyn IRandomSource,
    /// Course the utterance refers to, for course-scoped intents.
    pub course: Option<&'a Course>,
}

/// Render up to `cap` items as bullet lines, followed by "...and N more"
/// when the list was cut.
pub(crate) fn bullet_list<T>(items: &[T], cap: usize, render: impl Fn(&T) -> String) -> String {
    let mut lines: Vec<String> = items
        .iter()
        .take(cap)
        .map(|item| format!("• {}", render(item)))
        .collect();
    if items.len() > cap {
        lines.push(format!("...and {} more", items.len() - cap));
    }
    lines.join("\n")
}

/// "1 course", "3 courses".
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Whole scores print without decimals, others with one.
pub(crate) fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}
