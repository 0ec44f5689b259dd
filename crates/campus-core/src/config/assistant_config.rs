use serde::{Deserialize, Serialize};

use super::defaults;

/// Assistant behaviour: list caps and matching heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Maximum course titles listed for a status filter.
    pub course_list_cap: usize,
    /// Maximum events listed for a date window.
    pub event_list_cap: usize,
    /// Maximum note titles listed for a search, favorites or course filter.
    pub note_list_cap: usize,
    /// Maximum notes listed when no search term was given.
    pub recent_note_cap: usize,
    /// Maximum announcement titles listed for unread/important filters.
    pub announcement_list_cap: usize,
    /// A course title word must be longer than this to resolve a course by word.
    pub min_entity_word_len: usize,
    /// Escalate utterances that matched no keyword and exceed this many
    /// characters. Disabled when unset.
    pub escalate_unmatched_over_chars: Option<usize>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            course_list_cap: defaults::DEFAULT_COURSE_LIST_CAP,
            event_list_cap: defaults::DEFAULT_EVENT_LIST_CAP,
            note_list_cap: defaults::DEFAULT_NOTE_LIST_CAP,
            recent_note_cap: defaults::DEFAULT_RECENT_NOTE_CAP,
            announcement_list_cap: defaults::DEFAULT_ANNOUNCEMENT_LIST_CAP,
            min_entity_word_len: defaults::DEFAULT_MIN_ENTITY_WORD_LEN,
            escalate_unmatched_over_chars: None,
        }
    }
}
