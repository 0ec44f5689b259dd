//! Ordered keyword rule table. First matching rule wins; rule order is
//! intent priority.

use campus_core::intent::Intent;

use crate::text::{contains_phrase, padded_words};

/// How a rule's keywords are tested against the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMode {
    /// Plain substring containment.
    Substring,
    /// Whole word or whole phrase only.
    WholeWord,
}

/// One row of the rule table: an intent and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub mode: KeywordMode,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// Test the rule against a normalized (lowercased, trimmed) utterance.
    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            KeywordMode::Substring => self.keywords.iter().any(|kw| text.contains(kw)),
            KeywordMode::WholeWord => {
                let padded = padded_words(text);
                self.keywords.iter().any(|kw| contains_phrase(&padded, kw))
            }
        }
    }
}

/// Keyword rules in priority order. Greeting words are short enough to
/// occur inside other words ("this", "they"), so they match whole words.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        mode: KeywordMode::WholeWord,
        keywords: &[
            "hi",
            "hello",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
        ],
    },
    IntentRule {
        intent: Intent::Help,
        mode: KeywordMode::Substring,
        keywords: &["help", "what can you", "how can you", "assist"],
    },
    IntentRule {
        intent: Intent::PersonalInfo,
        mode: KeywordMode::Substring,
        keywords: &[
            "my name",
            "who am i",
            "my profile",
            "about me",
            "my details",
            "my email",
            "my student id",
        ],
    },
    IntentRule {
        intent: Intent::Courses,
        mode: KeywordMode::Substring,
        keywords: &["course", "subject", "class", "semester", "study", "enrolled"],
    },
    IntentRule {
        intent: Intent::Grades,
        mode: KeywordMode::Substring,
        keywords: &[
            "grade",
            "mark",
            "score",
            "result",
            "performance",
            "progress",
            "gpa",
        ],
    },
    IntentRule {
        intent: Intent::Events,
        mode: KeywordMode::Substring,
        keywords: &[
            "event",
            "schedule",
            "deadline",
            "today",
            "tomorrow",
            "week",
            "due",
            "exam",
            "calendar",
            "assignment",
        ],
    },
    IntentRule {
        intent: Intent::Announcements,
        mode: KeywordMode::Substring,
        keywords: &["announcement", "news", "notification", "update", "notice"],
    },
    IntentRule {
        intent: Intent::Notes,
        mode: KeywordMode::Substring,
        keywords: &["note", "search", "find"],
    },
    IntentRule {
        intent: Intent::Thanks,
        mode: KeywordMode::Substring,
        keywords: &["thank"],
    },
];

/// First keyword rule matching the normalized utterance, if any.
pub fn match_keyword_rule(text: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.intent)
}

/// Classify a normalized utterance. Never returns `Intent::Escalation`;
/// the out-of-scope guard is the caller's job.
pub fn match_intent(text: &str) -> Intent {
    if let Some(intent) = match_keyword_rule(text) {
        return intent;
    }
    if text.contains('?') {
        return Intent::GenericQuestion;
    }
    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_is_in_priority_order() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ALL[..9].to_vec());
    }

    #[test]
    fn greeting_needs_whole_word() {
        assert_eq!(match_intent("hi there"), Intent::Greeting);
        assert_eq!(match_intent("good morning!"), Intent::Greeting);
        assert_ne!(match_intent("this week"), Intent::Greeting);
    }

    #[test]
    fn first_match_wins_across_rules() {
        // "course" (priority 4) beats "grade" (priority 5).
        assert_eq!(match_intent("grades for my course"), Intent::Courses);
    }

    #[test]
    fn question_mark_without_keywords_is_generic() {
        assert_eq!(match_intent("why is the sky blue?"), Intent::GenericQuestion);
        assert_eq!(match_intent("blah"), Intent::Fallback);
    }
}
