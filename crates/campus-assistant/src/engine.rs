//! The assistant: one synchronous pass per utterance.

use campus_core::config::AssistantConfig;
use campus_core::intent::Intent;
use campus_core::models::ContextSnapshot;
use campus_core::traits::{IClock, IRandomSource};
use tracing::debug;

use crate::clock::SystemClock;
use crate::compose::{self, ComposeContext};
use crate::display_name::resolve_display_name;
use crate::entity::resolve_course;
use crate::escalation;
use crate::intent::{match_keyword_rule, routing};
use crate::random::ThreadRandom;
use crate::text::normalize;

/// A composed response together with the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// Rule-based campus assistant.
///
/// Holds no per-conversation state; the same instance can answer any
/// number of sessions.
pub struct Assistant {
    config: AssistantConfig,
    random: Box<dyn IRandomSource>,
    clock: Box<dyn IClock>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(AssistantConfig::default())
    }
}

impl Assistant {
    pub fn new(config: AssistantConfig) -> Self {
        for pattern in escalation::detector_health() {
            campus_observability::events::pattern_degraded(pattern);
        }
        Self {
            config,
            random: Box::new(ThreadRandom),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_random(mut self, random: impl IRandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn with_clock(mut self, clock: impl IClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Intent for an utterance, escalation included.
    pub fn classify(&self, utterance: &str) -> Intent {
        self.classify_normalized(&normalize(utterance))
    }

    fn classify_normalized(&self, text: &str) -> Intent {
        if let Some(pattern) = escalation::first_match(text) {
            debug!(pattern, "out-of-scope pattern matched");
            return Intent::Escalation;
        }
        if let Some(intent) = match_keyword_rule(text) {
            return intent;
        }
        if escalation::exceeds_unmatched_threshold(text, self.config.escalate_unmatched_over_chars) {
            debug!(chars = text.chars().count(), "unmatched utterance over length threshold");
            return Intent::Escalation;
        }
        if text.contains('?') {
            Intent::GenericQuestion
        } else {
            Intent::Fallback
        }
    }

    /// Compose the response text for one utterance.
    pub fn respond(&self, utterance: &str, snapshot: &ContextSnapshot) -> String {
        self.reply(utterance, snapshot).text
    }

    /// Classify, resolve, and compose.
    pub fn reply(&self, utterance: &str, snapshot: &ContextSnapshot) -> Reply {
        let text = normalize(utterance);
        let intent = self.classify_normalized(&text);
        let display_name =
            resolve_display_name(snapshot.profile.name.as_deref(), snapshot.user_name.as_deref());

        let course = if intent.is_course_scoped() {
            resolve_course(&text, &snapshot.courses, self.config.min_entity_word_len)
        } else {
            None
        };
        let ctx = ComposeContext {
            text: &text,
            snapshot,
            display_name: &display_name,
            today: self.clock.today(),
            config: &self.config,
            random: self.random.as_ref(),
            course,
        };

        let text = match intent {
            Intent::Greeting => compose::canned::greeting(&display_name, self.random.as_ref()),
            Intent::Help => compose::canned::help(),
            Intent::PersonalInfo => compose::profile::personal_info(&ctx),
            Intent::Courses => {
                let route = routing::route_courses(ctx.text, course.is_some());
                debug!(?route, course = course.map(|c| c.code.as_str()), "course route");
                compose::courses::courses(&ctx, route)
            }
            Intent::Grades => {
                let route = routing::route_grades(course.is_some());
                debug!(?route, course = course.map(|c| c.code.as_str()), "grade route");
                compose::grades::grades(&ctx, route)
            }
            Intent::Events => {
                let route = routing::route_events(ctx.text);
                debug!(?route, "event route");
                compose::events::events(&ctx, route)
            }
            Intent::Announcements => {
                let route = routing::route_announcements(ctx.text);
                debug!(?route, "announcement route");
                compose::announcements::announcements(&ctx, route)
            }
            Intent::Notes => {
                let route = routing::route_notes(ctx.text, course.is_some());
                debug!(?route, "note route");
                compose::notes::notes(&ctx, route)
            }
            Intent::Thanks => compose::canned::thanks(&display_name),
            Intent::GenericQuestion => compose::canned::generic_question(),
            Intent::Fallback => compose::canned::fallback(&display_name, self.random.as_ref()),
            Intent::Escalation => compose::canned::escalation(),
        };

        debug!(intent = intent.as_str(), "reply composed");
        Reply { intent, text }
    }
}
