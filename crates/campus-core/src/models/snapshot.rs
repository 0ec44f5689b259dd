use serde::{Deserialize, Serialize};

use super::serde_helpers::null_to_default;
use super::{Announcement, Course, Event, Note, Profile};
use crate::errors::CampusResult;

/// Read-only bundle of the student's data supplied with every utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextSnapshot {
    #[serde(deserialize_with = "null_to_default")]
    pub profile: Profile,
    /// Display name from the login session, used when the profile has none.
    pub user_name: Option<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub courses: Vec<Course>,
    #[serde(deserialize_with = "null_to_default")]
    pub events: Vec<Event>,
    /// Newest first.
    #[serde(deserialize_with = "null_to_default")]
    pub announcements: Vec<Announcement>,
    #[serde(deserialize_with = "null_to_default")]
    pub notes: Vec<Note>,
}

impl ContextSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON the portal UI hands to the chat widget.
    pub fn from_json(json: &str) -> CampusResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    pub fn with_announcements(mut self, announcements: Vec<Announcement>) -> Self {
        self.announcements = announcements;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }
}
