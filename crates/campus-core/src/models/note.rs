use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::null_to_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteAttachment {
    pub name: String,
    pub size: u64,
    pub url: Option<String>,
}

/// A study note. The assistant only lists and searches notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Note {
    #[serde(deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "null_to_default")]
    pub content: String,
    /// Course title or code the note belongs to.
    pub course: Option<String>,
    #[serde(deserialize_with = "null_to_default")]
    pub tags: Vec<String>,
    #[serde(alias = "isFavorite", deserialize_with = "null_to_default")]
    pub favorite: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_to_default")]
    pub files: Vec<NoteAttachment>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: title.to_lowercase().replace(' ', "-"),
            title,
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn for_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Case-insensitive containment on title, content, tags, or course.
    /// `term` must already be lowercase.
    pub fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.content.to_lowercase().contains(term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(term))
            || self
                .course
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(term))
    }
}
