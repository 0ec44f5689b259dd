use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers::{date_only, null_to_default};

/// Calendar event type. Unknown types from the UI map to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Exam,
    Assignment,
    Deadline,
    Meeting,
    Presentation,
    Holiday,
    #[default]
    #[serde(other)]
    Other,
}

impl EventKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Exam => "📝",
            Self::Assignment => "📋",
            Self::Deadline => "⏳",
            Self::Holiday => "🎉",
            _ => "📅",
        }
    }
}

/// A calendar entry: exam, assignment, deadline, meeting, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "date_only")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_to_default")]
    pub time: String,
    #[serde(rename = "type", default, deserialize_with = "null_to_default")]
    pub kind: EventKind,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate, kind: EventKind) -> Self {
        let title = title.into();
        Self {
            id: format!("{}-{}", date, title.to_lowercase().replace(' ', "-")),
            title,
            date,
            time: String::new(),
            kind,
            course: None,
            location: None,
        }
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }
}
