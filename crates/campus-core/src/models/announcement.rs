use serde::{Deserialize, Serialize};

use super::serde_helpers::null_to_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Low,
    #[default]
    #[serde(other)]
    Medium,
}

/// Portal announcement. Collections are delivered newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Announcement {
    #[serde(deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "null_to_default")]
    pub content: String,
    #[serde(deserialize_with = "null_to_default")]
    pub time: String,
    #[serde(deserialize_with = "null_to_default")]
    pub priority: Priority,
    #[serde(deserialize_with = "null_to_default")]
    pub category: String,
    #[serde(deserialize_with = "null_to_default")]
    pub read: bool,
}

impl Announcement {
    pub fn new(title: impl Into<String>, priority: Priority, read: bool) -> Self {
        let title = title.into();
        Self {
            id: title.to_lowercase().replace(' ', "-"),
            title,
            priority,
            read,
            ..Self::default()
        }
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority == Priority::High
    }
}
