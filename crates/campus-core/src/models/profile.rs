use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_string_or_number;

/// Student profile. Every field is optional; the portal fills them in over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub name: Option<String>,
    #[serde(alias = "studentId")]
    pub id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Degree programme, e.g. "B.Tech Computer Science".
    pub course: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub semester: Option<String>,
}

impl Profile {
    /// Profile carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
