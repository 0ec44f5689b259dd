use serde::{Deserialize, Serialize};

use super::serde_helpers::null_to_default;
use crate::constants::{EXCELLENT_GRADES, GRADE_NOT_AVAILABLE};

/// Enrollment status of a course. Unknown statuses read as upcoming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Ongoing,
    Completed,
    #[default]
    #[serde(other)]
    Upcoming,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Grade record: four nullable sub-scores and a nullable final grade label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradeRecord {
    pub internal: Option<f64>,
    pub midterm: Option<f64>,
    pub final_exam: Option<f64>,
    pub total: Option<f64>,
    pub final_grade: Option<String>,
}

impl GradeRecord {
    /// The final grade label, unless absent, blank or "N/A".
    pub fn final_grade(&self) -> Option<&str> {
        self.final_grade
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && *g != GRADE_NOT_AVAILABLE)
    }

    pub fn is_excellent(&self) -> bool {
        self.final_grade()
            .is_some_and(|g| EXCELLENT_GRADES.contains(&g))
    }

    /// Labelled sub-scores that are present, in display order.
    pub fn scores(&self) -> Vec<(&'static str, f64)> {
        [
            ("Internal", self.internal),
            ("Midterm", self.midterm),
            ("Final exam", self.final_exam),
            ("Total", self.total),
        ]
        .into_iter()
        .filter_map(|(label, score)| score.map(|s| (label, s)))
        .collect()
    }
}

/// A course the student is, was, or will be enrolled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(deserialize_with = "null_to_default")]
    pub code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub semester: u32,
    #[serde(deserialize_with = "null_to_default")]
    pub status: CourseStatus,
    /// Completion percentage, meaningful only while ongoing.
    #[serde(deserialize_with = "null_to_default")]
    pub progress: f64,
    #[serde(deserialize_with = "null_to_default")]
    pub grades: GradeRecord,
}

impl Course {
    pub fn new(title: impl Into<String>, code: impl Into<String>, status: CourseStatus) -> Self {
        let title = title.into();
        let code = code.into();
        Self {
            id: code.to_lowercase(),
            title,
            code,
            status,
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_grades(mut self, grades: GradeRecord) -> Self {
        self.grades = grades;
        self
    }

    pub fn with_semester(mut self, semester: u32) -> Self {
        self.semester = semester;
        self
    }

    /// Progress clamped to 0–100 and rounded for display.
    pub fn progress_percent(&self) -> u8 {
        self.progress.clamp(0.0, 100.0).round() as u8
    }

    /// Completed with a reportable final grade.
    pub fn is_graded(&self) -> bool {
        self.status == CourseStatus::Completed && self.grades.final_grade().is_some()
    }
}
