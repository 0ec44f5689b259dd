/// Sentinel profile name the portal uses before a student fills in their profile.
pub const SENTINEL_STUDENT_NAME: &str = "Student";

/// Label the portal uses for an unknown final grade.
pub const GRADE_NOT_AVAILABLE: &str = "N/A";

/// Final grades counted as excellent.
pub const EXCELLENT_GRADES: &[&str] = &["A+", "A", "A-"];

/// Placeholder for absent contact fields.
pub const NOT_SET: &str = "Not set";

/// Placeholder for absent academic fields.
pub const NOT_AVAILABLE: &str = "N/A";
