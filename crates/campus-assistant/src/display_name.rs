use campus_core::constants::SENTINEL_STUDENT_NAME;

/// Name used to address the student.
///
/// First of: the profile name, the session user name, or `"Student"`.
/// Candidates are trimmed; blank values and the `"Student"` sentinel are skipped.
pub fn resolve_display_name(profile_name: Option<&str>, user_name: Option<&str>) -> String {
    [profile_name, user_name]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty() && *name != SENTINEL_STUDENT_NAME)
        .unwrap_or(SENTINEL_STUDENT_NAME)
        .to_string()
}
