use campus_core::constants::{NOT_AVAILABLE, NOT_SET};

use super::ComposeContext;

fn field<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
}

/// Profile fields verbatim; "Not set" for contact fields, "N/A" for academic ones.
pub fn personal_info(ctx: &ComposeContext<'_>) -> String {
    let p = &ctx.snapshot.profile;
    format!(
        "👤 Here's your profile, {}:\n\
         • Name: {}\n\
         • Student ID: {}\n\
         • Email: {}\n\
         • Phone: {}\n\
         • Programme: {}\n\
         • Semester: {}",
        ctx.display_name,
        field(p.name.as_deref(), NOT_SET),
        field(p.id.as_deref(), NOT_AVAILABLE),
        field(p.email.as_deref(), NOT_SET),
        field(p.phone.as_deref(), NOT_SET),
        field(p.course.as_deref(), NOT_AVAILABLE),
        field(p.semester.as_deref(), NOT_AVAILABLE),
    )
}
