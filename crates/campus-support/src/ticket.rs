//! Ticket payload construction.

use campus_assistant::resolve_display_name;
use campus_core::models::{ContextSnapshot, TicketRequest};
use chrono::{DateTime, Utc};

/// Characters of the utterance kept in the ticket subject.
pub const SUBJECT_PREVIEW_CHARS: usize = 60;

/// Ticket for an escalated utterance. The full utterance goes in the
/// message; the subject carries a preview.
pub fn build_ticket_request(
    utterance: &str,
    snapshot: &ContextSnapshot,
    created_at: DateTime<Utc>,
) -> TicketRequest {
    let trimmed = utterance.trim();
    let mut preview: String = trimmed.chars().take(SUBJECT_PREVIEW_CHARS).collect();
    if trimmed.chars().count() > SUBJECT_PREVIEW_CHARS {
        preview.push_str("...");
    }

    TicketRequest {
        subject: format!("Chat escalation: {preview}"),
        message: trimmed.to_string(),
        student_name: resolve_display_name(
            snapshot.profile.name.as_deref(),
            snapshot.user_name.as_deref(),
        ),
        student_id: snapshot.profile.id.clone(),
        email: snapshot.profile.email.clone(),
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::models::Profile;

    #[test]
    fn long_utterances_are_previewed_in_subject() {
        let utterance = "x".repeat(100);
        let req = build_ticket_request(&utterance, &ContextSnapshot::new(), Utc::now());
        assert_eq!(req.subject, format!("Chat escalation: {}...", "x".repeat(60)));
        assert_eq!(req.message.len(), 100);
        assert_eq!(req.student_name, "Student");
    }

    #[test]
    fn profile_fields_are_copied() {
        let mut profile = Profile::named("Asha");
        profile.id = Some("STU-1".to_string());
        let snapshot = ContextSnapshot::new().with_profile(profile);
        let req = build_ticket_request("  what is 2+2 ", &snapshot, Utc::now());
        assert_eq!(req.subject, "Chat escalation: what is 2+2");
        assert_eq!(req.student_name, "Asha");
        assert_eq!(req.student_id.as_deref(), Some("STU-1"));
        assert!(req.email.is_none());
    }
}
