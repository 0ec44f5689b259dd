//! Property-based tests for the assistant pipeline.

use campus_assistant::{resolve_display_name, Assistant, FixedClock, FixedRandom};
use campus_core::intent::Intent;
use campus_core::models::{ContextSnapshot, Course, CourseStatus, Note};
use chrono::NaiveDate;
use proptest::prelude::*;

fn assistant() -> Assistant {
    Assistant::default()
        .with_clock(FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()))
        .with_random(FixedRandom(0))
}

fn snapshot() -> ContextSnapshot {
    ContextSnapshot::new()
        .with_courses(vec![
            Course::new("Operating Systems", "CS302", CourseStatus::Ongoing).with_progress(50.0),
            Course::new("Database Systems", "CS301", CourseStatus::Completed),
        ])
        .with_notes(vec![Note::new("Paging", "virtual memory").favorite()])
}

proptest! {
    #[test]
    fn display_name_is_idempotent(
        profile in proptest::option::of("[ a-zA-Z]{0,12}"),
        user in proptest::option::of("[ a-zA-Z]{0,12}"),
    ) {
        let first = resolve_display_name(profile.as_deref(), user.as_deref());
        let again = resolve_display_name(Some(&first), None);
        prop_assert_eq!(&first, &again);
        prop_assert!(!first.trim().is_empty());
    }

    #[test]
    fn respond_never_returns_empty(utterance in "\\PC{0,80}") {
        let text = assistant().respond(&utterance, &snapshot());
        prop_assert!(!text.is_empty());
    }

    #[test]
    fn arithmetic_always_escalates(a in 0u32..1000, b in 0u32..1000, op in "[-+*/]", filler in "[a-z ]{0,20}") {
        let utterance = format!("{filler} {a}{op}{b} my courses");
        prop_assert_eq!(assistant().classify(&utterance), Intent::Escalation);
    }

    #[test]
    fn classification_is_case_insensitive(utterance in "[a-zA-Z ?]{0,40}") {
        let a = assistant();
        prop_assert_eq!(a.classify(&utterance), a.classify(&utterance.to_uppercase()));
    }
}
