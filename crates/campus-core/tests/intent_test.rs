use campus_core::intent::Intent;

#[test]
fn intent_has_12_variants() {
    assert_eq!(Intent::COUNT, 12);
    assert_eq!(Intent::ALL.len(), 12);
}

#[test]
fn intent_labels_match_serde() {
    for intent in Intent::ALL {
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(json, format!("\"{}\"", intent.as_str()));
        let deserialized: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, intent);
    }
}

#[test]
fn course_scoped_intents() {
    assert!(Intent::Grades.is_course_scoped());
    assert!(Intent::Notes.is_course_scoped());
    assert!(Intent::Courses.is_course_scoped());
    assert!(!Intent::Events.is_course_scoped());
    assert!(!Intent::Greeting.is_course_scoped());
}

#[test]
fn static_intents_do_not_read_context() {
    for intent in [
        Intent::Greeting,
        Intent::Help,
        Intent::Thanks,
        Intent::GenericQuestion,
        Intent::Fallback,
        Intent::Escalation,
    ] {
        assert!(!intent.reads_context(), "{intent} should not read context");
    }
}
