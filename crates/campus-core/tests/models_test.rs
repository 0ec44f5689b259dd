use campus_core::models::*;
use chrono::NaiveDate;
use proptest::prelude::*;

#[test]
fn snapshot_defaults_missing_collections() {
    let snapshot = ContextSnapshot::from_json("{}").unwrap();
    assert!(snapshot.courses.is_empty());
    assert!(snapshot.events.is_empty());
    assert!(snapshot.announcements.is_empty());
    assert!(snapshot.notes.is_empty());
    assert_eq!(snapshot.profile, Profile::default());
}

#[test]
fn snapshot_parses_ui_shaped_json() {
    let json = r#"{
        "profile": { "name": "Asha Rao", "studentId": "STU-7", "semester": 5 },
        "userName": "asha",
        "courses": [{
            "id": "c1", "title": "Database Systems", "code": "CS301", "semester": 5,
            "status": "completed", "progress": 100,
            "grades": { "internal": 18, "midterm": 25, "finalExam": 49, "total": 92, "finalGrade": "A" }
        }],
        "events": [{ "id": "e1", "title": "Quiz 1", "date": "2026-10-19T09:00:00.000Z", "time": "10:00", "type": "quiz" }],
        "announcements": [{ "id": "a1", "title": "Fee deadline", "priority": "high", "read": false }],
        "notes": [{ "id": "n1", "title": "Joins", "isFavorite": true, "tags": ["sql"] }]
    }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();

    assert_eq!(snapshot.profile.id.as_deref(), Some("STU-7"));
    assert_eq!(snapshot.profile.semester.as_deref(), Some("5"));

    let course = &snapshot.courses[0];
    assert_eq!(course.status, CourseStatus::Completed);
    assert_eq!(course.grades.final_exam, Some(49.0));
    assert!(course.is_graded());
    assert!(course.grades.is_excellent());

    let event = &snapshot.events[0];
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    assert_eq!(event.kind, EventKind::Other, "unknown types map to other");

    assert!(snapshot.announcements[0].is_high_priority());
    assert!(snapshot.notes[0].favorite);
}

#[test]
fn malformed_event_date_is_rejected() {
    let json = r#"{ "events": [{ "title": "x", "date": "next tuesday" }] }"#;
    assert!(ContextSnapshot::from_json(json).is_err());
}

#[test]
fn null_collections_read_as_empty() {
    let json = r#"{ "profile": null, "courses": null, "events": null, "announcements": null, "notes": null }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot, ContextSnapshot::default());
}

#[test]
fn null_course_fields_read_as_defaults() {
    let json = r#"{ "courses": [{
        "title": "Operating Systems", "code": "CS310", "status": null,
        "semester": null, "progress": null, "grades": null
    }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    let course = &snapshot.courses[0];
    assert_eq!(course.status, CourseStatus::Upcoming);
    assert_eq!(course.progress_percent(), 0);
    assert_eq!(course.grades, GradeRecord::default());
    assert!(!course.is_graded());
}

#[test]
fn null_event_time_and_type_read_as_defaults() {
    let json = r#"{ "events": [{ "id": null, "title": "Lab demo", "date": "2026-10-21", "time": null, "type": null }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    let event = &snapshot.events[0];
    assert_eq!(event.time, "");
    assert_eq!(event.kind, EventKind::Other);
}

#[test]
fn null_announcement_text_reads_as_empty() {
    let json = r#"{ "announcements": [{ "title": "Library hours", "content": null, "category": null, "priority": null, "read": null }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    let ann = &snapshot.announcements[0];
    assert_eq!(ann.content, "");
    assert_eq!(ann.category, "");
    assert_eq!(ann.priority, Priority::Medium);
    assert!(!ann.read);
}

#[test]
fn null_note_lists_read_as_empty() {
    let json = r#"{ "notes": [{ "title": "Paging", "tags": null, "files": null, "isFavorite": null }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    let note = &snapshot.notes[0];
    assert!(note.tags.is_empty());
    assert!(note.files.is_empty());
    assert!(!note.favorite);
}

#[test]
fn unknown_priority_reads_as_medium() {
    let json = r#"{ "announcements": [{ "title": "Campus fest", "priority": "urgent" }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.announcements[0].priority, Priority::Medium);
    assert!(!snapshot.announcements[0].is_high_priority());
}

#[test]
fn unknown_course_status_reads_as_upcoming() {
    let json = r#"{ "courses": [{ "title": "Robotics", "code": "ME420", "status": "dropped" }] }"#;
    let snapshot = ContextSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.courses[0].status, CourseStatus::Upcoming);
}

#[test]
fn final_grade_na_is_not_reportable() {
    let grades = GradeRecord {
        final_grade: Some("N/A".into()),
        ..GradeRecord::default()
    };
    assert!(grades.final_grade().is_none());
    assert!(!grades.is_excellent());

    let course = Course::new("Compilers", "CS401", CourseStatus::Completed).with_grades(grades);
    assert!(!course.is_graded());
}

#[test]
fn grade_scores_skip_missing_values() {
    let grades = GradeRecord {
        internal: Some(15.0),
        total: Some(71.5),
        ..GradeRecord::default()
    };
    assert_eq!(grades.scores(), vec![("Internal", 15.0), ("Total", 71.5)]);
}

#[test]
fn progress_percent_is_clamped() {
    let course = Course::new("Networks", "CS320", CourseStatus::Ongoing).with_progress(140.0);
    assert_eq!(course.progress_percent(), 100);
    let course = course.with_progress(-3.0);
    assert_eq!(course.progress_percent(), 0);
}

proptest! {
    #[test]
    fn progress_percent_stays_in_range(progress in proptest::num::f64::ANY) {
        let course = Course::new("Signals", "EC210", CourseStatus::Ongoing).with_progress(progress);
        prop_assert!(course.progress_percent() <= 100);
    }
}

#[test]
fn note_matches_any_field() {
    let note = Note::new("Normal forms", "BCNF and 3NF")
        .for_course("Database Systems")
        .tagged(&["exam-prep"]);
    assert!(note.matches("normal"));
    assert!(note.matches("bcnf"));
    assert!(note.matches("exam-prep"));
    assert!(note.matches("database"));
    assert!(!note.matches("calculus"));
}

#[test]
fn event_kind_emoji_mapping() {
    assert_eq!(EventKind::Exam.emoji(), "📝");
    assert_eq!(EventKind::Assignment.emoji(), "📋");
    assert_eq!(EventKind::Deadline.emoji(), "⏳");
    assert_eq!(EventKind::Holiday.emoji(), "🎉");
    assert_eq!(EventKind::Meeting.emoji(), "📅");
    assert_eq!(EventKind::Other.emoji(), "📅");
}

#[test]
fn chat_message_serializes_camel_case_role() {
    let msg = ChatMessage::assistant("hello");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "assistant");
    assert_eq!(json["content"], "hello");
    assert!(json["timestamp"].is_string());
    assert_eq!(msg.display_time().len(), 5);
}

#[test]
fn chat_message_ids_are_unique() {
    let a = ChatMessage::user("a");
    let b = ChatMessage::user("a");
    assert_ne!(a.id, b.id);
}
