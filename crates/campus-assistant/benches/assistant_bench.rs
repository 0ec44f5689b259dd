use campus_assistant::{Assistant, FixedClock, FixedRandom};
use campus_core::models::{ContextSnapshot, Course, CourseStatus, Event, EventKind, Note};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_snapshot(size: usize) -> ContextSnapshot {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let courses = (0..size)
        .map(|i| {
            let status = match i % 3 {
                0 => CourseStatus::Ongoing,
                1 => CourseStatus::Completed,
                _ => CourseStatus::Upcoming,
            };
            Course::new(format!("Course Number {i}"), format!("C{i:03}"), status)
        })
        .collect();
    let events = (0..size)
        .map(|i| {
            let date = today.checked_add_days(Days::new((i % 14) as u64)).unwrap();
            Event::new(format!("Event {i}"), date, EventKind::Assignment)
        })
        .collect();
    let notes = (0..size)
        .map(|i| Note::new(format!("Note {i}"), "lecture summary").tagged(&["review"]))
        .collect();
    ContextSnapshot::new()
        .with_courses(courses)
        .with_events(events)
        .with_notes(notes)
}

fn bench_respond(c: &mut Criterion) {
    let assistant = Assistant::default()
        .with_clock(FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()))
        .with_random(FixedRandom(0));
    let snapshot = build_snapshot(200);
    let utterances = [
        "hello",
        "what courses am i taking?",
        "events this week",
        "search notes for review",
        "what is 2+2",
    ];

    c.bench_function("respond_mixed_utterances_200_items", |b| {
        b.iter(|| {
            for u in &utterances {
                black_box(assistant.respond(black_box(u), &snapshot));
            }
        })
    });

    c.bench_function("classify_only", |b| {
        b.iter(|| black_box(assistant.classify(black_box("show my unread announcements"))))
    });
}

criterion_group!(benches, bench_respond);
criterion_main!(benches);
