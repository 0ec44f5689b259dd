use campus_observability::events;
use campus_observability::tracing_setup::spans::names;
use campus_observability::{ticket_span, turn_span};
use tracing_subscriber::EnvFilter;

#[test]
fn events_emit_under_a_json_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("trace"))
        .json()
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let span = turn_span!("session-1");
        let _guard = span.enter();
        events::turn_completed("session-1", "courses", 2);
        events::escalation_triggered("session-1", "arithmetic");
        events::ticket_created("T-100", "open");
        events::ticket_failed("timeout after 5000ms");
        events::pattern_degraded("consumer_tech");
    });
}

#[test]
fn events_are_silent_without_a_subscriber() {
    let span = ticket_span!("https://support.example/tickets");
    let _guard = span.enter();
    events::ticket_failed("network");
}

#[test]
fn span_names_are_namespaced() {
    assert!(names::TURN.starts_with("campus."));
    assert!(names::TICKET.starts_with("campus."));
}

#[test]
fn init_with_filter_twice_does_not_panic() {
    campus_observability::init_tracing_with_filter("warn");
    campus_observability::init_tracing_with_filter("debug");
}

#[test]
fn init_from_loaded_config_does_not_panic() {
    let config = campus_core::config::CampusConfig::from_toml("[observability]\nlog_level = \"warn\"\n").unwrap();
    campus_observability::init_tracing_from_config(&config.observability);
    campus_observability::init_tracing_from_config(&config.observability);
}
