//! Session lifecycle: inactivity timeout, max age, and transcript size.

use chrono::Duration;

use crate::manager::SessionManager;

/// Default inactivity timeout: 1 hour.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::hours(1);

/// Default max session age: 7 days.
pub const DEFAULT_MAX_AGE: Duration = Duration::days(7);

/// Default max transcript length per session.
pub const DEFAULT_MAX_MESSAGES: usize = 2_000;

/// Clean up stale sessions from the manager.
///
/// Removes sessions that are:
/// - Inactive for longer than `inactivity_timeout`
/// - Older than `max_age`
/// - Holding more than `max_messages` messages
///
/// Returns the number of sessions removed.
pub fn cleanup_stale_sessions(
    manager: &SessionManager,
    inactivity_timeout: Duration,
    max_age: Duration,
    max_messages: usize,
) -> usize {
    let mut removed = 0;

    for id in manager.session_ids() {
        let should_remove = manager
            .get_session(&id)
            .map(|session| {
                session.idle_duration() > inactivity_timeout
                    || session.session_duration() > max_age
                    || session.messages().len() > max_messages
            })
            .unwrap_or(false);

        if should_remove && manager.remove_session(&id).is_some() {
            removed += 1;
        }
    }

    if removed > 0 {
        tracing::debug!(removed, "stale chat sessions removed");
    }
    removed
}

/// Clean up with the default thresholds.
pub fn cleanup_idle_sessions(manager: &SessionManager) -> usize {
    cleanup_stale_sessions(
        manager,
        DEFAULT_INACTIVITY_TIMEOUT,
        DEFAULT_MAX_AGE,
        DEFAULT_MAX_MESSAGES,
    )
}
