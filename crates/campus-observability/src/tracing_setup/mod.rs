//! Tracing setup: structured JSON logging plus span and event definitions.

pub mod events;
pub mod spans;

use campus_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init_tracing`].
pub const LOG_ENV_VAR: &str = "CAMPUS_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `CAMPUS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing from `observability.log_level`. A non-blank
/// `CAMPUS_LOG` still wins, so one variable can override any deployment.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let directive = filter_directive(std::env::var(LOG_ENV_VAR).ok(), config);
    init_tracing_with_filter(&directive);
}

fn filter_directive(env_value: Option<String>, config: &ObservabilityConfig) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Initialize tracing with a custom filter string. Safe to call more than
/// once; later calls are ignored.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str) -> ObservabilityConfig {
        ObservabilityConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_is_used_without_env() {
        assert_eq!(filter_directive(None, &config("debug")), "debug");
    }

    #[test]
    fn env_directive_overrides_configured_level() {
        let env = Some("campus_assistant=trace".to_string());
        assert_eq!(filter_directive(env, &config("warn")), "campus_assistant=trace");
    }

    #[test]
    fn blank_env_falls_back_to_config() {
        assert_eq!(filter_directive(Some("  ".to_string()), &config("error")), "error");
    }
}
