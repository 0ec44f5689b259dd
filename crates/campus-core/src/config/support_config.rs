use serde::{Deserialize, Serialize};

use super::defaults;

/// Support-ticket extension configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Create a ticket when an utterance escalates.
    pub enabled: bool,
    /// Base URL of the support desk API.
    pub endpoint_url: Option<String>,
    /// Path appended to `endpoint_url` for ticket creation.
    pub ticket_path: String,
    /// Upper bound on a ticket call, in milliseconds.
    pub timeout_ms: u64,
    /// Bearer token sent with ticket requests.
    pub api_token: Option<String>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_SUPPORT_ENABLED,
            endpoint_url: None,
            ticket_path: defaults::DEFAULT_TICKET_PATH.to_string(),
            timeout_ms: defaults::DEFAULT_SUPPORT_TIMEOUT_MS,
            api_token: None,
        }
    }
}

impl SupportConfig {
    /// Full ticket URL, if an endpoint is configured.
    pub fn ticket_url(&self) -> Option<String> {
        self.endpoint_url
            .as_ref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), self.ticket_path))
    }
}
