//! HTTP ticket sink with retry, exponential backoff, timeout, and gzip.

use std::time::Duration;

use campus_core::config::SupportConfig;
use campus_core::errors::{CampusError, CampusResult, SupportError};
use campus_core::models::{TicketReceipt, TicketRequest};
use campus_core::traits::ITicketSink;
use tracing::Instrument;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpTicketSinkConfig {
    /// Full ticket-creation URL.
    pub url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts on 5xx or transport failure.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for HttpTicketSinkConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout: Duration::from_secs(5),
            max_retries: 1,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(2),
        }
    }
}

fn net_err(reason: String) -> CampusError {
    SupportError::NetworkError { reason }.into()
}

/// Files tickets with `POST {endpoint}/tickets`.
#[derive(Debug, Clone)]
pub struct HttpTicketSink {
    config: HttpTicketSinkConfig,
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl HttpTicketSink {
    pub fn new(config: HttpTicketSinkConfig) -> CampusResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e: reqwest::Error| net_err(e.to_string()))?;
        Ok(Self {
            config,
            client,
            bearer_token: None,
        })
    }

    /// Build from the `[support]` config section. Fails with
    /// `SupportError::NotConfigured` when no endpoint is set.
    pub fn from_config(support: &SupportConfig) -> CampusResult<Self> {
        let url = support.ticket_url().ok_or(SupportError::NotConfigured)?;
        let mut sink = Self::new(HttpTicketSinkConfig {
            url,
            timeout: Duration::from_millis(support.timeout_ms),
            ..HttpTicketSinkConfig::default()
        })?;
        if let Some(token) = support.api_token.as_ref().filter(|t| !t.trim().is_empty()) {
            sink.set_bearer_token(token.clone());
        }
        Ok(sink)
    }

    /// Set the bearer token for authenticated requests.
    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    async fn post_ticket(&self, request: &TicketRequest) -> CampusResult<TicketReceipt> {
        let mut backoff = self.config.initial_backoff;
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(
                    "support: retry attempt {}/{} after {:?}",
                    attempt,
                    self.config.max_retries,
                    backoff
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.config.max_backoff);
            }

            let mut req = self.client.post(&self.config.url).json(request);
            if let Some(ref token) = self.bearer_token {
                req = req.bearer_auth(token);
            }

            match req.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.json::<TicketReceipt>().await.map_err(|e: reqwest::Error| {
                            SupportError::InvalidResponse {
                                reason: e.to_string(),
                            }
                            .into()
                        });
                    }
                    if status.is_client_error() {
                        let body = resp.text().await.unwrap_or_default();
                        return Err(SupportError::Rejected {
                            status: status.as_u16(),
                            body,
                        }
                        .into());
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) if e.is_timeout() => {
                    return Err(SupportError::Timeout {
                        timeout_ms: self.config.timeout.as_millis() as u64,
                    }
                    .into());
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(net_err(format!(
            "all {} retries exhausted: {last_err}",
            self.config.max_retries
        )))
    }
}

impl ITicketSink for HttpTicketSink {
    async fn create_ticket(&self, request: &TicketRequest) -> CampusResult<TicketReceipt> {
        self.post_ticket(request)
            .instrument(campus_observability::ticket_span!(self.config.url))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_endpoint() {
        let err = HttpTicketSink::from_config(&SupportConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            CampusError::SupportError(SupportError::NotConfigured)
        ));
    }

    #[test]
    fn from_config_builds_ticket_url() {
        let support = SupportConfig {
            enabled: true,
            endpoint_url: Some("https://support.example/api/".to_string()),
            api_token: Some("secret".to_string()),
            ..SupportConfig::default()
        };
        let sink = HttpTicketSink::from_config(&support).unwrap();
        assert_eq!(sink.url(), "https://support.example/api/tickets");
        assert_eq!(sink.bearer_token.as_deref(), Some("secret"));
        assert_eq!(sink.config.timeout, Duration::from_millis(5000));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_support_error() {
        let sink = HttpTicketSink::new(HttpTicketSinkConfig {
            url: "http://127.0.0.1:9/tickets".to_string(),
            timeout: Duration::from_millis(500),
            max_retries: 0,
            ..HttpTicketSinkConfig::default()
        })
        .unwrap();
        let request = crate::build_ticket_request(
            "what is 2+2",
            &campus_core::models::ContextSnapshot::new(),
            chrono::Utc::now(),
        );
        let err = sink.create_ticket(&request).await.unwrap_err();
        assert!(matches!(err, CampusError::SupportError(_)));
    }
}
