//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::DEFAULT_CONFIG_FILENAME;
use super::{AssistantConfig, ObservabilityConfig, SupportConfig};
use crate::errors::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAMPUS_*`)
/// 2. Config file (`campus.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    pub assistant: AssistantConfig,
    pub support: SupportConfig,
    pub observability: ObservabilityConfig,
}

impl CampusConfig {
    /// Load configuration from `path` (if it exists), then apply environment
    /// overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load `campus.toml` from `dir`, with the same fallbacks as [`Self::load`].
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(DEFAULT_CONFIG_FILENAME))
    }

    /// Load configuration from a TOML string. Missing sections and keys keep
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CAMPUS_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CAMPUS_SUPPORT_ENDPOINT") {
            if !url.trim().is_empty() {
                self.support.endpoint_url = Some(url.trim().to_string());
            }
        }
        if let Ok(val) = std::env::var("CAMPUS_SUPPORT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                self.support.timeout_ms = ms;
            }
        }
        if let Ok(token) = std::env::var("CAMPUS_SUPPORT_TOKEN") {
            self.support.api_token = Some(token);
        }
        if let Ok(level) = std::env::var("CAMPUS_LOG_LEVEL") {
            self.observability.log_level = level.to_lowercase();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let caps = [
            ("assistant.course_list_cap", self.assistant.course_list_cap),
            ("assistant.event_list_cap", self.assistant.event_list_cap),
            ("assistant.note_list_cap", self.assistant.note_list_cap),
            ("assistant.recent_note_cap", self.assistant.recent_note_cap),
            (
                "assistant.announcement_list_cap",
                self.assistant.announcement_list_cap,
            ),
        ];
        for (field, value) in caps {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if self.support.timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "support.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.support.enabled && self.support.endpoint_url.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "support.endpoint_url".to_string(),
                message: "required when support.enabled is true".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
