use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_PROBE_TIMEOUT_MS, DEFAULT_TOKEN_TIMEOUT_MS, DEFAULT_TOKEN_TTL_SECONDS,
};

/// ================================
/// Global client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    pub timeouts: Option<TimeoutConfig>,
    /// how long a fetched token is served from cache
    pub token_ttl_seconds: Option<u64>,
    pub logging: Option<LoggingConfig>,
}

impl SettingsConfig {
    pub fn probe_timeout_ms(&self) -> u64 {
        self.timeouts
            .as_ref()
            .and_then(|t| t.probe_timeout_ms)
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_MS)
    }

    pub fn token_timeout_ms(&self) -> u64 {
        self.timeouts
            .as_ref()
            .and_then(|t| t.token_timeout_ms)
            .unwrap_or(DEFAULT_TOKEN_TIMEOUT_MS)
    }

    pub fn token_ttl_seconds(&self) -> u64 {
        self.token_ttl_seconds.unwrap_or(DEFAULT_TOKEN_TTL_SECONDS)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TimeoutConfig {
    /// deadline for the reachability probe
    pub probe_timeout_ms: Option<u64>,
    /// deadline for the token request
    pub token_timeout_ms: Option<u64>,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
