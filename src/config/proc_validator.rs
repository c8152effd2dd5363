//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Validates invariants of the endpoint and client settings:
//!   * base URL is an absolute http(s) URL
//!   * token path is absolute
//!   * literal credentials are not blank
//!   * timeouts, token TTL and logging level are sane

use reqwest::Url;
use tracing::{error, info};

use crate::config::endpoint::{EndpointConfig, GenericSourceValue, ServiceConfig};
use crate::config::settings::SettingsConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_endpoint(&cfg.endpoint, &mut errors);
    validate_settings(&cfg.settings, &mut errors);

    if errors.is_empty() {
        info!("config validation passed");
        Ok(())
    } else {
        for e in &errors {
            error!("config validation error: {}", e);
        }
        Err(errors)
    }
}

fn validate_endpoint(endpoint: &EndpointConfig, errors: &mut Vec<String>) {
    let base_url = endpoint.base_url.trim();
    if base_url.is_empty() {
        errors.push("endpoint.base_url is empty".to_string());
    } else {
        match Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!(
                "endpoint.base_url '{}' has unsupported scheme '{}', expected http or https",
                base_url,
                url.scheme()
            )),
            Err(e) => errors.push(format!(
                "endpoint.base_url '{}' is not a valid URL: {}",
                base_url, e
            )),
        }
    }

    if let Some(path) = &endpoint.token_path {
        if !path.starts_with('/') {
            errors.push(format!("endpoint.token_path '{}' must start with '/'", path));
        }
    }

    validate_literal_not_blank("endpoint.username", &endpoint.username, errors);
    validate_literal_not_blank("endpoint.password", &endpoint.password, errors);
}

fn validate_literal_not_blank(ctx: &str, value: &GenericSourceValue, errors: &mut Vec<String>) {
    match value {
        GenericSourceValue::Literal { value } if value.trim().is_empty() => {
            errors.push(format!("{}: literal value is empty", ctx));
        }
        GenericSourceValue::FromEnv { from_env } if from_env.trim().is_empty() => {
            errors.push(format!("{}: from_env variable name is empty", ctx));
        }
        GenericSourceValue::FromFile { path } if path.trim().is_empty() => {
            errors.push(format!("{}: path is empty", ctx));
        }
        _ => {}
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.probe_timeout_ms() == 0 {
        errors.push("settings.timeouts.probe_timeout_ms must be > 0".to_string());
    }
    if settings.token_timeout_ms() == 0 {
        errors.push("settings.timeouts.token_timeout_ms must be > 0".to_string());
    }

    let ttl = settings.token_ttl_seconds();
    if ttl == 0 {
        errors.push("settings.token_ttl_seconds must be > 0".to_string());
    } else if ttl > 60 * 60 * 24 * 365 {
        errors.push(format!(
            "settings.token_ttl_seconds ({}) is unreasonably large",
            ttl
        ));
    }

    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}
