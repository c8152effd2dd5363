use crate::config::endpoint::ServiceConfig;
use crate::config::settings::{LoggingConfig, TimeoutConfig};
use crate::utils::constants::DEFAULT_TOKEN_PATH;

/// Fill every optional setting so later stages read concrete values.
pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    let settings = &mut config.settings;

    if settings.logging.is_none() {
        settings.logging = Some(LoggingConfig::default());
    }

    let timeouts = TimeoutConfig {
        probe_timeout_ms: Some(settings.probe_timeout_ms()),
        token_timeout_ms: Some(settings.token_timeout_ms()),
    };
    settings.timeouts = Some(timeouts);
    settings.token_ttl_seconds = Some(settings.token_ttl_seconds());

    if config.endpoint.token_path.is_none() {
        config.endpoint.token_path = Some(DEFAULT_TOKEN_PATH.to_owned());
    }

    config
}
