// tests/common/mod.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

use crate::client::TokenClient;
use crate::config::endpoint::EndpointConfig;
use crate::config::settings::{SettingsConfig, TimeoutConfig};
use crate::helpers::time::Clock;

pub const USERNAME: &str = "carga";
pub const PASSWORD: &str = "senha";
/// base64("carga:senha")
pub const BASIC_HEADER: &str = "Basic Y2FyZ2E6c2VuaGE=";

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_now() -> Arc<Self> {
        Arc::new(Self { now: Mutex::new(Utc::now()) })
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn settings_with_timeouts(probe_timeout_ms: u64, token_timeout_ms: u64) -> SettingsConfig {
    SettingsConfig {
        timeouts: Some(TimeoutConfig {
            probe_timeout_ms: Some(probe_timeout_ms),
            token_timeout_ms: Some(token_timeout_ms),
        }),
        ..Default::default()
    }
}

/// Client for `base_url` with the shared test credentials
pub fn build_token_client(base_url: &str, settings: &SettingsConfig) -> TokenClient {
    let endpoint = EndpointConfig::new(base_url.to_owned(), USERNAME.into(), PASSWORD.into());
    TokenClient::new(&endpoint, settings).expect("token client")
}
