/// Client module
///
/// `TokenClient` probes the remote API and fetches a Basic-Auth issued token,
/// keeping the last one in memory until its expiry passes.

use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::cache::token::CachedToken;
use crate::cache::token_cache::TokenCache;
use crate::config::endpoint::{EndpointConfig, ServiceConfig};
use crate::config::settings::SettingsConfig;
use crate::helpers::time::{Clock, SystemClock};

pub mod auth;
pub mod probe;
pub mod token_fetch;

use auth::Credentials;

pub struct TokenClient {
    http: Client,
    credentials: Credentials,
    base_url: String,
    token_url: String,
    probe_timeout: Duration,
    token_timeout: Duration,
    token_ttl: chrono::Duration,
    cache: TokenCache,
    clock: Arc<dyn Clock>,
}

impl TokenClient {
    pub fn new(endpoint: &EndpointConfig, settings: &SettingsConfig) -> Result<Self> {
        let credentials = Credentials::resolve(endpoint)?;
        let http = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        let token_ttl = i64::try_from(settings.token_ttl_seconds())
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .context("settings.token_ttl_seconds out of range")?;

        info!(
            base_url = %endpoint.base_url,
            username = %credentials.username(),
            "token client created"
        );

        Ok(Self {
            http,
            credentials,
            base_url: endpoint.base_url.to_owned(),
            token_url: endpoint.token_url(),
            probe_timeout: Duration::from_millis(settings.probe_timeout_ms()),
            token_timeout: Duration::from_millis(settings.token_timeout_ms()),
            token_ttl,
            cache: TokenCache::new(),
            clock: Arc::new(SystemClock),
        })
    }

    pub fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        Self::new(&service_config.endpoint, &service_config.settings)
    }

    /// Replace the clock used for expiry decisions
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Current cache entry, expired or not
    pub async fn cached_token(&self) -> Option<CachedToken> {
        self.cache.peek().await
    }

    /// Drop the cached token so the next `get_token` goes to the server
    pub async fn invalidate(&self) {
        self.cache.clear().await;
        info!("cached token invalidated");
    }
}

impl std::fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClient")
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .field("probe_timeout", &self.probe_timeout)
            .field("token_timeout", &self.token_timeout)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
