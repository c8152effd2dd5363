use http::header::AUTHORIZATION;
use tracing::{debug, error, info};

use crate::cache::token::CachedToken;
use crate::client::TokenClient;
use crate::error::{TokenAcquisitionError, TokenError};
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::parser::parser::parse_token_response;
use crate::utils::constants::LOGIN_QUERY_PARAM;

static SUCCESS_MSG: &str = "success";
static ERROR_MSG: &str = "error";

impl TokenClient {
    /// Return the cached token while it is valid, otherwise fetch a new one.
    ///
    /// A single attempt is made; any failure is logged and returned as
    /// `TokenAcquisitionError` with the cause available through `kind()`.
    pub async fn get_token(&self) -> Result<String, TokenAcquisitionError> {
        let metrics = get_metrics().await;

        if let Some(cached) = self.cache.get(self.clock.now()).await {
            metrics.token_cache_hits.inc();
            debug!("serving cached token (expires at: {})", cached.expires_at);
            return Ok(cached.value);
        }

        let start = get_instant();
        metrics.token_fetch_requests.inc();

        match self.fetch_token().await {
            Ok(token) => {
                metrics
                    .token_fetch_duration
                    .with_label_values(&[SUCCESS_MSG])
                    .observe(start.elapsed().as_secs_f64());

                let cached = CachedToken::issued(token, self.clock.now(), self.token_ttl);
                metrics.token_expiry_unix.set(cached.expires_at.timestamp());
                info!("token obtained successfully (expires at: {})", cached.expires_at);

                let value = cached.value.clone();
                self.cache.set(cached).await;
                Ok(value)
            }
            Err(e) => {
                metrics
                    .token_fetch_duration
                    .with_label_values(&[ERROR_MSG])
                    .observe(start.elapsed().as_secs_f64());
                metrics.token_fetch_failures.with_label_values(&[e.reason()]).inc();
                error!(reason = e.reason(), "failed to obtain token: {}", e);
                Err(e.into())
            }
        }
    }

    async fn fetch_token(&self) -> Result<String, TokenError> {
        info!("requesting token from {}", self.token_url);

        let response = self
            .http
            .get(&self.token_url)
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .query(&[(LOGIN_QUERY_PARAM, self.credentials.username())])
            .timeout(self.token_timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!("token endpoint answered with status {}", status.as_u16());
        debug!("raw token endpoint response: {} - {}", status.as_u16(), body);

        parse_token_response(status, &body)
    }
}
