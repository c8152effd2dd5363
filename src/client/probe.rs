use http::header::AUTHORIZATION;
use http::StatusCode;
use tracing::{error, info, warn};

use crate::client::TokenClient;
use crate::observability::metrics::{
    get_metrics, PROBE_REACHABLE, PROBE_TRANSPORT_ERROR, PROBE_UNEXPECTED_STATUS,
};
use crate::utils::constants::{PROBE_BODY_LOG_LIMIT, REACHABLE_STATUSES};

impl TokenClient {
    /// Check that the server answers HTTP at the base URL.
    ///
    /// 401 and 403 count as reachable: the server is up even if it refuses
    /// the credentials. Never fails; every problem turns into `false`.
    pub async fn probe(&self) -> bool {
        let metrics = get_metrics().await;
        info!("probing connection to {}", self.base_url);

        let response = self
            .http
            .get(&self.base_url)
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            .timeout(self.probe_timeout)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                error!("connection probe failed: {}", e);
                metrics.probe_requests.with_label_values(&[PROBE_TRANSPORT_ERROR]).inc();
                return false;
            }
        };

        let status = response.status();
        info!("connection probe status: {}", status.as_u16());

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("connection probe failed reading body: {}", e);
                metrics.probe_requests.with_label_values(&[PROBE_TRANSPORT_ERROR]).inc();
                return false;
            }
        };
        info!("connection probe response: {}...", truncate_chars(&body, PROBE_BODY_LOG_LIMIT));

        if is_reachable_status(status) {
            metrics.probe_requests.with_label_values(&[PROBE_REACHABLE]).inc();
            true
        } else {
            warn!("connection probe got unexpected status {}", status.as_u16());
            metrics.probe_requests.with_label_values(&[PROBE_UNEXPECTED_STATUS]).inc();
            false
        }
    }
}

pub fn is_reachable_status(status: StatusCode) -> bool {
    REACHABLE_STATUSES.contains(&status.as_u16())
}

/// First `max_chars` characters of `s`, never splitting a code point
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reachable_statuses() {
        for status in [StatusCode::OK, StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            assert!(is_reachable_status(status), "{status}");
        }
        for status in [
            StatusCode::NO_CONTENT,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert!(!is_reachable_status(status), "{status}");
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("conexão", 6), "conexã");
        assert_eq!(truncate_chars("short", 200), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
