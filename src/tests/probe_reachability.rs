#[cfg(test)]
mod test {
    use std::time::Duration;

    use httpmock::Method::GET;
    use httpmock::MockServer;

    use crate::config::settings::SettingsConfig;
    use crate::tests::common::{build_token_client, settings_with_timeouts, BASIC_HEADER};

    async fn probe_with_status(status: u16) -> bool {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/").header("Authorization", BASIC_HEADER);
                then.status(status).body("some body from the server");
            })
            .await;

        let client = build_token_client(&server.base_url(), &SettingsConfig::default());
        let reachable = client.probe().await;
        mock.assert_hits_async(1).await;
        reachable
    }

    #[tokio::test]
    async fn ok_and_auth_refusals_count_as_reachable() {
        assert!(probe_with_status(200).await);
        assert!(probe_with_status(401).await);
        assert!(probe_with_status(403).await);
    }

    #[tokio::test]
    async fn server_errors_count_as_unreachable() {
        assert!(!probe_with_status(500).await);
        assert!(!probe_with_status(404).await);
    }

    #[tokio::test]
    async fn timeout_is_unreachable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).delay(Duration::from_millis(1500));
            })
            .await;

        let client = build_token_client(&server.base_url(), &settings_with_timeouts(200, 200));
        assert!(!client.probe().await);
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        // nothing listens on port 1
        let client = build_token_client("http://127.0.0.1:1", &settings_with_timeouts(1000, 1000));
        assert!(!client.probe().await);
    }

    #[tokio::test]
    async fn probe_does_not_touch_token_cache() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body(r#"{"token": "not-from-probe"}"#);
            })
            .await;

        let client = build_token_client(&server.base_url(), &SettingsConfig::default());
        assert!(client.probe().await);
        assert!(client.cached_token().await.is_none());
    }
}
