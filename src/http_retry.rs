//! Upstream GET with retry and backoff.
//!
//! [`fetch_with_retry`] returns the raw response; [`fetch_json`] layers JSON
//! decoding on top so provider adapters only deal in typed payloads.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::Result;

/// Default number of fetch attempts (1 initial + 1 retry).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Default backoff between attempts in milliseconds.
pub const DEFAULT_BACKOFF_MS: u64 = 500;

/// Default per-attempt timeout for upstream stats APIs.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`fetch_with_retry`].
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts (minimum 1; 0 is treated as 1).
    pub max_attempts: u32,
    /// Sleep duration between consecutive attempts.
    pub backoff: Duration,
    /// Per-attempt timeout. When `None`, the client's own timeout applies.
    pub timeout: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Duration::from_millis(DEFAULT_BACKOFF_MS),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Fetch a URL via HTTP GET, retrying network failures and non-2xx answers.
///
/// # Errors
///
/// Returns the last network or non-2xx error after all attempts fail.
pub async fn fetch_with_retry(
    client: &Client,
    url: &str,
    config: &RetryConfig,
) -> std::result::Result<Response, reqwest::Error> {
    let max_attempts = config.max_attempts.max(1);

    for attempt in 1..max_attempts {
        match send(client, url, config).await {
            Ok(response) if response.status().is_success() => return Ok(response),

            Ok(response) => {
                warn!(
                    "Upstream returned {} for {} (attempt {}/{})",
                    response.status(),
                    url,
                    attempt,
                    max_attempts
                );
            }

            Err(e) => {
                warn!(
                    "Upstream fetch failed for {} (attempt {}/{}): {}",
                    url, attempt, max_attempts, e
                );
            }
        }

        tokio::time::sleep(config.backoff).await;
    }

    // Last attempt surfaces its error to the caller
    let response = send(client, url, config).await.inspect_err(|e| {
        warn!(
            "Upstream fetch failed for {} (attempt {}/{}): {}",
            url, max_attempts, max_attempts, e
        );
    })?;

    if !response.status().is_success() {
        warn!(
            "Upstream returned {} for {} (attempt {}/{})",
            response.status(),
            url,
            max_attempts,
            max_attempts
        );
    }

    response.error_for_status()
}

async fn send(
    client: &Client,
    url: &str,
    config: &RetryConfig,
) -> std::result::Result<Response, reqwest::Error> {
    let mut request = client.get(url);
    if let Some(timeout) = config.timeout {
        request = request.timeout(timeout);
    }
    request.send().await
}

/// GET `url` with retry and decode the body as JSON.
///
/// Transport failures map to `UpstreamUnavailable`, a body that does not
/// match `T` to `Decode`.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    config: &RetryConfig,
) -> Result<T> {
    let body = fetch_with_retry(client, url, config).await?.text().await?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuckError;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    fn fast(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            backoff: Duration::from_millis(1),
            timeout: None,
        }
    }

    #[test]
    fn retry_config_defaults() {
        let cfg = RetryConfig::default();
        assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cfg.backoff, Duration::from_millis(DEFAULT_BACKOFF_MS));
        assert_eq!(cfg.timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
    }

    #[tokio::test]
    async fn succeeds_on_first_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let result = fetch_with_retry(&Client::new(), &server.uri(), &fast(2)).await;
        assert_eq!(result.unwrap().text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn retries_on_server_error_then_succeeds() {
        let server = MockServer::start().await;

        // Fallback, mounted first so it has lower priority
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let result = fetch_with_retry(&Client::new(), &server.uri(), &fast(2)).await;
        assert_eq!(result.unwrap().text().await.unwrap(), "recovered");
    }

    #[tokio::test]
    async fn returns_error_after_all_retries_exhausted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        let result = fetch_with_retry(&Client::new(), &server.uri(), &fast(3)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn zero_attempts_still_tries_once() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = fetch_with_retry(&Client::new(), &server.uri(), &fast(0)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_json_decodes_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value": 7}"#))
            .mount(&server)
            .await;

        let url = format!("{}/probe", server.uri());
        let probe: Probe = fetch_json(&Client::new(), &url, &fast(1)).await.unwrap();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn fetch_json_reports_decode_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = fetch_json::<Probe>(&Client::new(), &server.uri(), &fast(1))
            .await
            .unwrap_err();
        assert!(matches!(err, PuckError::Decode(_)));
    }

    #[tokio::test]
    async fn fetch_json_reports_upstream_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = fetch_json::<Probe>(&Client::new(), &server.uri(), &fast(2))
            .await
            .unwrap_err();
        assert!(matches!(err, PuckError::UpstreamUnavailable(_)));
    }
}
