use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::Config;
use crate::core::constants::{client, http_status, timeouts};
use crate::core::{ProbeError, ProbeOutcome, Result};
use crate::reporting::logging;
use crate::validation::context::CheckContext;

/// Checks a single URL once.
///
/// Implementations never fail: transport problems and cancellation are
/// reported inside the returned outcome.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str, ctx: &CheckContext) -> ProbeOutcome;
}

/// Probe that issues one HTTP GET through a shared client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the shared client from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_client(config.request_timeout_duration(), config.user_agent())?;
        Ok(Self::new(client))
    }
}

/// Client shared by every probe of a run.
///
/// `request_timeout` bounds each request on its own, independently of the
/// batch deadline carried by the [`CheckContext`].
pub fn build_client(request_timeout: Duration, user_agent: &str) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(request_timeout)
        .redirect(Policy::limited(client::MAX_REDIRECTS))
        .user_agent(user_agent)
        .pool_idle_timeout(Duration::from_secs(timeouts::POOL_IDLE_TIMEOUT_SECONDS))
        .tcp_keepalive(Duration::from_secs(timeouts::TCP_KEEPALIVE_SECONDS))
        .build()?;
    Ok(client)
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &str, ctx: &CheckContext) -> ProbeOutcome {
        let start = Instant::now();

        let result = tokio::select! {
            biased;
            reason = ctx.cancelled() => Err(ProbeError::from(reason)),
            response = self.client.get(url).send() => response.map_err(classify_error),
        };

        // The body is never read; dropping the response releases it.
        let outcome = match result {
            Ok(response) => outcome_for_status(url, response.status().as_u16(), start.elapsed()),
            Err(err) => ProbeOutcome::failure(url, err, start.elapsed()),
        };

        logging::log_outcome(&outcome);
        outcome
    }
}

/// Outcome for a received status line.
///
/// The HTTP parser accepts any three-digit code, but only 100..=599 are
/// reported as statuses; anything else is a malformed response.
pub fn outcome_for_status(url: &str, status_code: u16, duration: Duration) -> ProbeOutcome {
    if (http_status::LOWER_BOUND..http_status::UPPER_BOUND).contains(&status_code) {
        ProbeOutcome::success(url, status_code, duration)
    } else {
        ProbeOutcome::failure(
            url,
            ProbeError::Request(format!("invalid HTTP status code {status_code}")),
            duration,
        )
    }
}

/// Map a reqwest failure onto the per-URL error taxonomy.
pub fn classify_error(err: reqwest::Error) -> ProbeError {
    let description = cause_chain(&err).unwrap_or_else(|| err.to_string());

    if err.is_builder() {
        ProbeError::InvalidUrl(description)
    } else if err.is_timeout() {
        ProbeError::Timeout(description)
    } else if err.is_connect() {
        ProbeError::Connect(description)
    } else {
        ProbeError::Request(description)
    }
}

/// Every underlying cause joined with `: `, outermost first.
///
/// The reqwest error itself only names the URL, so it is skipped.
fn cause_chain(err: &reqwest::Error) -> Option<String> {
    let mut causes: Vec<String> = Vec::new();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let message = cause.to_string();
        if !causes.last().is_some_and(|last| last.ends_with(&message)) {
            causes.push(message);
        }
        source = cause.source();
    }
    (!causes.is_empty()).then(|| causes.join(": "))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;
    use tokio::net::TcpListener;

    fn test_probe(request_timeout: Duration) -> HttpProbe {
        HttpProbe::new(build_client(request_timeout, client::DEFAULT_USER_AGENT).unwrap())
    }

    /// Accepts connections and never answers them.
    async fn silent_server() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        (format!("http://{addr}/slow"), handle)
    }

    #[tokio::test]
    async fn test_probe__reports_status_codes() {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create_async().await;
        let _m500 = server.mock("GET", "/500").with_status(500).create_async().await;
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));

        for status in [200u16, 404, 500] {
            let url = format!("{}/{status}", server.url());
            let outcome = probe.probe(&url, &ctx).await;

            assert_eq!(outcome.url, url);
            assert_eq!(outcome.status_code, status);
            assert_eq!(outcome.error, None);
        }
    }

    #[tokio::test]
    async fn test_probe__sends_user_agent() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/ua")
            .match_header("user-agent", client::DEFAULT_USER_AGENT)
            .with_status(204)
            .create_async()
            .await;
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));

        let outcome = probe.probe(&format!("{}/ua", server.url()), &ctx).await;

        assert_eq!(outcome.status_code, 204);
    }

    #[tokio::test]
    async fn test_probe__handles_not_available_url() {
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));
        // Port 1 on localhost refuses connections
        let endpoint = "http://127.0.0.1:1/unreachable";

        let outcome = probe.probe(endpoint, &ctx).await;

        assert_eq!(outcome.status_code, 0);
        assert!(matches!(outcome.error, Some(ProbeError::Connect(_))));
    }

    #[tokio::test]
    async fn test_probe__connect_error_names_root_cause() {
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));

        let outcome = probe.probe("http://127.0.0.1:1/refused", &ctx).await;

        let message = outcome.error.map(|e| e.to_string()).unwrap_or_default();
        assert!(
            message.to_lowercase().contains("refused"),
            "unexpected message: {message}"
        );
    }

    #[tokio::test]
    async fn test_probe__handles_malformed_url() {
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));

        let outcome = probe.probe("not a url", &ctx).await;

        assert_eq!(outcome.status_code, 0);
        assert!(matches!(outcome.error, Some(ProbeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_probe__aborts_at_batch_deadline() {
        let (url, server) = silent_server().await;
        let probe = test_probe(Duration::from_secs(30));
        let ctx = CheckContext::with_timeout(Duration::from_millis(200));

        let outcome = probe.probe(&url, &ctx).await;

        assert_eq!(outcome.status_code, 0);
        assert_eq!(outcome.error, Some(ProbeError::DeadlineExceeded));
        assert!(outcome.duration >= Duration::from_millis(150));
        assert!(outcome.duration < Duration::from_secs(5));
        server.abort();
    }

    #[tokio::test]
    async fn test_probe__request_timeout_is_independent_of_deadline() {
        let (url, server) = silent_server().await;
        let probe = test_probe(Duration::from_millis(200));
        let ctx = CheckContext::with_timeout(Duration::from_secs(30));

        let outcome = probe.probe(&url, &ctx).await;

        assert_eq!(outcome.status_code, 0);
        assert!(matches!(outcome.error, Some(ProbeError::Timeout(_))));
        server.abort();
    }

    #[tokio::test]
    async fn test_probe__when_context_already_cancelled() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/200").with_status(200).create_async().await;
        let probe = test_probe(Duration::from_secs(5));
        let ctx = CheckContext::with_timeout(Duration::from_secs(5));
        ctx.cancel();

        let outcome = probe.probe(&format!("{}/200", server.url()), &ctx).await;

        assert_eq!(outcome.status_code, 0);
        assert_eq!(outcome.error, Some(ProbeError::Cancelled));
    }

    #[test]
    fn test_outcome_for_status__rejects_out_of_range_codes() {
        for status in [100u16, 200, 404, 599] {
            let outcome = outcome_for_status("http://a", status, Duration::ZERO);
            assert_eq!(outcome.status_code, status);
            assert_eq!(outcome.error, None);
        }

        for status in [600u16, 799, 999] {
            let outcome = outcome_for_status("http://a", status, Duration::ZERO);
            assert_eq!(outcome.status_code, 0);
            assert_eq!(
                outcome.error,
                Some(ProbeError::Request(format!("invalid HTTP status code {status}")))
            );
            assert!(outcome.has_error());
        }
    }

    #[tokio::test]
    async fn test_from_config__builds_client() {
        let config = Config {
            request_timeout: Some(2),
            user_agent: Some("custom/1.0".to_string()),
            ..Config::for_url("http://example.com")
        };

        assert!(HttpProbe::from_config(&config).is_ok());
    }
}
