use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

use crate::core::constants::{error_messages, http_status};

/// Why a single probe failed to produce a status code.
///
/// Per-URL failures are data, not control flow: they live inside a
/// [`ProbeOutcome`] and never abort sibling probes or the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The batch was cancelled before the response arrived
    Cancelled,
    /// The shared batch deadline elapsed before the response arrived
    DeadlineExceeded,
    /// The per-request client timeout fired
    Timeout(String),
    /// DNS, TCP or TLS failure while connecting
    Connect(String),
    /// The request could not be built from the URL
    InvalidUrl(String),
    /// Any other transport failure
    Request(String),
    /// The probe task panicked or was aborted
    TaskFailed(String),
}

impl ProbeError {
    /// True for both explicit cancellation and deadline expiry
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ProbeError::Cancelled | ProbeError::DeadlineExceeded)
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Cancelled => write!(f, "{}", error_messages::CANCELLED),
            ProbeError::DeadlineExceeded => write!(f, "{}", error_messages::DEADLINE_EXCEEDED),
            ProbeError::Timeout(msg) => write!(f, "request timed out: {msg}"),
            ProbeError::Connect(msg) => write!(f, "connection failed: {msg}"),
            ProbeError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            ProbeError::Request(msg) => write!(f, "request failed: {msg}"),
            ProbeError::TaskFailed(msg) => write!(f, "probe task failed: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

impl Serialize for ProbeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of checking one URL.
///
/// Exactly one of `error` and a real status code is present: a failed probe
/// carries status `0` and an error, a completed one carries the status as
/// received and no error. Fields are public for reading; build outcomes with
/// [`ProbeOutcome::success`] and [`ProbeOutcome::failure`] to keep this pair
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// The URL exactly as it was given
    pub url: String,
    /// HTTP status code, or 0 if the request never completed
    pub status_code: u16,
    /// Transport failure, set exactly when `status_code` is 0
    pub error: Option<ProbeError>,
    /// Wall time from request start to headers received or failure
    pub duration: Duration,
}

impl ProbeOutcome {
    /// A request that completed with a status line.
    pub fn success(url: impl Into<String>, status_code: u16, duration: Duration) -> Self {
        debug_assert!(status_code != http_status::NONE);
        Self {
            url: url.into(),
            status_code,
            error: None,
            duration,
        }
    }

    /// A request that never produced a status line.
    pub fn failure(url: impl Into<String>, error: ProbeError, duration: Duration) -> Self {
        Self {
            url: url.into(),
            status_code: http_status::NONE,
            error: Some(error),
            duration,
        }
    }

    /// Transport failure or a 4xx/5xx status.
    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.status_code >= http_status::ERROR_THRESHOLD
    }

    /// 2xx or 3xx without a transport error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
            && (http_status::OK..http_status::ERROR_THRESHOLD).contains(&self.status_code)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{} - {}", &self.url, err),
            None => write!(f, "{} - {}", self.status_code, &self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_probe_outcome__success_has_no_error() {
        let outcome = ProbeOutcome::success("http://a/ok", 200, Duration::from_millis(5));

        assert_eq!(outcome.status_code, 200);
        assert!(outcome.error.is_none());
        assert!(outcome.is_success());
        assert!(!outcome.has_error());
    }

    #[test]
    fn test_probe_outcome__failure_has_zero_status() {
        let outcome = ProbeOutcome::failure(
            "http://a/down",
            ProbeError::Connect("refused".to_string()),
            Duration::from_millis(5),
        );

        assert_eq!(outcome.status_code, 0);
        assert!(outcome.error.is_some());
        assert!(outcome.has_error());
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_probe_outcome__has_error_by_status() {
        let cases = [
            (200, false),
            (204, false),
            (301, false),
            (399, false),
            (400, true),
            (404, true),
            (500, true),
            (599, true),
        ];

        for (status, expected) in cases {
            let outcome = ProbeOutcome::success("http://a", status, Duration::ZERO);
            assert_eq!(outcome.has_error(), expected, "status {status}");
        }
    }

    #[test]
    fn test_probe_outcome__to_string() {
        let ok = ProbeOutcome::success("http://some-domain.com", 200, Duration::ZERO);
        assert_eq!(ok.to_string(), "200 - http://some-domain.com");

        let failed = ProbeOutcome::failure(
            "http://some-domain.com",
            ProbeError::DeadlineExceeded,
            Duration::ZERO,
        );
        assert_eq!(
            failed.to_string(),
            "http://some-domain.com - context deadline exceeded"
        );
    }

    #[test]
    fn test_probe_error__is_cancellation() {
        assert!(ProbeError::Cancelled.is_cancellation());
        assert!(ProbeError::DeadlineExceeded.is_cancellation());
        assert!(!ProbeError::Timeout("x".to_string()).is_cancellation());
    }

    #[test]
    fn test_probe_error__serializes_as_message() {
        let json = serde_json::to_string(&ProbeError::Connect("dns error".to_string())).unwrap();
        assert_eq!(json, "\"connection failed: dns error\"");
    }
}
