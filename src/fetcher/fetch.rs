//! The resilient fetch loop
//!
//! Turns (url, retry budget, timeout budget) into either a page body or a
//! classified terminal fault. Invoked once per program run; holds no state
//! across calls.

use crate::config::FetchConfig;
use crate::fetcher::classify::{backoff_delay, classify_status, classify_transport, StatusClass};
use crate::fetcher::client::{build_http_client, default_user_agent};
use crate::FetchError;
use std::time::Duration;

/// Per-phase timeout budget for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Bounds the whole request, connect through body
    pub total: Duration,

    /// Bounds connection establishment
    pub connect: Duration,

    /// Bounds the TCP portion of connection establishment
    pub socket_connect: Duration,

    /// Bounds reads on the established socket
    pub socket_read: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            total: Duration::from_secs(30),
            connect: Duration::from_secs(10),
            socket_connect: Duration::from_secs(10),
            socket_read: Duration::from_secs(10),
        }
    }
}

/// A single fetch invocation, constructed once and never mutated
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Absolute URL to fetch
    pub url: String,

    /// Total number of attempts; 0 behaves as 1
    pub max_attempts: u32,

    /// Per-phase timeout budget
    pub timeouts: TimeoutConfig,

    /// User agent sent with every attempt
    pub user_agent: String,
}

impl FetchRequest {
    /// Creates a request with default timeouts and user agent
    ///
    /// A `max_attempts` of 0 is normalized to 1: a request always gets at
    /// least one attempt.
    pub fn new(url: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            url: url.into(),
            max_attempts: max_attempts.max(1),
            timeouts: TimeoutConfig::default(),
            user_agent: default_user_agent(),
        }
    }

    /// Replaces the timeout budget
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Replaces the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds a request from the loaded fetch configuration
    pub fn from_config(config: &FetchConfig) -> Self {
        let mut request = Self::new(&config.base_url, config.retries)
            .with_timeouts(config.timeout.to_timeout_config());
        if let Some(agent) = &config.user_agent {
            request = request.with_user_agent(agent);
        }
        request
    }
}

/// Fetches a URL with bounded retries and exponential backoff
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 200 | Return body immediately |
/// | HTTP 429, 500, 502, 503, 504 | Back off and retry; terminal on last attempt |
/// | Any other status | Terminal immediately, never retried |
/// | Connection fault, overall timeout | Back off and retry; terminal on last attempt |
/// | TLS or malformed-request fault | Terminal immediately, never retried |
///
/// The delay before retry `k` (0-indexed) is `2^k` seconds, and the delay
/// only occurs between attempts, never after the final one. Each attempt
/// gets its own client; no connection state is shared across attempts.
///
/// # Arguments
///
/// * `request` - The fetch invocation to run
///
/// # Returns
///
/// * `Ok(String)` - The page body from the first 200 response
/// * `Err(FetchError)` - The classified terminal fault
pub async fn fetch(request: &FetchRequest) -> Result<String, FetchError> {
    let max_attempts = request.max_attempts.max(1);
    let mut attempt = 0u32;

    loop {
        attempt += 1;

        match attempt_once(request).await {
            Ok(body) => {
                tracing::debug!("Fetched {} on attempt {}", request.url, attempt);
                return Ok(body);
            }
            Err(fault) if fault.is_retryable() && attempt < max_attempts => {
                let delay = backoff_delay(attempt - 1);
                tracing::debug!(
                    "Attempt {}/{} for {} failed ({}), backing off {}s",
                    attempt,
                    max_attempts,
                    request.url,
                    fault,
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
            }
            Err(fault) => {
                tracing::warn!(
                    "Fetch of {} failed terminally on attempt {}: {}",
                    request.url,
                    attempt,
                    fault
                );
                return Err(fault);
            }
        }
    }
}

/// Runs one attempt: fresh client, one GET, classified outcome
async fn attempt_once(request: &FetchRequest) -> Result<String, FetchError> {
    // A client that cannot be built is a malformed request, not a
    // transient fault
    let client = build_http_client(&request.timeouts, &request.user_agent).map_err(|source| {
        FetchError::Protocol {
            url: request.url.clone(),
            source,
        }
    })?;

    let response = match client.get(&request.url).send().await {
        Ok(response) => response,
        Err(source) => return Err(classify_transport(&request.url, source)),
    };

    let status = response.status();
    match classify_status(status) {
        StatusClass::Success => response
            .text()
            .await
            .map_err(|source| classify_transport(&request.url, source)),
        StatusClass::Retryable | StatusClass::Fatal => Err(FetchError::Status {
            url: request.url.clone(),
            status: status.as_u16(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_attempts_normalized_to_one() {
        let request = FetchRequest::new("https://example.com/", 0);
        assert_eq!(request.max_attempts, 1);
    }

    #[test]
    fn test_positive_attempts_preserved() {
        let request = FetchRequest::new("https://example.com/", 5);
        assert_eq!(request.max_attempts, 5);
    }

    #[test]
    fn test_default_timeouts() {
        let timeouts = TimeoutConfig::default();
        assert_eq!(timeouts.total, Duration::from_secs(30));
        assert_eq!(timeouts.connect, Duration::from_secs(10));
        assert_eq!(timeouts.socket_connect, Duration::from_secs(10));
        assert_eq!(timeouts.socket_read, Duration::from_secs(10));
    }

    #[test]
    fn test_with_timeouts_replaces_budget() {
        let timeouts = TimeoutConfig {
            total: Duration::from_secs(5),
            connect: Duration::from_secs(2),
            socket_connect: Duration::from_secs(2),
            socket_read: Duration::from_secs(3),
        };
        let request = FetchRequest::new("https://example.com/", 3).with_timeouts(timeouts);
        assert_eq!(request.timeouts, timeouts);
    }

    #[test]
    fn test_from_config() {
        use crate::config::{FetchConfig, TimeoutSettings};

        let config = FetchConfig {
            base_url: "https://example.com/articles".to_string(),
            retries: 4,
            user_agent: Some("custom-agent/2.0".to_string()),
            timeout: TimeoutSettings {
                total: 15,
                connect: 5,
                socket_connect: 5,
                socket_read: 5,
            },
        };

        let request = FetchRequest::from_config(&config);
        assert_eq!(request.url, "https://example.com/articles");
        assert_eq!(request.max_attempts, 4);
        assert_eq!(request.user_agent, "custom-agent/2.0");
        assert_eq!(request.timeouts.total, Duration::from_secs(15));
    }

    #[test]
    fn test_from_config_defaults_user_agent() {
        use crate::config::{FetchConfig, TimeoutSettings};

        let config = FetchConfig {
            base_url: "https://example.com/".to_string(),
            retries: 1,
            user_agent: None,
            timeout: TimeoutSettings::default(),
        };

        let request = FetchRequest::from_config(&config);
        assert!(request.user_agent.starts_with("shiori/"));
    }
}
