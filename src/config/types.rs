use crate::fetcher::TimeoutConfig;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Shiori
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub extract: ExtractConfig,
    pub output: OutputConfig,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// The page to fetch
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Total number of fetch attempts; 0 behaves as 1
    pub retries: u32,

    /// Overrides the default user agent string
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,

    /// Per-phase timeout budget, in whole seconds
    #[serde(default)]
    pub timeout: TimeoutSettings,
}

/// Timeout values as configured, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimeoutSettings {
    /// Bounds the whole request
    #[serde(default = "default_total_timeout")]
    pub total: u64,

    /// Bounds connection establishment
    #[serde(default = "default_phase_timeout")]
    pub connect: u64,

    /// Bounds the TCP portion of connection establishment
    #[serde(rename = "socket-connect", default = "default_phase_timeout")]
    pub socket_connect: u64,

    /// Bounds reads on the established socket
    #[serde(rename = "socket-read", default = "default_phase_timeout")]
    pub socket_read: u64,
}

fn default_total_timeout() -> u64 {
    30
}

fn default_phase_timeout() -> u64 {
    10
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            total: default_total_timeout(),
            connect: default_phase_timeout(),
            socket_connect: default_phase_timeout(),
            socket_read: default_phase_timeout(),
        }
    }
}

impl TimeoutSettings {
    /// Converts configured seconds into the fetcher's duration budget
    pub fn to_timeout_config(&self) -> TimeoutConfig {
        TimeoutConfig {
            total: Duration::from_secs(self.total),
            connect: Duration::from_secs(self.connect),
            socket_connect: Duration::from_secs(self.socket_connect),
            socket_read: Duration::from_secs(self.socket_read),
        }
    }
}

/// Title extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// CSS selector matching article title elements
    #[serde(rename = "title-selector")]
    pub title_selector: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the JSON title document is written to
    #[serde(rename = "json-path")]
    pub json_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_settings_defaults() {
        let settings = TimeoutSettings::default();
        assert_eq!(settings.total, 30);
        assert_eq!(settings.connect, 10);
        assert_eq!(settings.socket_connect, 10);
        assert_eq!(settings.socket_read, 10);
    }

    #[test]
    fn test_to_timeout_config() {
        let settings = TimeoutSettings {
            total: 20,
            connect: 5,
            socket_connect: 6,
            socket_read: 7,
        };
        let timeouts = settings.to_timeout_config();
        assert_eq!(timeouts.total, Duration::from_secs(20));
        assert_eq!(timeouts.connect, Duration::from_secs(5));
        assert_eq!(timeouts.socket_connect, Duration::from_secs(6));
        assert_eq!(timeouts.socket_read, Duration::from_secs(7));
    }
}
