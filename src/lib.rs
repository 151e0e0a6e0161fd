//! Shiori: a resilient article title harvester
//!
//! This crate fetches a single web page with bounded retries and exponential
//! backoff, extracts article titles via a CSS selector, and persists them as
//! a JSON document.

pub mod config;
pub mod extract;
pub mod fetcher;
pub mod harvest;
pub mod output;

use thiserror::Error;

/// Main error type for Shiori operations
#[derive(Debug, Error)]
pub enum ShioriError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid title selector: {0}")]
    InvalidSelector(String),
}

/// Terminal fault raised by the fetcher
///
/// Exactly one of these is produced when a fetch call fails, carrying the
/// URL and the classification of the last observed fault. Which variants
/// are retried before surfacing is decided by [`FetchError::is_retryable`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Connection error for {url}: {source}")]
    Connection { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("TLS error for {url}: {source}")]
    Tls { url: String, source: reqwest::Error },

    #[error("Protocol error for {url}: {source}")]
    Protocol { url: String, source: reqwest::Error },
}

impl FetchError {
    /// Returns the HTTP status code, if this fault carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the URL the failing request was issued against
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. }
            | Self::Connection { url, .. }
            | Self::Timeout { url }
            | Self::Tls { url, .. }
            | Self::Protocol { url, .. } => url,
        }
    }

    /// Returns true if a fresh attempt against the same URL may succeed
    ///
    /// Server-side status faults (429 and the transient 5xx family),
    /// connection-level faults, and overall timeouts are retryable. TLS and
    /// protocol faults are not, and neither is any other status code.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => fetcher::is_retryable_status(*status),
            Self::Connection { .. } | Self::Timeout { .. } => true,
            Self::Tls { .. } | Self::Protocol { .. } => false,
        }
    }
}

/// Title-extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Result type alias for Shiori operations
pub type Result<T> = std::result::Result<T, ShioriError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::extract_titles;
pub use fetcher::{fetch, FetchRequest, TimeoutConfig};
pub use harvest::harvest;
pub use output::TitleDocument;
