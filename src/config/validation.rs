use crate::config::types::{Config, ExtractConfig, FetchConfig, OutputConfig, TimeoutSettings};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_extract_config(&config.extract)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    // retries of 0 is accepted and normalized to a single attempt by the
    // fetcher; the upper bound keeps the uncapped backoff schedule sane
    if config.retries > 10 {
        return Err(ConfigError::Validation(format!(
            "retries must be at most 10, got {}",
            config.retries
        )));
    }

    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be empty".to_string(),
            ));
        }
    }

    validate_timeout_settings(&config.timeout)?;

    Ok(())
}

/// Validates timeout settings
fn validate_timeout_settings(settings: &TimeoutSettings) -> Result<(), ConfigError> {
    let fields = [
        ("timeout.total", settings.total),
        ("timeout.connect", settings.connect),
        ("timeout.socket-connect", settings.socket_connect),
        ("timeout.socket-read", settings.socket_read),
    ];

    for (name, value) in fields {
        if value < 1 {
            return Err(ConfigError::Validation(format!(
                "{} must be >= 1 second, got {}",
                name, value
            )));
        }
    }

    Ok(())
}

/// Validates extraction configuration
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    if config.title_selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector(
            "title-selector cannot be empty".to_string(),
        ));
    }

    Selector::parse(&config.title_selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("'{}': {}", config.title_selector, e))
    })?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
