//! HTTP client construction
//!
//! Each fetch attempt gets its own client so no connection state survives
//! between attempts.

use crate::fetcher::TimeoutConfig;
use reqwest::Client;

/// Builds an HTTP client for a single attempt
///
/// The four-phase timeout budget maps onto reqwest's three knobs: `total`
/// bounds the whole request, `socket_read` bounds reads on the established
/// socket, and since reqwest exposes a single connection-establishment
/// phase (DNS, TCP, and TLS together), the tighter of `connect` and
/// `socket_connect` bounds it.
///
/// # Arguments
///
/// * `timeouts` - The per-phase timeout budget
/// * `user_agent` - The user agent string to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    timeouts: &TimeoutConfig,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    let connect = timeouts.connect.min(timeouts.socket_connect);

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeouts.total)
        .connect_timeout(connect)
        .read_timeout(timeouts.socket_read)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Default user agent: crate name and version
pub(crate) fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&TimeoutConfig::default(), &default_user_agent());
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_user_agent_format() {
        let agent = default_user_agent();
        assert!(agent.starts_with("shiori/"));
    }
}
