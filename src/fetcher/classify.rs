//! Attempt outcome classification
//!
//! Classification is kept pure (status code or transport fault in, verdict
//! out) so the retry policy can be tested without any network I/O.

use crate::FetchError;
use reqwest::StatusCode;
use std::error::Error as _;
use std::time::Duration;

/// Status codes that warrant another attempt: rate limiting and the
/// transient 5xx family.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Verdict on a single attempt's HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200 - the body is the result
    Success,

    /// Transient server-side condition - a fresh attempt may succeed
    Retryable,

    /// Any other status - retrying cannot change the outcome
    Fatal,
}

/// Classifies an HTTP status code
///
/// Only 200 counts as success; 429/500/502/503/504 are retryable; every
/// other status is fatal on first sight.
pub fn classify_status(status: StatusCode) -> StatusClass {
    if status == StatusCode::OK {
        StatusClass::Success
    } else if is_retryable_status(status.as_u16()) {
        StatusClass::Retryable
    } else {
        StatusClass::Fatal
    }
}

/// Returns true if the status code is in the retryable set
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Backoff delay before retry `k` (0-indexed): `2^k` seconds, uncapped
///
/// The caller bounds total backoff through the attempt budget, not through
/// a delay ceiling.
pub fn backoff_delay(retry: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(retry))
}

/// Classifies a transport-level failure into a terminal fault
///
/// Overall timeouts and connection faults (refused, reset, mid-transfer
/// disconnect) are retryable; TLS and malformed-request faults are not.
/// reqwest folds TLS failures into its connect bucket, so the source chain
/// is searched for certificate/handshake causes before `is_connect` claims
/// the fault as an ordinary connection error.
pub fn classify_transport(url: &str, source: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if source.is_timeout() {
        FetchError::Timeout { url }
    } else if is_tls_fault(&source) {
        FetchError::Tls { url, source }
    } else if source.is_connect() || source.is_body() || source.is_decode() {
        FetchError::Connection { url, source }
    } else {
        // Builder, redirect-loop, and other malformed-request faults
        FetchError::Protocol { url, source }
    }
}

/// Walks the error source chain looking for a TLS-layer cause
fn is_tls_fault(error: &reqwest::Error) -> bool {
    let mut cause = error.source();
    while let Some(inner) = cause {
        let text = inner.to_string().to_ascii_lowercase();
        if text.contains("certificate") || text.contains("handshake") || text.contains("tls") {
            return true;
        }
        cause = inner.source();
    }
    false
}
