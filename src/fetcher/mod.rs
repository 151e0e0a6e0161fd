//! Resilient single-URL fetching
//!
//! This module contains the core fetch logic, including:
//! - Building a fresh HTTP client per attempt
//! - Status and transport-fault classification
//! - Bounded retries with exponential backoff
//! - Per-phase timeout configuration

mod classify;
mod client;
mod fetch;

pub use classify::{
    backoff_delay, classify_status, is_retryable_status, StatusClass, RETRYABLE_STATUSES,
};
pub use client::build_http_client;
pub use fetch::{fetch, FetchRequest, TimeoutConfig};
