//! Output module for persisting extracted titles
//!
//! Writes a JSON document wrapping the title list with provenance about
//! the fetch that produced it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize titles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The persisted JSON document
#[derive(Debug, Clone, Serialize)]
pub struct TitleDocument {
    /// The page the titles were extracted from
    pub url: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,

    /// Number of extracted titles
    pub count: usize,

    /// The titles, in document order
    pub titles: Vec<String>,
}

impl TitleDocument {
    /// Creates a document stamped with the current time
    pub fn new(url: impl Into<String>, titles: Vec<String>) -> Self {
        Self {
            url: url.into(),
            fetched_at: Utc::now(),
            count: titles.len(),
            titles,
        }
    }
}

/// Writes the document as pretty-printed JSON
///
/// # Arguments
///
/// * `document` - The title document to persist
/// * `path` - Destination file; overwritten if it exists
pub fn write_titles(document: &TitleDocument, path: &Path) -> OutputResult<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
