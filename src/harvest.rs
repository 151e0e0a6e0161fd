//! Harvest pipeline orchestration
//!
//! Ties the collaborators together: fetch the configured page, extract
//! titles, persist the JSON document.

use crate::config::Config;
use crate::extract::extract_titles;
use crate::fetcher::{fetch, FetchRequest};
use crate::output::{write_titles, TitleDocument};
use crate::Result;
use std::path::Path;

/// Runs the fetch → extract → write pipeline
///
/// This is the main entry point for a harvest run. It will:
/// 1. Build a fetch request from the configuration
/// 2. Fetch the page with bounded retries
/// 3. Extract titles with the configured selector
/// 4. Write the JSON title document
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(TitleDocument)` - The persisted document, for reporting
/// * `Err(ShioriError)` - Any stage failed
pub async fn harvest(config: &Config) -> Result<TitleDocument> {
    let request = FetchRequest::from_config(&config.fetch);

    tracing::info!(
        "Fetching {} (max attempts: {})",
        request.url,
        request.max_attempts
    );
    let body = fetch(&request).await?;
    tracing::info!("Fetched {} bytes", body.len());

    let titles = extract_titles(&body, &config.extract.title_selector)?;
    if titles.is_empty() {
        tracing::warn!(
            "No titles matched selector '{}'",
            config.extract.title_selector
        );
    } else {
        tracing::info!("Extracted {} titles", titles.len());
    }

    let document = TitleDocument::new(&config.fetch.base_url, titles);
    write_titles(&document, Path::new(&config.output.json_path))?;

    Ok(document)
}
