//! Title extraction from fetched HTML
//!
//! The fetcher hands over the raw page body; this module selects the
//! article title elements with the configured CSS selector and collects
//! their text.

use crate::ExtractError;
use scraper::{Html, Selector};

/// Extracts article titles matching a CSS selector
///
/// Parses the document, selects every element matching `selector`, and
/// collects each element's text content (including nested elements) with
/// surrounding whitespace trimmed. Empty matches are skipped. Document
/// order is preserved and duplicates are kept.
///
/// # Arguments
///
/// * `html` - The page body to parse
/// * `selector` - CSS selector matching title elements
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The extracted titles
/// * `Err(ExtractError)` - The selector could not be parsed
///
/// # Example
///
/// ```
/// use shiori::extract::extract_titles;
///
/// let html = r#"<html><body><a class="tm-title__link"><span>First post</span></a></body></html>"#;
/// let titles = extract_titles(html, "a.tm-title__link").unwrap();
/// assert_eq!(titles, vec!["First post".to_string()]);
/// ```
pub fn extract_titles(html: &str, selector: &str) -> Result<Vec<String>, ExtractError> {
    let parsed = Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);

    Ok(document
        .select(&parsed)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .collect())
}
