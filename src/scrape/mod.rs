//! Scraping pipeline: fetch, extract, retry orchestration
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching with per-attempt timeouts
//! - Channel extraction from the embedded script data block
//! - The retry loop driving both

mod extractor;
mod fetcher;
mod session;

pub use extractor::{Channel, Extractor};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use session::Scraper;

use crate::config::Config;
use crate::AcegrabError;

/// Runs a complete scrape operation
///
/// Builds a scraper from the configuration and performs one run: fetch with
/// retry, then extraction.
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Vec<Channel>)` - The extracted channels; empty when the page held
///   none or the retry budget was exhausted
/// * `Err(AcegrabError)` - Failed to build the HTTP client
pub async fn scrape(config: &Config) -> Result<Vec<Channel>, AcegrabError> {
    let mut scraper = Scraper::new(config)?;
    Ok(scraper.scrape().await)
}
