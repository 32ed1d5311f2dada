//! Scrape session and retry orchestration
//!
//! One [`Scraper`] instance performs one run: a bounded retry loop around
//! the fetch, with extraction happening inside the successful attempt. The
//! attempt state (remaining retries plus the current timeout) is threaded
//! through the loop as an explicit value rather than living on the scraper.

use crate::config::Config;
use crate::scrape::extractor::{Channel, Extractor};
use crate::scrape::fetcher::{build_http_client, fetch_page};
use reqwest::Client;
use std::time::Duration;

/// Attempt state threaded through the retry loop
///
/// The timeout grows monotonically within one scrape and is never reset
/// between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RetryState {
    retries_left: u32,
    timeout: Duration,
}

impl RetryState {
    fn new(retries: u32, timeout: Duration) -> Self {
        RetryState {
            retries_left: retries,
            timeout,
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn exhausted(&self) -> bool {
        self.retries_left == 0
    }

    /// Consumes one retry and widens the timeout for the next attempt
    fn backoff(&mut self, increment: Duration) {
        debug_assert!(!self.exhausted());
        self.retries_left -= 1;
        self.timeout += increment;
    }
}

/// One scrape run: fetch with retry, then extract
///
/// Owns the HTTP client and the extractor (and with it the seen-identifier
/// set), so all dedup state is scoped to this instance. Construct fresh per
/// run.
pub struct Scraper {
    client: Client,
    url: String,
    timeout: Duration,
    retries: u32,
    timeout_increment: Duration,
    extractor: Extractor,
}

impl Scraper {
    /// Creates a scraper from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to scrape
    /// * `Err(reqwest::Error)` - Failed to build the HTTP client
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Scraper {
            client: build_http_client()?,
            url: config.scraper.url.clone(),
            timeout: Duration::from_secs(config.scraper.timeout_secs),
            retries: config.scraper.retries,
            timeout_increment: Duration::from_secs(config.scraper.timeout_increment_secs),
            extractor: Extractor::new(),
        })
    }

    /// Fetches the configured page and extracts its channels
    ///
    /// A failed fetch is retried up to the configured retry count, with the
    /// timeout widened by the configured increment before each retry (so
    /// `retries = 3` allows four attempts in total). A successful fetch ends
    /// the loop immediately: an empty extraction from a reachable page is a
    /// legitimate result, not a retryable failure.
    ///
    /// # Returns
    ///
    /// The extracted channels, or an empty vector when the retry budget is
    /// exhausted. Fetch failures never surface as errors from this method.
    pub async fn scrape(&mut self) -> Vec<Channel> {
        let mut state = RetryState::new(self.retries, self.timeout);

        loop {
            match fetch_page(&self.client, &self.url, state.timeout()).await {
                Ok(body) => {
                    let channels = self.extractor.extract(&body);
                    tracing::info!("Successfully extracted {} channels", channels.len());
                    return channels;
                }
                Err(e) => {
                    tracing::error!("Error scraping {}: {}", self.url, e);

                    if state.exhausted() {
                        tracing::error!("Max retries reached");
                        return Vec::new();
                    }

                    state.backoff(self.timeout_increment);
                    tracing::warn!(
                        "Retrying with {}s timeout ({} retries left)",
                        state.timeout().as_secs(),
                        state.retries_left
                    );
                }
            }
        }
    }

    /// The URL this scraper targets
    pub fn url(&self) -> &str {
        &self.url
    }
}
