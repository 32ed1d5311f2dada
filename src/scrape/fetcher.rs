//! HTTP fetcher implementation
//!
//! This module handles the single HTTP request the scraper makes per
//! attempt, including:
//! - Building an HTTP client with a browser-like header set
//! - GET requests with a per-attempt timeout
//! - Error classification (timeout, connect, status, transport)

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Accept header advertising an HTML/XML/image preference, matching what a
/// desktop browser sends. Together with the user agent below this keeps
/// basic bot filters from rejecting the request.
const ACCEPT_HEADER: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Desktop browser user agent string
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Errors from a single fetch attempt
///
/// Every variant is recoverable by the retry loop in [`crate::scrape::Scraper`];
/// none of them aborts the run on its own.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out for {url}")]
    Timeout { url: String },

    #[error("connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Builds the HTTP client used for all fetch attempts
///
/// The per-attempt timeout is not set here; it varies between attempts and
/// is applied per request by [`fetch_page`].
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));

    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .default_headers(headers)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Issues a single GET with the given timeout. Redirects are followed (the
/// default source URL is an archive.org download link that redirects to a
/// mirror node).
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `timeout` - Overall timeout for this attempt
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Timeout, connection failure, non-2xx status, or
///   transport error
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    tracing::info!("Fetching content from: {}", url);

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_request_error(url, e))?;

    tracing::info!("Successfully fetched content ({} bytes)", body.len());
    Ok(body)
}

/// Classifies a reqwest error into the fetch error taxonomy
fn classify_request_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
