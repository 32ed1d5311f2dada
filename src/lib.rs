//! Acegrab: an Acestream playlist scraper
//!
//! This crate fetches a single HTML page, extracts `acestream://` channel
//! links embedded in an inline script data block, deduplicates them by
//! stream identifier, and writes them out as M3U playlists.

pub mod config;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for Acegrab operations
#[derive(Debug, Error)]
pub enum AcegrabError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] scrape::FetchError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Acegrab operations
pub type Result<T> = std::result::Result<T, AcegrabError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scrape::{Channel, Scraper};
