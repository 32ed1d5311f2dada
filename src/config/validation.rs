use crate::config::types::{Config, OutputConfig, ScraperConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "url must use the http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.timeout_increment_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-increment-secs must be >= 1, got {}",
            config.timeout_increment_secs
        )));
    }

    if config.retries > 20 {
        return Err(ConfigError::Validation(format!(
            "retries must be <= 20, got {}",
            config.retries
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.channels_path.is_empty() {
        return Err(ConfigError::Validation(
            "channels-path cannot be empty".to_string(),
        ));
    }

    if config.playlist_path.is_empty() {
        return Err(ConfigError::Validation(
            "playlist-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
