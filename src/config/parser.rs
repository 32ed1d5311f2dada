use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use acegrab::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Target URL: {}", config.scraper.url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[scraper]
url = "https://example.com/channels.html"
timeout-secs = 20
retries = 2
timeout-increment-secs = 10

[output]
channels-path = "./channels.txt"
playlist-path = "./playlist.m3u"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scraper.url, "https://example.com/channels.html");
        assert_eq!(config.scraper.timeout_secs, 20);
        assert_eq!(config.scraper.retries, 2);
        assert_eq!(config.scraper.timeout_increment_secs, 10);
        assert_eq!(config.output.channels_path, "./channels.txt");
        assert_eq!(config.output.playlist_path, "./playlist.m3u");
    }

    #[test]
    fn test_load_config_uses_defaults_for_missing_fields() {
        let config_content = r#"
[scraper]
url = "https://example.com/channels.html"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.scraper.timeout_secs, 10);
        assert_eq!(config.scraper.retries, 3);
        assert_eq!(config.scraper.timeout_increment_secs, 5);
        assert_eq!(config.output.channels_path, "acestream_channels.txt");
        assert_eq!(config.output.playlist_path, "acestream_playlist.m3u");
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.scraper.url,
            "https://archive.org/download/abcd_20240416/output.html"
        );
        assert_eq!(config.scraper.timeout_secs, 10);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[scraper]
url = "https://example.com/channels.html"
timeout-secs = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
