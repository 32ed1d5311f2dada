use serde::Deserialize;

/// Main configuration structure for Acegrab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Page to fetch channel links from
    #[serde(default = "default_url")]
    pub url: String,

    /// Timeout for the first fetch attempt (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of retries after the first failed attempt
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Added to the timeout before each retry (seconds)
    #[serde(
        rename = "timeout-increment-secs",
        default = "default_timeout_increment_secs"
    )]
    pub timeout_increment_secs: u64,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the legacy playlist pointing at the local relay
    #[serde(rename = "channels-path", default = "default_channels_path")]
    pub channels_path: String,

    /// Path for the native acestream:// playlist
    #[serde(rename = "playlist-path", default = "default_playlist_path")]
    pub playlist_path: String,
}

fn default_url() -> String {
    "https://archive.org/download/abcd_20240416/output.html".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retries() -> u32 {
    3
}

fn default_timeout_increment_secs() -> u64 {
    5
}

fn default_channels_path() -> String {
    "acestream_channels.txt".to_string()
}

fn default_playlist_path() -> String {
    "acestream_playlist.m3u".to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            timeout_increment_secs: default_timeout_increment_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            channels_path: default_channels_path(),
            playlist_path: default_playlist_path(),
        }
    }
}
