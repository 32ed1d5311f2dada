//! Acegrab main entry point
//!
//! This is the command-line interface for the Acegrab playlist scraper.

use acegrab::config::{load_config, validate, Config};
use acegrab::output::{print_summary, write_legacy_playlist, write_native_playlist};
use acegrab::scrape::scrape;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Acegrab: an Acestream playlist scraper
///
/// Acegrab fetches a single HTML page, extracts the acestream:// channel
/// links embedded in its script data, and writes them out as two M3U
/// playlists: one pointing at a local playback engine and one using the
/// native URI scheme.
#[derive(Parser, Debug)]
#[command(name = "acegrab")]
#[command(version = "1.0.0")]
#[command(about = "Scrapes acestream channel links into M3U playlists", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the page URL to scrape
    #[arg(long)]
    url: Option<String>,

    /// Override the first-attempt timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Override the number of retries after a failed fetch
    #[arg(long)]
    retries: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("acegrab=info,warn"),
            1 => EnvFilter::new("acegrab=debug,info"),
            2 => EnvFilter::new("acegrab=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration and applies CLI overrides
///
/// Overrides are re-validated: a valid file combined with, say, a zero
/// `--timeout-secs` is still rejected.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.url {
        config.scraper.url = url.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.scraper.timeout_secs = timeout_secs;
    }
    if let Some(retries) = cli.retries {
        config.scraper.retries = retries;
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Acegrab Dry Run ===\n");

    println!("Scraper Configuration:");
    println!("  URL: {}", config.scraper.url);
    println!("  Timeout: {}s", config.scraper.timeout_secs);
    println!("  Retries: {}", config.scraper.retries);
    println!(
        "  Timeout increment: {}s",
        config.scraper.timeout_increment_secs
    );

    println!("\nOutput:");
    println!("  Legacy playlist: {}", config.output.channels_path);
    println!("  Native playlist: {}", config.output.playlist_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    let channels = scrape(&config).await.context("failed to start scraper")?;

    print_summary(&channels);

    // Nothing found means nothing to write; not a failure
    if channels.is_empty() {
        return Ok(());
    }

    write_legacy_playlist(&channels, Path::new(&config.output.channels_path))
        .with_context(|| format!("failed to write {}", config.output.channels_path))?;
    write_native_playlist(&channels, Path::new(&config.output.playlist_path))
        .with_context(|| format!("failed to write {}", config.output.playlist_path))?;

    Ok(())
}
