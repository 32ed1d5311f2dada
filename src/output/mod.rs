//! Output module for playlist files and the console summary
//!
//! This module handles:
//! - Writing the legacy local-relay M3U playlist
//! - Writing the native acestream:// M3U playlist
//! - Printing the end-of-run console summary

mod playlist;
mod summary;

pub use playlist::{
    format_legacy_playlist, format_native_playlist, write_legacy_playlist, write_native_playlist,
};
pub use summary::{format_summary, print_summary};

use thiserror::Error;

/// Errors that can occur during output operations
///
/// Unlike fetch failures these are fatal: a playlist that cannot be written
/// aborts the run.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
