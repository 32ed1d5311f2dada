//! M3U playlist generation
//!
//! Two flavors of the same playlist are produced: a legacy one whose
//! playback lines point at a local relay engine, and a native one using the
//! acestream:// URI scheme directly. Both overwrite their destination
//! unconditionally.

use crate::output::OutputResult;
use crate::scrape::Channel;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// First line of every M3U playlist
const PLAYLIST_HEADER: &str = "#EXTM3U";

/// Local playback engine endpoint used by the legacy format
const LOCAL_RELAY_PREFIX: &str = "http://127.0.0.1:6878/ace/getstream?id=";

/// Formats channels as the legacy playlist pointing at the local relay
pub fn format_legacy_playlist(channels: &[Channel]) -> String {
    format_playlist(channels, |channel| {
        format!("{}{}", LOCAL_RELAY_PREFIX, channel.id)
    })
}

/// Formats channels as the native acestream:// playlist
pub fn format_native_playlist(channels: &[Channel]) -> String {
    format_playlist(channels, |channel| format!("acestream://{}", channel.id))
}

/// Shared playlist shape: header, then an EXTINF line and a playback line
/// per channel
fn format_playlist<F>(channels: &[Channel], playback_line: F) -> String
where
    F: Fn(&Channel) -> String,
{
    let mut playlist = String::new();
    playlist.push_str(PLAYLIST_HEADER);
    playlist.push('\n');

    for channel in channels {
        playlist.push_str(&format!("#EXTINF:-1,{}\n", channel.name));
        playlist.push_str(&playback_line(channel));
        playlist.push('\n');
    }

    playlist
}

/// Writes the legacy playlist to the given path
///
/// # Arguments
///
/// * `channels` - The channels to serialize, in order
/// * `path` - Destination file; overwritten if it exists
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the playlist
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_legacy_playlist(channels: &[Channel], path: &Path) -> OutputResult<()> {
    write_playlist(&format_legacy_playlist(channels), channels.len(), path)
}

/// Writes the native playlist to the given path
///
/// # Arguments
///
/// * `channels` - The channels to serialize, in order
/// * `path` - Destination file; overwritten if it exists
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the playlist
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_native_playlist(channels: &[Channel], path: &Path) -> OutputResult<()> {
    write_playlist(&format_native_playlist(channels), channels.len(), path)
}

fn write_playlist(playlist: &str, channel_count: usize, path: &Path) -> OutputResult<()> {
    let mut file = File::create(path)?;
    file.write_all(playlist.as_bytes())?;

    tracing::info!(
        "Saved {} channels to M3U playlist {}",
        channel_count,
        path.display()
    );
    Ok(())
}
