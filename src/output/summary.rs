//! Console summary of a scrape run

use crate::scrape::Channel;

/// Channels listed individually before the remainder is collapsed
const PREVIEW_LIMIT: usize = 10;

/// Formats the end-of-run summary
///
/// Lists the channel count and the first ten channels; anything beyond that
/// collapses into an `...and N more channels` line. An empty list produces
/// just `No channels found`.
pub fn format_summary(channels: &[Channel]) -> String {
    if channels.is_empty() {
        return "No channels found".to_string();
    }

    let mut lines = vec![format!("Found {} channels:", channels.len())];

    for (i, channel) in channels.iter().take(PREVIEW_LIMIT).enumerate() {
        lines.push(format!(
            "{}. {}: acestream://{}",
            i + 1,
            channel.name,
            channel.id
        ));
    }

    if channels.len() > PREVIEW_LIMIT {
        lines.push(format!(
            "...and {} more channels",
            channels.len() - PREVIEW_LIMIT
        ));
    }

    lines.join("\n")
}

/// Prints the summary to stdout
pub fn print_summary(channels: &[Channel]) {
    println!("{}", format_summary(channels));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(count: usize) -> Vec<Channel> {
        (1..=count)
            .map(|i| Channel {
                id: format!("id{}", i),
                name: format!("Channel {}", i),
            })
            .collect()
    }

    #[test]
    fn test_empty_list_reports_no_channels() {
        assert_eq!(format_summary(&[]), "No channels found");
    }

    #[test]
    fn test_short_list_has_no_tail_line() {
        let summary = format_summary(&channels(3));

        assert!(summary.starts_with("Found 3 channels:"));
        assert!(summary.contains("1. Channel 1: acestream://id1"));
        assert!(summary.contains("3. Channel 3: acestream://id3"));
        assert!(!summary.contains("more channels"));
    }

    #[test]
    fn test_exactly_ten_channels_listed_in_full() {
        let summary = format_summary(&channels(10));

        assert!(summary.contains("10. Channel 10: acestream://id10"));
        assert!(!summary.contains("more channels"));
    }

    #[test]
    fn test_long_list_collapses_remainder() {
        let summary = format_summary(&channels(14));

        assert!(summary.starts_with("Found 14 channels:"));
        assert!(summary.contains("10. Channel 10: acestream://id10"));
        assert!(!summary.contains("11. Channel 11"));
        assert!(summary.ends_with("...and 4 more channels"));
    }
}
