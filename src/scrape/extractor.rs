//! Channel link extraction from embedded script data
//!
//! The source page carries its channel list inside an inline script, as an
//! object literal assigned to `const linksData`. That literal is close to
//! JSON but not reliably valid, so it is never parsed structurally: the
//! extractor scans it for records of the exact upstream shape
//! `{"name": "<name>", "url": "acestream://<id>"}` instead.
//!
//! This is deliberately brittle. If the upstream formatting changes, the
//! result is an empty list, not an error.

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Literal marker identifying the script element holding the channel data
const DATA_MARKER: &str = "const linksData";

/// A single extracted channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Opaque alphanumeric token uniquely naming the stream; dedup key
    pub id: String,

    /// Free-form display name
    pub name: String,
}

/// Extracts channel records from fetched page text
///
/// Owns the set of identifiers seen so far, so deduplication is global
/// across one scraper instance and nothing leaks between runs. Construct a
/// fresh extractor per run.
pub struct Extractor {
    /// Isolates the object literal assigned to `const linksData`
    block_pattern: Regex,

    /// Matches one channel record inside the isolated literal. Whitespace
    /// around colons and braces is tolerated; the name capture stops at the
    /// next `"` and the id is one-or-more word characters.
    record_pattern: Regex,

    /// Identifiers already extracted; grows monotonically, never shrinks
    seen_ids: HashSet<String>,
}

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            block_pattern: Regex::new(r"(?s)const linksData\s*=\s*(\{.*?\}\s*);")
                .expect("linksData block pattern"),
            record_pattern: Regex::new(
                r#"\{\s*"name"\s*:\s*"(.*?)"\s*,\s*"url"\s*:\s*"acestream://(\w+)"\s*\}"#,
            )
            .expect("channel record pattern"),
            seen_ids: HashSet::new(),
        }
    }

    /// Extracts all unique channels from a page, in first-seen order
    ///
    /// # Arguments
    ///
    /// * `document` - The full HTML text of the fetched page
    ///
    /// # Returns
    ///
    /// Channels not seen before by this extractor, ordered by first
    /// occurrence in the document. An empty vector means the marker script,
    /// the data block, or any matching records were missing; none of those
    /// is an error.
    pub fn extract(&mut self, document: &str) -> Vec<Channel> {
        let script_text = match find_marker_script(document) {
            Some(text) => text,
            None => {
                tracing::debug!("no script element containing '{}'", DATA_MARKER);
                return Vec::new();
            }
        };

        let block = match self
            .block_pattern
            .captures(&script_text)
            .and_then(|caps| caps.get(1))
        {
            Some(m) => m.as_str().to_string(),
            None => {
                tracing::debug!("marker script found but linksData literal did not match");
                return Vec::new();
            }
        };

        let mut channels = Vec::new();
        for caps in self.record_pattern.captures_iter(&block) {
            let name = &caps[1];
            let id = &caps[2];

            // The record pattern guarantees a non-empty id
            if self.seen_ids.contains(id) {
                continue;
            }

            self.seen_ids.insert(id.to_string());
            channels.push(Channel {
                id: id.to_string(),
                name: name.to_string(),
            });
        }

        channels
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new()
    }
}

/// Finds the first script element whose text contains the data marker
///
/// The document is parsed only to locate script elements; no further DOM
/// reasoning happens here.
fn find_marker_script(document: &str) -> Option<String> {
    let html = Html::parse_document(document);
    let selector = Selector::parse("script").ok()?;

    html.select(&selector)
        .map(|element| element.text().collect::<String>())
        .find(|text| text.contains(DATA_MARKER))
}
