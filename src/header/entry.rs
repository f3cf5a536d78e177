//! Header entries and the raw header block conversions.
//!
//! A header block is plain text, one `name: value` pair per line. This module
//! converts it to an ordered list of [`HeaderEntry`] and back.
//!
//! Both names and values are stored as raw strings, without validation
//! against the HTTP grammar. Name casing is kept verbatim; only semantic
//! lookups such as [`content_type`](crate::header::content_type) compare
//! names case-insensitively.
//!
//! Duplicated names are kept as separate entries, in line order.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// ASCII case-insensitive comparison of the entry name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Parses a raw header block into entries.
///
/// Each line is split on its first `:` and both parts are trimmed. Blank
/// lines and lines without a `:` are dropped.
pub fn parse(raw: &str) -> Vec<HeaderEntry> {
    let mut entries = Vec::new();
    for (line_no, line) in raw.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            trace!(line = line_no, "dropping header line without a colon");
            continue;
        };
        entries.push(HeaderEntry::new(name.trim(), value.trim()));
    }
    entries
}

/// Serializes entries back into a raw header block.
///
/// Lines are joined with `\n`, without a trailing newline.
pub fn serialize(entries: &[HeaderEntry]) -> String {
    let mut result = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(&entry.name);
        result.push_str(": ");
        result.push_str(&entry.value);
    }
    result
}
