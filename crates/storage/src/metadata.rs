//! Lenient key/value parsing for question metadata files.
//!
//! The on-disk format is one `key=value` pair per line. Blank lines and
//! `#` comments are ignored, lines without a separator are skipped, and
//! surrounding whitespace is trimmed from both key and value. A repeated
//! key keeps the last value seen.

use std::collections::HashMap;

const COMMENT_MARKER: char = '#';
const SEPARATOR: char = '=';

/// Parse metadata file content into key/value pairs.
///
/// Pure function over the content; where the bytes came from is the
/// caller's concern.
#[must_use]
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }
        let Some((key, value)) = line.split_once(SEPARATOR) else {
            continue;
        };
        pairs.insert(key.trim().to_string(), value.trim().to_string());
    }
    pairs
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
