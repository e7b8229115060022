// SPDX-License-Identifier: MPL-2.0
//! Pure parser for the manifest text format.
//!
//! The parser is total: any input yields a (possibly empty) record sequence.
//! Lines that fail validation are dropped silently and never affect their
//! neighbours.

use super::ImageRecord;

/// Lines starting with this character (after trimming) are comments.
pub const COMMENT_PREFIX: char = '#';

/// Separates the URL from the description. Only the first occurrence splits.
pub const FIELD_DELIMITER: char = '|';

/// Every accepted URL must start with this prefix.
pub const REQUIRED_URL_PREFIX: &str = "http";

/// Byte order mark some editors write at the start of UTF-8 files.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Parses manifest text into an ordered sequence of records.
///
/// Both `\n` and `\r\n` line endings are accepted. A leading byte order
/// mark is ignored.
#[must_use]
pub fn parse(text: &str) -> Vec<ImageRecord> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    text.lines().filter_map(parse_line).collect()
}

/// Parses a single manifest line.
///
/// Returns `None` for blank lines, comments and records whose URL does not
/// start with [`REQUIRED_URL_PREFIX`].
#[must_use]
pub fn parse_line(line: &str) -> Option<ImageRecord> {
    let line = line.trim();
    if is_skippable(line) {
        return None;
    }

    let (url_segment, description) = match line.split_once(FIELD_DELIMITER) {
        Some((url, rest)) => (url, rest.trim()),
        None => (line, ""),
    };

    let url = strip_brackets(url_segment.trim());
    if !url.starts_with(REQUIRED_URL_PREFIX) {
        return None;
    }

    Some(ImageRecord::new(url, Some(description.to_string())))
}

/// A trimmed line is skippable when it is empty or a comment.
#[must_use]
pub fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Removes one optional leading `[` and one optional trailing `]`.
fn strip_brackets(segment: &str) -> &str {
    let segment = segment.strip_prefix('[').unwrap_or(segment);
    segment.strip_suffix(']').unwrap_or(segment)
}
