//! Title, author and date extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DATE_PATTERN;

pub const UNTITLED: &str = "Untitled Document";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Tried in order; the first pattern matching anywhere in the text wins.
static AUTHOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:Author|By|Created by):\s*(.+)",
        r"(.+@.+\..+)",
        r"(?i)(?:Prepared by|Written by):\s*(.+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(DATE_PATTERN).unwrap());

/// First non-blank line longer than 5 characters that is not all digits.
pub fn extract_title(content: &str, max_chars: usize) -> String {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .find(|line| line.chars().count() > 5 && !line.chars().all(|c| c.is_ascii_digit()))
        .map(|line| line.chars().take(max_chars).collect())
        .unwrap_or_else(|| UNTITLED.to_string())
}

pub fn extract_author(content: &str) -> String {
    AUTHOR_PATTERNS
        .iter()
        .find_map(|re| re.captures(content))
        .and_then(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

pub fn extract_date(content: &str) -> Option<String> {
    DATE_RE
        .captures(content)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
