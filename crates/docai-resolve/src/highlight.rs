//! Query-term highlighting and excerpt selection.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Wrap case-insensitive occurrences of each term, one term at a time.
///
/// Later terms are matched against the already-marked text, so overlapping
/// terms can nest markers.
pub fn highlight(text: &str, terms: &[String], open: &str, close: &str) -> String {
    let mut marked = text.to_string();
    for term in terms.iter().filter(|t| !t.is_empty()) {
        let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(term))) else {
            continue;
        };
        marked = re
            .replace_all(&marked, |caps: &Captures| format!("{open}{}{close}", &caps[0]))
            .into_owned();
    }
    marked
}

/// Up to `max` trimmed content sentences containing any term, in text order.
pub fn matching_sentences(content: &str, terms: &[String], max: usize) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(content)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            terms.iter().any(|t| lower.contains(t.as_str()))
        })
        .map(|sentence| sentence.trim().to_string())
        .take(max)
        .collect()
}
