//! Query tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lowercased query terms with punctuation, short tokens and stop words removed.
///
/// Duplicates are kept; each occurrence of a term in the query counts.
pub fn tokenize_query(query: &str, stop_words: &[String], min_token_chars: usize) -> Vec<String> {
    let lowered = query.to_lowercase();
    let cleaned = PUNCT_RE.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > min_token_chars)
        .filter(|token| !stop_words.iter().any(|s| s == token))
        .map(str::to_string)
        .collect()
}
