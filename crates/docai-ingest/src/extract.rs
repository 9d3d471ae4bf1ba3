//! Heuristic extraction passes run by the document processor.
//!
//! Each pass is a pure function over the raw text plus its slice of the
//! processor configuration. Ordering is always explicit: tables are walked in
//! order and every ranking uses a stable sort.

pub mod access;
pub mod classify;
pub mod entities;
pub mod metadata;
pub mod summary;
pub mod tags;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lowercased word tokens in text order.
pub(crate) fn lowercase_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split on `.`, `!` and `?`. Pieces are untrimmed and may be empty.
pub(crate) fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
}
