//! Frequency-scored extractive summary.

use std::collections::HashMap;

use super::{lowercase_words, split_sentences};

pub const NO_SUMMARY: &str = "No summary available.";

/// Sentences at or below this many characters (trimmed) are ignored.
const MIN_SENTENCE_CHARS: usize = 20;
/// Only words longer than this contribute to the frequency table.
const MIN_WORD_CHARS: usize = 3;

/// Pick the `max_sentences` highest-scoring sentences.
///
/// A sentence scores the sum of the document-wide frequencies of its words.
/// Ties keep original sentence order.
pub fn summarize(content: &str, max_sentences: usize) -> String {
    let sentences: Vec<&str> = split_sentences(content)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    if sentences.is_empty() {
        return NO_SUMMARY.to_string();
    }

    let mut freq: HashMap<String, usize> = HashMap::new();
    for word in lowercase_words(content) {
        if word.chars().count() > MIN_WORD_CHARS {
            *freq.entry(word).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(usize, &str)> = sentences
        .into_iter()
        .map(|sentence| {
            let score = lowercase_words(sentence)
                .iter()
                .map(|w| freq.get(w).copied().unwrap_or(0))
                .sum();
            (score, sentence)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let picked: Vec<&str> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(_, s)| s)
        .collect();
    format!("{}.", picked.join(". "))
}
