//! Weighted zone scoring.

use docai_core::Document;

use crate::config::SearchConfig;

/// Lowercased title, content, summary, tags and entity texts, in that order.
pub fn haystack(document: &Document) -> String {
    let tags = document.tags.join(" ");
    let entities = document
        .metadata
        .entities
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    [
        document.metadata.title.as_str(),
        document.content.as_str(),
        document.summary.as_str(),
        tags.as_str(),
        entities.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Non-overlapping occurrences of an already-lowercased term.
fn occurrences(zone: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    zone.matches(term).count()
}

/// Relevance of `document` for `terms`, in `[0, max_score]`. `terms` must be non-empty.
pub fn score_document(document: &Document, terms: &[String], config: &SearchConfig) -> f64 {
    let weights = &config.weights;
    let title = document.metadata.title.to_lowercase();
    let summary = document.summary.to_lowercase();
    let content = document.content.to_lowercase();
    let tags = document.tags.join(" ").to_lowercase();

    let mut score: f64 = terms
        .iter()
        .map(|term| {
            occurrences(&title, term) as f64 * weights.title
                + occurrences(&summary, term) as f64 * weights.summary
                + occurrences(&content, term) as f64 * weights.content
                + occurrences(&tags, term) as f64 * weights.tags
        })
        .sum();

    if haystack(document).contains(&terms.join(" ")) {
        score += config.phrase_bonus;
    }

    (score / terms.len() as f64).min(config.max_score)
}
