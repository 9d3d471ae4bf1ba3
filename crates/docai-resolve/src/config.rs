//! Tunable weights and tables for the search engine.

use docai_core::config::DEFAULT_PHRASE_BONUS;
use serde::{Deserialize, Serialize};

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
];

/// Per-zone multipliers applied to term occurrence counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneWeights {
    pub title: f64,
    pub summary: f64,
    pub content: f64,
    pub tags: f64,
}

impl Default for ZoneWeights {
    fn default() -> Self {
        Self {
            title: 3.0,
            summary: 2.0,
            content: 1.0,
            tags: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub weights: ZoneWeights,
    /// Added once when the whole term sequence appears verbatim.
    pub phrase_bonus: f64,
    pub max_score: f64,
    pub max_excerpts: usize,
    /// Tokens this short or shorter are dropped.
    pub min_token_chars: usize,
    pub stop_words: Vec<String>,
    pub mark_open: String,
    pub mark_close: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ZoneWeights::default(),
            phrase_bonus: DEFAULT_PHRASE_BONUS,
            max_score: 100.0,
            max_excerpts: 3,
            min_token_chars: 2,
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            mark_open: "<mark>".into(),
            mark_close: "</mark>".into(),
        }
    }
}

impl SearchConfig {
    pub fn with_phrase_bonus(mut self, bonus: f64) -> Self {
        self.phrase_bonus = bonus;
        self
    }
}
