//! Ranked search over a document collection.

use docai_core::{Document, DocumentCategory};
use tracing::debug;

use crate::config::SearchConfig;
use crate::highlight::{highlight, matching_sentences};
use crate::scoring::score_document;
use crate::tokenize::tokenize_query;
use crate::types::SearchResult;

/// Stateless relevance search engine.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn tokenize(&self, query: &str) -> Vec<String> {
        tokenize_query(query, &self.config.stop_words, self.config.min_token_chars)
    }

    /// Documents scoring above zero, best first. Equal scores keep input order.
    ///
    /// A query with no usable terms yields no results.
    pub fn search<'a>(
        &self,
        documents: &'a [Document],
        query: &str,
        category: Option<DocumentCategory>,
    ) -> Vec<SearchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let terms = self.tokenize(query);
        if terms.is_empty() {
            debug!("Query {:?} has no searchable terms", query);
            return Vec::new();
        }

        let mut scored: Vec<(&Document, f64)> = documents
            .iter()
            .filter(|doc| category.map_or(true, |c| doc.category == c))
            .map(|doc| (doc, score_document(doc, &terms, &self.config)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(
            "Query {:?} ({} terms) matched {} of {} documents",
            query,
            terms.len(),
            scored.len(),
            documents.len()
        );

        scored
            .into_iter()
            .map(|(document, relevance_score)| SearchResult {
                document,
                relevance_score,
                matched_content: matching_sentences(
                    &document.content,
                    &terms,
                    self.config.max_excerpts,
                ),
                highlighted_summary: highlight(
                    &document.summary,
                    &terms,
                    &self.config.mark_open,
                    &self.config.mark_close,
                ),
            })
            .collect()
    }
}
