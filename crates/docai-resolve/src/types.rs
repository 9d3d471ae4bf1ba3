//! Search result types.

use docai_core::Document;
use serde::Serialize;

/// A ranked match. Borrows the document from the collection that was searched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub document: &'a Document,
    /// In `(0, max_score]`.
    pub relevance_score: f64,
    pub matched_content: Vec<String>,
    pub highlighted_summary: String,
}
