//! Collection analytics over a document list.

use docai_core::{Document, DocumentCategory};
use serde::{Deserialize, Serialize};

use crate::types::{CategoryCount, UploaderCount};

/// Number of most recent uploads reported.
const RECENT_LIMIT: usize = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_documents: usize,
    /// Category order; categories without documents are omitted.
    pub by_category: Vec<CategoryCount>,
    /// Descending count, ties by uploader name.
    pub by_uploader: Vec<UploaderCount>,
    pub average_confidence: f64,
    pub total_size_bytes: u64,
    /// Ids of the newest uploads, newest first.
    pub recent: Vec<String>,
}

impl CollectionStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let by_category = DocumentCategory::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: documents.iter().filter(|d| d.category == category).count(),
            })
            .filter(|c| c.count > 0)
            .collect();

        let mut by_uploader: Vec<UploaderCount> = Vec::new();
        for doc in documents {
            match by_uploader.iter_mut().find(|u| u.uploader == doc.uploader) {
                Some(entry) => entry.count += 1,
                None => by_uploader.push(UploaderCount {
                    uploader: doc.uploader.clone(),
                    count: 1,
                }),
            }
        }
        by_uploader.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.uploader.cmp(&b.uploader)));

        let average_confidence = if documents.is_empty() {
            0.0
        } else {
            documents.iter().map(|d| d.metadata.confidence).sum::<f64>() / documents.len() as f64
        };

        let mut newest: Vec<&Document> = documents.iter().collect();
        newest.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        let recent = newest
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|d| d.id.clone())
            .collect();

        Self {
            total_documents: documents.len(),
            by_category,
            by_uploader,
            average_confidence,
            total_size_bytes: documents.iter().map(|d| d.file_size).sum(),
            recent,
        }
    }
}

/// Human-readable size with one decimal, e.g. `"1.5 KB"`; whole values drop the decimal.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.1}", value);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", trimmed, UNITS[unit])
}
