//! Raw text → fully populated [`Document`].

use chrono::{DateTime, Utc};
use docai_core::{Document, DocumentCategory, DocumentMetadata, Result};
use uuid::Uuid;

use crate::config::ProcessorConfig;
use crate::extract::access::access_level_for;
use crate::extract::classify::classify;
use crate::extract::entities::{extract_entities, EntityMatcher};
use crate::extract::metadata::{extract_author, extract_date, extract_title};
use crate::extract::summary::summarize;
use crate::extract::tags::extract_tags;
use crate::file::mime_from_filename;

/// Stateless document processor.
///
/// Built once from a [`ProcessorConfig`] and shared freely; processing never
/// mutates the processor.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    config: ProcessorConfig,
    matchers: Vec<EntityMatcher>,
}

impl DocumentProcessor {
    /// Fails only if an entity pattern in `config` is not a valid regex.
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        let matchers = config
            .entity_patterns
            .iter()
            .map(EntityMatcher::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, matchers })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Build a document stamped with the current time.
    pub fn process(
        &self,
        raw_content: &str,
        filename: &str,
        file_size: u64,
        declared_mime: Option<&str>,
        uploader: &str,
    ) -> Document {
        self.process_at(raw_content, filename, file_size, declared_mime, uploader, Utc::now())
    }

    /// Build a document with an explicit upload timestamp.
    pub fn process_at(
        &self,
        raw_content: &str,
        filename: &str,
        file_size: u64,
        declared_mime: Option<&str>,
        uploader: &str,
        upload_date: DateTime<Utc>,
    ) -> Document {
        let category = self.classify(raw_content, filename);
        let file_type = declared_mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| mime_from_filename(filename).to_string());

        Document {
            id: Uuid::new_v4().to_string(),
            filename: filename.to_string(),
            original_name: filename.to_string(),
            category,
            upload_date,
            uploader: uploader.to_string(),
            metadata: self.extract_metadata(raw_content),
            summary: summarize(raw_content, self.config.summary_sentences),
            content: raw_content.to_string(),
            file_size,
            file_type,
            tags: extract_tags(raw_content, self.config.max_tags),
            access_level: access_level_for(category),
        }
    }

    pub fn classify(&self, content: &str, filename: &str) -> DocumentCategory {
        classify(
            content,
            filename,
            &self.config.category_rules,
            self.config.classify_threshold,
            self.config.filename_weight,
        )
    }

    pub fn extract_metadata(&self, content: &str) -> DocumentMetadata {
        DocumentMetadata {
            title: extract_title(content, self.config.title_max_chars),
            author: extract_author(content),
            extracted_date: extract_date(content),
            entities: extract_entities(content, &self.matchers, self.config.max_entities),
            confidence: self.config.metadata_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryRule;
    use crate::extract::summary::NO_SUMMARY;
    use docai_core::{EntityType, Role};

    fn processor() -> DocumentProcessor {
        DocumentProcessor::new(ProcessorConfig::default()).unwrap()
    }

    #[test]
    fn test_invoice_scenario() {
        let doc = processor().process(
            "Invoice #123 payment due. Budget review scheduled. Tax filing reminder.",
            "invoice_march.txt",
            72,
            Some("text/plain"),
            "alice",
        );
        assert_eq!(doc.category, DocumentCategory::Finance);
        assert_eq!(doc.access_level, vec![Role::Finance, Role::Admin]);
        assert_eq!(doc.file_type, "text/plain");
        assert_eq!(doc.original_name, "invoice_march.txt");
    }

    #[test]
    fn test_unmatched_scenario() {
        let doc = processor().process("The quick brown fox jumps.", "notes.txt", 26, None, "bob");
        assert_eq!(doc.category, DocumentCategory::Uncategorized);
        assert_eq!(doc.access_level, vec![Role::All]);
        assert_eq!(doc.summary, "The quick brown fox jumps.");
        assert_eq!(doc.metadata.title, "The quick brown fox jumps.");
        assert_eq!(doc.metadata.author, "Unknown");
        assert_eq!(doc.file_type, "text/plain");
    }

    #[test]
    fn test_empty_content_degrades_gracefully() {
        let doc = processor().process("", "blank.bin", 0, None, "bob");
        assert_eq!(doc.category, DocumentCategory::Uncategorized);
        assert_eq!(doc.summary, NO_SUMMARY);
        assert_eq!(doc.metadata.title, "Untitled Document");
        assert!(doc.tags.is_empty());
        assert!(doc.metadata.entities.is_empty());
        assert_eq!(doc.metadata.extracted_date, None);
        assert_eq!(doc.file_type, "application/octet-stream");
    }

    #[test]
    fn test_bounds_hold_for_large_input() {
        let mut text = String::new();
        for i in 0..200 {
            text.push_str(&format!(
                "Payment {i} of ${i},000.00 was received on 01/{:02}/2024 from user{i}@example.com with reference token{i}. ",
                i % 28 + 1
            ));
        }
        let doc = processor().process(&text, "ledger.txt", text.len() as u64, None, "ops");
        assert!(doc.tags.len() <= 5);
        assert_eq!(doc.metadata.entities.len(), 10);
        assert!(doc.metadata.entities.iter().all(|e| e.kind == EntityType::Money));
    }

    #[test]
    fn test_deterministic_with_fixed_clock() {
        let p = processor();
        let text = "Employee onboarding policy. Training sessions start Monday for every new employee. \
                    Salary and benefits review follows the first month.";
        let at = Utc::now();
        let a = p.process_at(text, "onboarding.txt", 10, None, "hr-team", at);
        let b = p.process_at(text, "onboarding.txt", 10, None, "hr-team", at);
        assert_ne!(a.id, b.id);
        assert_eq!(a.category, DocumentCategory::Hr);
        assert_eq!(a.category, b.category);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.metadata, b.metadata);
        assert_eq!(a.upload_date, b.upload_date);
    }

    #[test]
    fn test_configurable_rules_and_threshold() {
        let mut config = ProcessorConfig::default().with_threshold(1);
        config.category_rules.insert(
            0,
            CategoryRule::new(DocumentCategory::Operations, &["logistics"]),
        );
        let doc = DocumentProcessor::new(config)
            .unwrap()
            .process("Logistics update for the warehouse.", "w.txt", 1, None, "ops");
        assert_eq!(doc.category, DocumentCategory::Operations);
        assert_eq!(doc.access_level, vec![Role::All]);
    }

    #[test]
    fn test_metadata_confidence_constant() {
        let doc = processor().process("Anything at all goes here.", "x.txt", 1, None, "u");
        assert_eq!(doc.metadata.confidence, 0.85);
    }
}
