//! Document ingestion pipeline: upload → text → document → store.

use std::path::{Path, PathBuf};

use docai_core::{Document, Result};
use docai_store::DocumentStore;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::file::{TextReader, Upload};
use crate::processor::DocumentProcessor;

/// An upload that could not be ingested.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub filename: String,
    pub error: String,
}

/// Outcome of [`Ingester::ingest_batch`].
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub documents: Vec<Document>,
    pub failures: Vec<BatchFailure>,
}

/// Handles document ingestion: text acquisition, processing, and storage.
pub struct Ingester<'a> {
    store: &'a dyn DocumentStore,
    reader: &'a dyn TextReader,
    processor: &'a DocumentProcessor,
    archive: Option<PathBuf>,
}

/// Where the raw bytes of `document` are kept inside an archive directory.
pub fn archive_path(dir: &Path, document: &Document) -> PathBuf {
    let name = Path::new(&document.filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed");
    dir.join(format!("{}_{}", document.id, name))
}

impl<'a> Ingester<'a> {
    pub fn new(
        store: &'a dyn DocumentStore,
        reader: &'a dyn TextReader,
        processor: &'a DocumentProcessor,
    ) -> Self {
        Self {
            store,
            reader,
            processor,
            archive: None,
        }
    }

    /// Also keep each stored upload's raw bytes under `dir`.
    pub fn with_archive(mut self, dir: impl Into<PathBuf>) -> Self {
        self.archive = Some(dir.into());
        self
    }

    /// Ingest one upload. Nothing is stored if text acquisition fails.
    pub fn ingest(&self, upload: &Upload, uploader: &str) -> Result<Document> {
        let text = self.reader.read_text(upload)?;
        debug!("Read {} chars from {}", text.len(), upload.filename);

        let document = self.processor.process(
            &text,
            &upload.filename,
            upload.size(),
            upload.mime_type.as_deref(),
            uploader,
        );
        self.store.append(&document)?;

        if let Some(dir) = &self.archive {
            let path = archive_path(dir, &document);
            if let Err(e) = std::fs::write(&path, &upload.bytes) {
                warn!("Could not archive {}: {}", path.display(), e);
            }
        }

        info!(
            "Ingested {} as {} ({}, {} tags)",
            upload.filename,
            document.id,
            document.category,
            document.tags.len()
        );
        Ok(document)
    }

    /// Ingest every upload, continuing past failures.
    pub fn ingest_batch(&self, uploads: &[Upload], uploader: &str) -> BatchReport {
        let mut report = BatchReport::default();
        for upload in uploads {
            match self.ingest(upload, uploader) {
                Ok(document) => report.documents.push(document),
                Err(e) => {
                    warn!("Failed to ingest {}: {}", upload.filename, e);
                    report.failures.push(BatchFailure {
                        filename: upload.filename.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        info!(
            "Batch complete: {} stored, {} failed",
            report.documents.len(),
            report.failures.len()
        );
        report
    }
}
