//! In-memory document store for tests and ephemeral runs.

use chrono::Utc;
use docai_core::{Document, Error, Result};
use parking_lot::RwLock;

use crate::store::DocumentStore;
use crate::types::{AccessLogEntry, AccessRecord};

#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
    access_log: RwLock<Vec<AccessLogEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn append(&self, document: &Document) -> Result<()> {
        let mut docs = self.documents.write();
        if docs.iter().any(|d| d.id == document.id) {
            return Err(Error::Duplicate(document.id.clone()));
        }
        docs.push(document.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().clone())
    }

    fn get(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.read().iter().find(|d| d.id == id).cloned())
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let mut docs = self.documents.write();
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }

    fn log_access(&self, record: AccessRecord) -> Result<()> {
        let mut log = self.access_log.write();
        let id = log.len() as i64 + 1;
        log.push(AccessLogEntry {
            id,
            role: record.role,
            action: record.action,
            document_id: record.document_id,
            detail: record.detail,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn recent_access(&self, limit: usize) -> Result<Vec<AccessLogEntry>> {
        Ok(self.access_log.read().iter().rev().take(limit).cloned().collect())
    }
}
