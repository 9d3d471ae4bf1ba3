//! The list-store contract shared by every storage engine.

use docai_core::{Document, Result, Role};

use crate::filter::DocumentFilter;
use crate::types::{AccessLogEntry, AccessRecord};

/// Ordered collection of documents keyed by insertion order.
///
/// Documents are appended or deleted wholesale; there is no update.
pub trait DocumentStore: Send + Sync {
    /// Append a document. A second document with the same id is rejected.
    fn append(&self, document: &Document) -> Result<()>;

    /// All documents in insertion order.
    fn list(&self) -> Result<Vec<Document>>;

    fn get(&self, id: &str) -> Result<Option<Document>>;

    /// Returns `false` when no document had this id.
    fn delete(&self, id: &str) -> Result<bool>;

    fn log_access(&self, record: AccessRecord) -> Result<()>;

    /// Most recent entries first.
    fn recent_access(&self, limit: usize) -> Result<Vec<AccessLogEntry>>;

    /// Documents the given role may see, in insertion order.
    fn list_for_role(&self, role: Role) -> Result<Vec<Document>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|doc| doc.is_visible_to(role))
            .collect())
    }

    /// Visible documents narrowed by `filter`, in insertion order.
    fn list_matching(&self, role: Role, filter: &DocumentFilter) -> Result<Vec<Document>> {
        Ok(filter.apply(self.list_for_role(role)?))
    }
}
