//! SQLite-backed document store.
//!
//! Each document is stored as its JSON body alongside a few indexed columns.
//! Insertion order is the `seq` autoincrement key.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use docai_core::{Document, Error, Result, Role};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::schema::SCHEMA_SQL;
use crate::store::DocumentStore;
use crate::types::{AccessAction, AccessLogEntry, AccessRecord};

/// Raw `access_log` columns, converted once the statement is done.
struct AccessRow {
    id: i64,
    role: String,
    action: String,
    document_id: Option<String>,
    detail: Option<String>,
    /// Unix millis.
    created_at: i64,
}

impl AccessRow {
    fn into_entry(self) -> Result<AccessLogEntry> {
        Ok(AccessLogEntry {
            id: self.id,
            role: self.role.parse::<Role>()?,
            action: self.action.parse::<AccessAction>()?,
            document_id: self.document_id,
            detail: self.detail,
            timestamp: DateTime::from_timestamp_millis(self.created_at).unwrap_or_default(),
        })
    }
}

/// SQLite store holding the document collection and the access log.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open or create the SQLite store.
    ///
    /// `db_dir` is the directory (e.g., `data/store/`). The file will be `db_dir/docai.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("docai.db");

        let conn = Self::create_connection(&db_path)?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        info!(
            "SqliteStore initialized: {} documents, path={}",
            store.count_documents()?,
            store.db_path.display()
        );

        Ok(store)
    }

    fn create_connection(db_path: &Path) -> Result<Connection> {
        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(conn)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Count total documents.
    pub fn count_documents(&self) -> Result<i64> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(count)
    }

    fn parse_body(body: &str) -> Result<Document> {
        Ok(serde_json::from_str(body)?)
    }

    fn row_to_access(row: &rusqlite::Row<'_>) -> rusqlite::Result<AccessRow> {
        Ok(AccessRow {
            id: row.get("id")?,
            role: row.get("role")?,
            action: row.get("action")?,
            document_id: row.get("document_id")?,
            detail: row.get("detail")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl DocumentStore for SqliteStore {
    fn append(&self, document: &Document) -> Result<()> {
        let body = serde_json::to_string(document)?;
        let conn = self.conn.lock();
        conn.prepare_cached(
            "INSERT INTO documents (id, category, uploader, upload_date, body_json) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(|e| Error::Database(e.to_string()))?
        .execute(params![
            document.id,
            document.category.as_str(),
            document.uploader,
            document.upload_date.to_rfc3339(),
            body,
        ])
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint") {
                Error::Duplicate(document.id.clone())
            } else {
                Error::Database(e.to_string())
            }
        })?;
        debug!("Stored document {} ({})", document.id, document.category);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Document>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT body_json FROM documents ORDER BY seq ASC")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut docs = Vec::new();
        for row in rows {
            let body = row.map_err(|e| Error::Database(e.to_string()))?;
            docs.push(Self::parse_body(&body)?);
        }
        Ok(docs)
    }

    fn get(&self, id: &str) -> Result<Option<Document>> {
        let conn = self.conn.lock();
        let body: Option<String> = conn
            .prepare_cached("SELECT body_json FROM documents WHERE id = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![id], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        body.as_deref().map(Self::parse_body).transpose()
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let count = conn
            .execute("DELETE FROM documents WHERE id = ?1", params![id])
            .map_err(|e| Error::Database(e.to_string()))?;
        if count > 0 {
            debug!("Deleted document {}", id);
        }
        Ok(count > 0)
    }

    fn log_access(&self, record: AccessRecord) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let conn = self.conn.lock();
        conn.prepare_cached(
            "INSERT INTO access_log (role, action, document_id, detail, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .map_err(|e| Error::Database(e.to_string()))?
        .execute(params![
            record.role.as_str(),
            record.action.as_str(),
            record.document_id,
            record.detail,
            now,
        ])
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    fn recent_access(&self, limit: usize) -> Result<Vec<AccessLogEntry>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached("SELECT * FROM access_log ORDER BY id DESC LIMIT ?1")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![limit as i64], Self::row_to_access)
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| Error::Database(e.to_string()))?.into_entry()?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::tests::sample_document;
    use docai_core::DocumentCategory;
    use tempfile::TempDir;

    fn test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_append_and_get_document() {
        let (store, _dir) = test_store();
        let doc = sample_document(
            "doc-1",
            DocumentCategory::Finance,
            vec![Role::Finance, Role::Admin],
        );
        store.append(&doc).unwrap();

        let loaded = store.get("doc-1").unwrap().unwrap();
        assert_eq!(loaded, doc);
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (store, _dir) = test_store();
        let doc = sample_document("dup", DocumentCategory::Hr, vec![Role::Hr, Role::Admin]);
        store.append(&doc).unwrap();
        let result = store.append(&doc);
        assert!(matches!(result, Err(Error::Duplicate(id)) if id == "dup"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (store, _dir) = test_store();
        for id in ["c", "a", "b"] {
            store
                .append(&sample_document(id, DocumentCategory::Uncategorized, vec![Role::All]))
                .unwrap();
        }
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_delete_document() {
        let (store, _dir) = test_store();
        store
            .append(&sample_document(
                "gone",
                DocumentCategory::Legal,
                vec![Role::Legal, Role::Admin],
            ))
            .unwrap();
        assert!(store.delete("gone").unwrap());
        assert!(!store.delete("gone").unwrap());
        assert_eq!(store.count_documents().unwrap(), 0);
    }

    #[test]
    fn test_list_for_role() {
        let (store, _dir) = test_store();
        store
            .append(&sample_document(
                "fin",
                DocumentCategory::Finance,
                vec![Role::Finance, Role::Admin],
            ))
            .unwrap();
        store
            .append(&sample_document("pub", DocumentCategory::Marketing, vec![Role::All]))
            .unwrap();

        let hr: Vec<String> = store
            .list_for_role(Role::Hr)
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(hr, vec!["pub"]);
        assert_eq!(store.list_for_role(Role::Finance).unwrap().len(), 2);
        assert_eq!(store.list_for_role(Role::Admin).unwrap().len(), 2);
    }

    #[test]
    fn test_access_log_newest_first() {
        let (store, _dir) = test_store();
        store
            .log_access(AccessRecord::new(Role::Hr, AccessAction::Upload).document("d1"))
            .unwrap();
        store
            .log_access(AccessRecord::new(Role::Admin, AccessAction::Search).detail("budget"))
            .unwrap();

        let entries = store.recent_access(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AccessAction::Search);
        assert_eq!(entries[0].detail.as_deref(), Some("budget"));
        assert_eq!(entries[1].role, Role::Hr);
        assert_eq!(entries[1].document_id.as_deref(), Some("d1"));

        assert_eq!(store.recent_access(1).unwrap().len(), 1);
    }

    #[test]
    fn test_reopen_keeps_documents() {
        let dir = TempDir::new().unwrap();
        {
            let store = SqliteStore::open(dir.path()).unwrap();
            store
                .append(&sample_document("kept", DocumentCategory::Operations, vec![Role::All]))
                .unwrap();
        }
        let store = SqliteStore::open(dir.path()).unwrap();
        assert_eq!(store.count_documents().unwrap(), 1);
        assert!(store.db_path().ends_with("docai.db"));
    }
}
