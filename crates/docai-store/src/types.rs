//! Access log types and per-collection aggregates.

use chrono::{DateTime, Utc};
use docai_core::{DocumentCategory, Error, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a caller did with the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessAction {
    Upload,
    View,
    Search,
    Download,
    Delete,
}

impl AccessAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::View => "view",
            Self::Search => "search",
            Self::Download => "download",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" => Ok(Self::Upload),
            "view" => Ok(Self::View),
            "search" => Ok(Self::Search),
            "download" => Ok(Self::Download),
            "delete" => Ok(Self::Delete),
            other => Err(Error::Storage(format!("unknown access action: {}", other))),
        }
    }
}

/// Options for recording an access.
#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub role: Role,
    pub action: AccessAction,
    pub document_id: Option<String>,
    /// Free text, e.g. the search query.
    pub detail: Option<String>,
}

impl AccessRecord {
    pub fn new(role: Role, action: AccessAction) -> Self {
        Self {
            role,
            action,
            document_id: None,
            detail: None,
        }
    }

    pub fn document(mut self, id: impl Into<String>) -> Self {
        self.document_id = Some(id.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// A stored access log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogEntry {
    pub id: i64,
    pub role: Role,
    pub action: AccessAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: DocumentCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderCount {
    pub uploader: String,
    pub count: usize,
}
