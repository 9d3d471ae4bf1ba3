//! Document record and the closed vocabularies attached to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Fixed document class assigned by keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    Finance,
    #[serde(rename = "HR")]
    Hr,
    Legal,
    Contracts,
    #[serde(rename = "Technical Reports")]
    TechnicalReports,
    Marketing,
    Operations,
    Uncategorized,
}

impl DocumentCategory {
    /// Every category, in declaration order.
    pub const ALL: [DocumentCategory; 8] = [
        Self::Finance,
        Self::Hr,
        Self::Legal,
        Self::Contracts,
        Self::TechnicalReports,
        Self::Marketing,
        Self::Operations,
        Self::Uncategorized,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Hr => "HR",
            Self::Legal => "Legal",
            Self::Contracts => "Contracts",
            Self::TechnicalReports => "Technical Reports",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = Error;

    /// Accepts display names case-insensitively; `_` and `-` stand in for spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_name(c.as_str()) == wanted)
            .ok_or_else(|| Error::Config(format!("unknown category: {}", s)))
    }
}

/// A caller role. `All` is the sentinel granting visibility to everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Legal,
    Admin,
    All,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Legal => "Legal",
            Self::Admin => "Admin",
            Self::All => "All",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hr" => Ok(Self::Hr),
            "finance" => Ok(Self::Finance),
            "legal" => Ok(Self::Legal),
            "admin" => Ok(Self::Admin),
            "all" => Ok(Self::All),
            _ => Err(Error::Config(format!("unknown role: {}", s))),
        }
    }
}

/// Semantic type of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Person,
    Organization,
    Money,
    Date,
    Location,
}

/// A recognized substring of a specific semantic type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityType,
    pub confidence: f64,
}

/// Metadata derived from document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// First significant line, at most 100 characters.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_date: Option<String>,
    #[serde(default)]
    pub entities: Vec<ExtractedEntity>,
    #[serde(default)]
    pub confidence: f64,
}

/// The unit of storage. Created once by the processor, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub category: DocumentCategory,
    pub upload_date: DateTime<Utc>,
    pub uploader: String,
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    pub file_size: u64,
    pub file_type: String,
    /// Descending frequency, at most 5.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub access_level: Vec<Role>,
}

impl Document {
    /// Admins see everything; other roles see documents granted to them or to `All`.
    pub fn is_visible_to(&self, role: Role) -> bool {
        role == Role::Admin
            || self.access_level.contains(&role)
            || self.access_level.contains(&Role::All)
    }
}

fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}
