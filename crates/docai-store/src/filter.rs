//! Author and upload-date filters applied before listing or scoring.

use chrono::NaiveDate;
use docai_core::{Document, Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Narrows a document list. Empty filters match everything.
///
/// Date bounds compare calendar days of the upload timestamp (UTC) and are
/// inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Case-insensitive substring of the extracted author.
    pub author: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DocumentFilter {
    /// Build from raw query values. Blank values are ignored; dates must be
    /// `YYYY-MM-DD`.
    pub fn parse(author: Option<&str>, from: Option<&str>, to: Option<&str>) -> Result<Self> {
        Ok(Self {
            author: non_blank(author).map(str::to_lowercase),
            from: non_blank(from).map(parse_date).transpose()?,
            to: non_blank(to).map(parse_date).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, document: &Document) -> bool {
        if let Some(author) = &self.author {
            if !document.metadata.author.to_lowercase().contains(author.as_str()) {
                return false;
            }
        }
        let day = document.upload_date.date_naive();
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    pub fn apply(&self, documents: Vec<Document>) -> Vec<Document> {
        if self.is_empty() {
            return documents;
        }
        documents.into_iter().filter(|doc| self.matches(doc)).collect()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::Config(format!("invalid date (expected YYYY-MM-DD): {}", raw)))
}
