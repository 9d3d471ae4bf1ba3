//! Upload handling and text acquisition.

use docai_core::{Error, Result};
use std::path::Path;
use tracing::debug;

use crate::samples::sample_text_for;

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Markdown,
    Pdf,
    Docx,
    Doc,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" | "log" | "csv" => Self::PlainText,
            "md" | "mdx" | "markdown" => Self::Markdown,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "doc" => Self::Doc,
            _ => Self::Unknown,
        }
    }

    /// Detect file type from a MIME type, ignoring parameters such as `charset`.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "text/plain" | "text/csv" => Self::PlainText,
            "text/markdown" | "text/x-markdown" => Self::Markdown,
            "application/pdf" => Self::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => Self::Docx,
            "application/msword" => Self::Doc,
            _ => Self::Unknown,
        }
    }

    /// Declared MIME type first, filename extension as fallback.
    pub fn detect(mime: Option<&str>, filename: &str) -> Self {
        let from_mime = mime
            .filter(|m| !m.trim().is_empty())
            .map(Self::from_mime)
            .unwrap_or(Self::Unknown);
        if from_mime != Self::Unknown {
            return from_mime;
        }
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Check if this is a text-based file type.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::PlainText | Self::Markdown)
    }
}

/// MIME type recorded when the upload declares none.
pub fn mime_from_filename(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "doc" => "application/msword",
        _ => "application/octet-stream",
    }
}

/// A file handed to the pipeline.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.filter(|m| !m.trim().is_empty()),
            bytes,
        }
    }

    /// Read a file from disk. The MIME type is left undeclared.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        Ok(Self::new(filename, None, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn file_type(&self) -> FileType {
        FileType::detect(self.mime_type.as_deref(), &self.filename)
    }
}

/// Produces raw text for an upload.
pub trait TextReader: Send + Sync {
    fn read_text(&self, upload: &Upload) -> Result<String>;
}

/// Text files are decoded as UTF-8; other formats get simulated extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTextReader;

impl TextReader for DefaultTextReader {
    fn read_text(&self, upload: &Upload) -> Result<String> {
        let file_type = upload.file_type();
        if file_type.is_text() {
            return String::from_utf8(upload.bytes.clone()).map_err(|e| {
                Error::Extraction(format!("{}: not valid UTF-8 ({})", upload.filename, e))
            });
        }

        debug!(
            "No extractor for {:?}, using sample text for {}",
            file_type, upload.filename
        );
        Ok(sample_text_for(&upload.filename).to_string())
    }
}
