//! DocAI Core: document model, access roles, configuration, errors.

pub mod config;
pub mod document;
pub mod error;

pub use config::{DataPaths, DocAiConfig};
pub use document::{
    DocumentCategory, Document, DocumentMetadata, EntityType, ExtractedEntity, Role,
};
pub use error::{Error, Result};
