//! DocAI Ingest: rule-based document processing, text acquisition, ingestion.

pub mod config;
pub mod extract;
pub mod file;
pub mod ingest;
pub mod processor;
pub mod samples;

pub use config::{CategoryRule, EntityPattern, ProcessorConfig};
pub use file::{DefaultTextReader, FileType, TextReader, Upload};
pub use ingest::{archive_path, BatchFailure, BatchReport, Ingester};
pub use processor::DocumentProcessor;
