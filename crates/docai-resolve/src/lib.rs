//! DocAI Resolve: relevance search over processed documents.

pub mod config;
pub mod engine;
pub mod highlight;
pub mod scoring;
pub mod tokenize;
pub mod types;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use types::SearchResult;
