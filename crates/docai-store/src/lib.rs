//! DocAI Store: ordered document list-store with SQLite and in-memory engines.

pub mod filter;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod stats;
pub mod store;
pub mod types;

pub use filter::DocumentFilter;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use stats::{format_file_size, CollectionStats};
pub use store::DocumentStore;
pub use types::*;
