//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3003;
/// Minimum keyword score a category needs before it is assigned.
pub const DEFAULT_CLASSIFY_THRESHOLD: usize = 3;
/// Flat bonus for documents containing the whole query phrase.
pub const DEFAULT_PHRASE_BONUS: f64 = 5.0;

/// Paths to all DocAI data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Document database directory (`data/store/`).
    pub store: PathBuf,
    /// Raw uploads kept for reprocessing (`data/uploads/`).
    pub uploads: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            store: root.join("store"),
            uploads: root.join("uploads"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.store)?;
        std::fs::create_dir_all(&self.uploads)?;
        debug!("Data directories ready under {}", self.root.display());
        Ok(())
    }
}

/// Top-level DocAI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocAiConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Classification score threshold.
    pub classify_threshold: usize,
    /// Exact-phrase relevance bonus.
    pub phrase_bonus: f64,
}

impl DocAiConfig {
    /// Create configuration from environment and defaults.
    ///
    /// Reads `PORT`, `DOCAI_CLASSIFY_THRESHOLD` and `DOCAI_PHRASE_BONUS`;
    /// unparsable values fall back to the defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port: env_or("PORT", DEFAULT_PORT),
            data_paths,
            classify_threshold: env_or("DOCAI_CLASSIFY_THRESHOLD", DEFAULT_CLASSIFY_THRESHOLD),
            phrase_bonus: env_or("DOCAI_PHRASE_BONUS", DEFAULT_PHRASE_BONUS),
        })
    }

    /// Configuration with default tuning for the given data directory.
    pub fn with_defaults(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self {
            port: DEFAULT_PORT,
            data_paths: DataPaths::new(data_dir)?,
            classify_threshold: DEFAULT_CLASSIFY_THRESHOLD,
            phrase_bonus: DEFAULT_PHRASE_BONUS,
        })
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(std::env::var(key).ok().as_deref(), default)
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
