//! Shared application state.

use docai_core::{DocAiConfig, Result};
use docai_ingest::{DefaultTextReader, DocumentProcessor, Ingester, ProcessorConfig};
use docai_resolve::{SearchConfig, SearchEngine};
use docai_store::SqliteStore;
use tracing::info;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DocAiConfig,
    pub store: SqliteStore,
    pub processor: DocumentProcessor,
    pub engine: SearchEngine,
    pub reader: DefaultTextReader,
}

impl AppState {
    /// Open the store under the configured data directory and build the pipeline.
    pub fn new(config: DocAiConfig) -> Result<Self> {
        let store = SqliteStore::open(&config.data_paths.store)?;
        let processor = DocumentProcessor::new(
            ProcessorConfig::default().with_threshold(config.classify_threshold),
        )?;
        let engine =
            SearchEngine::new(SearchConfig::default().with_phrase_bonus(config.phrase_bonus));
        info!(
            "Pipeline ready (threshold {}, phrase bonus {})",
            processor.config().classify_threshold,
            engine.config().phrase_bonus
        );

        Ok(Self {
            config,
            store,
            processor,
            engine,
            reader: DefaultTextReader,
        })
    }

    /// Ingester writing into this state's store, archiving raw uploads.
    pub fn ingester(&self) -> Ingester<'_> {
        Ingester::new(&self.store, &self.reader, &self.processor)
            .with_archive(&self.config.data_paths.uploads)
    }
}
