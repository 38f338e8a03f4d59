//! Provider construction from configuration
//!
//! Builds the configured generator and store as explicit handles; nothing
//! here is a global, so tests can wire isolated engines.

use std::sync::Arc;
use std::time::Duration;

use resem_domain::error::{Error, Result};
use resem_domain::ports::{EmbeddingGenerator, VectorStore};
use resem_providers::embedding::{DeterministicGenerator, HttpEmbeddingGenerator};
use resem_providers::store::InMemoryVectorStore;

use crate::config::{AppConfig, GenerationMode};

/// Build the embedding generator selected by `embedding.mode`
pub fn build_generator(config: &AppConfig) -> Result<Arc<dyn EmbeddingGenerator>> {
    let embedding = &config.embedding;
    match embedding.mode {
        GenerationMode::Deterministic => {
            Ok(Arc::new(DeterministicGenerator::new(embedding.dimensions)))
        }
        GenerationMode::Semantic => {
            let timeout = Duration::from_secs(embedding.timeout_secs);
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
            Ok(Arc::new(HttpEmbeddingGenerator::new(
                embedding.base_url.clone(),
                embedding.model.clone(),
                embedding.dimensions,
                timeout,
                client,
            )))
        }
    }
}

/// Build the vector store from `store` settings
pub fn build_store(config: &AppConfig) -> Arc<dyn VectorStore> {
    Arc::new(InMemoryVectorStore::new(
        config.embedding.dimensions,
        config.store.metric,
        config.store.ann_partitions,
    ))
}
