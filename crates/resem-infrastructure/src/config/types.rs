//! Configuration types

use serde::{Deserialize, Serialize};

use resem_domain::constants::{
    DEFAULT_ANN_PARTITIONS, DEFAULT_DIMENSIONS, DEFAULT_EMBEDDING_TIMEOUT_SECS,
    DEFAULT_HIGH_SIMILARITY_THRESHOLD, DEFAULT_MAX_UNBOUNDED_PAIRS,
    DEFAULT_MODERATE_SIMILARITY_THRESHOLD,
};
use resem_domain::error::{Error, Result};
use resem_domain::value_objects::DistanceMetric;

/// Which embedding generation mode to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Hash-based reproducible vectors, no external model
    #[default]
    Deterministic,
    /// External encoder endpoint
    Semantic,
}

/// Embedding generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Generation mode
    pub mode: GenerationMode,

    /// Vector dimensionality
    pub dimensions: usize,

    /// Encoder server URL (semantic mode)
    pub base_url: String,

    /// Encoder model name (semantic mode)
    pub model: String,

    /// Per-call timeout in seconds (semantic mode)
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            dimensions: DEFAULT_DIMENSIONS,
            base_url: "http://localhost:11434".to_string(),
            model: "all-minilm".to_string(),
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
        }
    }
}

/// Vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store-wide distance metric; must match the index build
    pub metric: DistanceMetric,

    /// IVF index partition count ("lists")
    pub ann_partitions: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::default(),
            ann_partitions: DEFAULT_ANN_PARTITIONS,
        }
    }
}

/// Clustering/recommendation analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Distances below this are high similarity
    pub high_similarity_threshold: f64,

    /// Distances below this (and at or above the high threshold) are
    /// moderate similarity
    pub moderate_similarity_threshold: f64,

    /// Safety limit for unbounded pairwise scans
    pub max_unbounded_pairs: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_similarity_threshold: DEFAULT_HIGH_SIMILARITY_THRESHOLD,
            moderate_similarity_threshold: DEFAULT_MODERATE_SIMILARITY_THRESHOLD,
            max_unbounded_pairs: DEFAULT_MAX_UNBOUNDED_PAIRS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter (overridable via `RUST_LOG`)
    pub level: String,

    /// Emit JSON-structured log lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Embedding generator configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Vector store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Analyzer configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.embedding.dimensions == 0 {
            return Err(Error::config("embedding.dimensions must be positive"));
        }
        if self.store.ann_partitions == 0 {
            return Err(Error::config("store.ann_partitions must be positive"));
        }
        if self.analysis.high_similarity_threshold <= 0.0 {
            return Err(Error::config(
                "analysis.high_similarity_threshold must be positive",
            ));
        }
        if self.analysis.moderate_similarity_threshold <= self.analysis.high_similarity_threshold {
            return Err(Error::config(
                "analysis.moderate_similarity_threshold must exceed the high threshold",
            ));
        }
        Ok(())
    }
}
