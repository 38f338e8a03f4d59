//! Shared constants for the embedding engine

/// Default embedding vector dimensionality (all-MiniLM-L6-v2 family)
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Default number of IVF index partitions ("lists"), tuned for corpora
/// in the low thousands of embeddings
pub const DEFAULT_ANN_PARTITIONS: usize = 100;

/// Pairwise distance below this value classifies as high similarity
pub const DEFAULT_HIGH_SIMILARITY_THRESHOLD: f64 = 0.1;

/// Pairwise distance below this value (and at or above the high threshold)
/// classifies as moderate similarity
pub const DEFAULT_MODERATE_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Maximum candidate count for an unbounded pairwise scan before the
/// analyzer refuses the quadratic enumeration
pub const DEFAULT_MAX_UNBOUNDED_PAIRS: usize = 500;

/// Corpora at or below this size are always scanned exactly, even when an
/// IVF index snapshot exists
pub const EXACT_SCAN_THRESHOLD: usize = 256;

/// Default timeout for semantic-mode embedding calls, in seconds
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;
