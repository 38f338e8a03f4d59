//! Domain layer for the resource embedding and similarity engine
//!
//! Contains the entities and value objects shared across the workspace,
//! the typed error hierarchy, and the provider ports (embedding generation
//! and vector storage) implemented by the providers crate.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export the most used types at crate root
pub use error::{Error, Result};
pub use value_objects::{
    DistanceMetric, GroupSimilarity, PairRecommendation, RecommendationTier, ResourceKey,
    ResourceRecord, SimilarityResult, StoredEmbedding, TierThresholds, UpsertOutcome,
};
