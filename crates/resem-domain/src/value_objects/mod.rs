//! Value objects for the resource embedding engine

pub mod embedding;
pub mod metric;
pub mod resource;
pub mod similarity;

pub use embedding::{StoredEmbedding, UpsertOutcome};
pub use metric::DistanceMetric;
pub use resource::ResourceRecord;
pub use similarity::{
    GroupSimilarity, PairRecommendation, RecommendationTier, ResourceKey, SimilarityResult,
    TierThresholds,
};
