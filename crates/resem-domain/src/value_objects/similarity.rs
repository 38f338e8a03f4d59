//! Similarity query and recommendation value objects

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_SIMILARITY_THRESHOLD, DEFAULT_MODERATE_SIMILARITY_THRESHOLD};
use crate::value_objects::StoredEmbedding;

/// A single nearest-neighbor hit. Transient, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    /// The matched embedding
    pub embedding: StoredEmbedding,
    /// Non-negative distance from the reference vector
    pub distance: f64,
}

/// Identity of one side of a recommendation pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceKey {
    /// Resource category tag
    pub resource_type: String,
    /// Stable identifier within the resource type
    pub resource_id: String,
    /// Store-assigned sequence id, used for pair canonicalization
    pub sequence_id: u64,
}

impl ResourceKey {
    /// Build a key from a stored embedding
    pub fn of(embedding: &StoredEmbedding) -> Self {
        Self {
            resource_type: embedding.resource_type.clone(),
            resource_id: embedding.resource_id.clone(),
            sequence_id: embedding.sequence_id,
        }
    }
}

/// Per-group similarity aggregate against a reference vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSimilarity {
    /// Joined grouping-key values (e.g., "backend / production")
    pub group: String,
    /// Number of embeddings in the group
    pub size: usize,
    /// Average distance of the group's members to the reference vector
    pub avg_distance: f64,
}

/// Classified recommendation for one unordered pair of embeddings.
///
/// Pairs are canonicalized by sequence id (`a.sequence_id < b.sequence_id`)
/// so each unordered pair appears exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairRecommendation {
    /// The earlier-inserted side of the pair
    pub a: ResourceKey,
    /// The later-inserted side of the pair
    pub b: ResourceKey,
    /// Pairwise distance under the store's metric
    pub distance: f64,
    /// Classification of the distance
    pub tier: RecommendationTier,
}

/// Distance thresholds separating the recommendation tiers.
///
/// The lower bound of each band is inclusive: a distance exactly at
/// `high` classifies as moderate, and exactly at `moderate` as low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierThresholds {
    /// Distances strictly below this are high similarity
    pub high: f64,
    /// Distances strictly below this (and at or above `high`) are moderate
    pub moderate: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_SIMILARITY_THRESHOLD,
            moderate: DEFAULT_MODERATE_SIMILARITY_THRESHOLD,
        }
    }
}

/// Recommendation tier derived from a pairwise distance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Near-identical configurations
    HighSimilarity,
    /// Similar configurations worth a consistency review
    ModerateSimilarity,
    /// Clearly different configurations
    LowSimilarity,
}

impl RecommendationTier {
    /// Classify a pairwise distance against the given thresholds
    pub fn classify(distance: f64, thresholds: &TierThresholds) -> Self {
        if distance < thresholds.high {
            Self::HighSimilarity
        } else if distance < thresholds.moderate {
            Self::ModerateSimilarity
        } else {
            Self::LowSimilarity
        }
    }

    /// Short machine-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighSimilarity => "high_similarity",
            Self::ModerateSimilarity => "moderate_similarity",
            Self::LowSimilarity => "low_similarity",
        }
    }

    /// Suggested action for this tier
    pub fn action(&self) -> &'static str {
        match self {
            Self::HighSimilarity => "consider standardization",
            Self::ModerateSimilarity => "review for consistency",
            Self::LowSimilarity => "different use cases",
        }
    }
}
