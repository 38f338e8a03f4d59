//! Clustering and recommendation analyzer
//!
//! Read-only consumer of the vector store: aggregates per-group average
//! distance against a reference vector and classifies pairwise distances
//! into recommendation tiers.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use resem_domain::constants::DEFAULT_MAX_UNBOUNDED_PAIRS;
use resem_domain::error::Result;
use resem_domain::ports::VectorStore;
use resem_domain::{
    Error, GroupSimilarity, PairRecommendation, RecommendationTier, ResourceKey, TierThresholds,
};

/// Analyzer tuning: tier thresholds and the quadratic safety valve
#[derive(Debug, Clone, Copy)]
pub struct AnalysisSettings {
    /// Distance thresholds separating the recommendation tiers
    pub thresholds: TierThresholds,
    /// Largest candidate-pair count an unbounded pairwise scan may
    /// enumerate before the analyzer refuses it
    pub max_unbounded_pairs: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            max_unbounded_pairs: DEFAULT_MAX_UNBOUNDED_PAIRS,
        }
    }
}

/// Clustering and recommendation service over a vector store handle
pub struct AnalysisService {
    store: Arc<dyn VectorStore>,
    settings: AnalysisSettings,
}

impl AnalysisService {
    /// Create an analysis service over the given store
    pub fn new(store: Arc<dyn VectorStore>, settings: AnalysisSettings) -> Self {
        Self { store, settings }
    }

    /// Group-average similarity: for every distinct combination of the
    /// named attribute values among a resource type's embeddings, the
    /// group size and average distance to `reference`, ascending by
    /// average distance.
    ///
    /// A missing or null grouping attribute reads as `unknown`; multiple
    /// keys join with `" / "`.
    pub async fn group_average(
        &self,
        resource_type: &str,
        reference: &[f32],
        group_keys: &[String],
    ) -> Result<Vec<GroupSimilarity>> {
        if group_keys.is_empty() {
            return Err(Error::invalid_argument(
                "at least one grouping key is required",
            ));
        }

        let metric = self.store.metric();
        let mut accumulators: HashMap<String, (usize, f64)> = HashMap::new();
        for embedding in self.store.list_by_type(resource_type).await? {
            let group = group_keys
                .iter()
                .map(|key| attribute_label(&embedding.resource_data, key))
                .collect::<Vec<_>>()
                .join(" / ");
            let distance = metric.distance(reference, &embedding.vector);
            let entry = accumulators.entry(group).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += distance;
        }

        let mut groups: Vec<GroupSimilarity> = accumulators
            .into_iter()
            .map(|(group, (size, total))| GroupSimilarity {
                group,
                size,
                avg_distance: total / size as f64,
            })
            .collect();
        groups.sort_by(|a, b| {
            a.avg_distance
                .partial_cmp(&b.avg_distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.group.cmp(&b.group))
        });
        Ok(groups)
    }

    /// Pairwise recommendation classification over every unordered pair of
    /// a resource type's embeddings, canonicalized by sequence id
    /// (`i < j`), ascending by distance and truncated to `limit`.
    ///
    /// # Errors
    /// `PairwiseScanTooLarge` when `limit` is `None` and the candidate
    /// pair count exceeds the configured safety limit; the enumeration is
    /// quadratic in the corpus, so callers at scale should bound it or
    /// pre-filter by group.
    pub async fn pairwise_recommendations(
        &self,
        resource_type: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PairRecommendation>> {
        let embeddings = self.store.list_by_type(resource_type).await?;
        let candidates = embeddings.len() * embeddings.len().saturating_sub(1) / 2;
        if limit.is_none() && candidates > self.settings.max_unbounded_pairs {
            return Err(Error::PairwiseScanTooLarge {
                candidates,
                max: self.settings.max_unbounded_pairs,
            });
        }
        tracing::debug!(resource_type, candidates, "pairwise scan");

        let metric = self.store.metric();
        let mut pairs = Vec::with_capacity(candidates);
        for (i, a) in embeddings.iter().enumerate() {
            for b in &embeddings[i + 1..] {
                let distance = metric.distance(&a.vector, &b.vector);
                pairs.push(PairRecommendation {
                    a: ResourceKey::of(a),
                    b: ResourceKey::of(b),
                    distance,
                    tier: RecommendationTier::classify(distance, &self.settings.thresholds),
                });
            }
        }

        pairs.sort_by(|x, y| {
            x.distance
                .partial_cmp(&y.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| (x.a.sequence_id, x.b.sequence_id).cmp(&(y.a.sequence_id, y.b.sequence_id)))
        });
        if let Some(limit) = limit {
            pairs.truncate(limit);
        }
        Ok(pairs)
    }
}

/// Scalar display label for a grouping attribute
fn attribute_label(data: &Value, key: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => "unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Bool(false)) => "no".to_string(),
        Some(other) => other.to_string(),
    }
}
