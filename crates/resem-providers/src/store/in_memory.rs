//! In-memory vector store implementation
//!
//! Reference implementation of the `VectorStore` port. Embeddings live in
//! concurrent per-type shards; data is not persisted and is lost on
//! restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use resem_domain::constants::{DEFAULT_ANN_PARTITIONS, DEFAULT_DIMENSIONS, EXACT_SCAN_THRESHOLD};
use resem_domain::error::{Error, Result};
use resem_domain::ports::VectorStore;
use resem_domain::value_objects::{
    DistanceMetric, ResourceRecord, SimilarityResult, StoredEmbedding, UpsertOutcome,
};

use super::ivf::IvfIndex;

/// Number of IVF lists probed per query. A tenth of the default partition
/// count trades recall for speed; queries needing more candidates than the
/// probe returns fall back to an exact scan.
const NPROBE: usize = 10;

/// Per-resource-type shard. Entries are append-only and stay in insertion
/// order, so the vector is also sorted by sequence id.
#[derive(Default)]
struct TypeShard {
    entries: Vec<StoredEmbedding>,
    by_id: HashMap<String, usize>,
    index: Option<IvfIndex>,
}

/// In-memory vector store
///
/// Uniqueness is enforced per `(resource_type, resource_id)` with
/// insert-or-ignore conflict semantics. Upserts are atomic per key (the
/// dashmap shard lock covers the whole insert), so a reader never sees a
/// partially written embedding. Nearest-neighbor queries scan exactly for
/// small corpora and probe the IVF snapshot for large ones.
pub struct InMemoryVectorStore {
    shards: DashMap<String, TypeShard>,
    next_sequence: AtomicU64,
    dimensions: usize,
    metric: DistanceMetric,
    ann_partitions: usize,
}

impl InMemoryVectorStore {
    /// Create a store for vectors of `dimensions` length under `metric`,
    /// with `ann_partitions` IVF lists per rebuild
    pub fn new(dimensions: usize, metric: DistanceMetric, ann_partitions: usize) -> Self {
        Self {
            shards: DashMap::new(),
            next_sequence: AtomicU64::new(0),
            dimensions,
            metric,
            ann_partitions,
        }
    }

    /// Default IVF partition count used when `rebuild_index` is driven
    /// without an explicit override
    pub fn ann_partitions(&self) -> usize {
        self.ann_partitions
    }

    /// Candidate set for a query: probed index members plus every entry
    /// appended after the snapshot was built. Falls back to the full shard
    /// when there is no snapshot or the corpus is small enough to scan.
    fn candidate_indices(shard: &TypeShard, reference: &[f32], k: usize) -> Vec<usize> {
        let exact = || (0..shard.entries.len()).collect::<Vec<_>>();

        if shard.entries.len() <= EXACT_SCAN_THRESHOLD {
            return exact();
        }
        let Some(index) = &shard.index else {
            return exact();
        };

        let mut probed = index.probe(reference, NPROBE);
        if probed.len() < k {
            return exact();
        }

        probed.sort_unstable();
        let mut indices: Vec<usize> = probed
            .iter()
            .filter_map(|seq| {
                shard
                    .entries
                    .binary_search_by_key(seq, |e| e.sequence_id)
                    .ok()
            })
            .collect();
        indices.extend(index.covered()..shard.entries.len());
        indices
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_DIMENSIONS,
            DistanceMetric::default(),
            DEFAULT_ANN_PARTITIONS,
        )
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, record: &ResourceRecord, vector: Vec<f32>) -> Result<UpsertOutcome> {
        if vector.len() != self.dimensions {
            return Err(Error::dimension_mismatch(self.dimensions, vector.len()));
        }

        let mut shard = self.shards.entry(record.resource_type.clone()).or_default();
        if shard.by_id.contains_key(&record.resource_id) {
            tracing::debug!(
                resource_type = %record.resource_type,
                resource_id = %record.resource_id,
                "duplicate upsert ignored"
            );
            return Ok(UpsertOutcome::AlreadyExists);
        }

        let sequence_id = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let position = shard.entries.len();
        shard.entries.push(StoredEmbedding {
            sequence_id,
            resource_type: record.resource_type.clone(),
            resource_id: record.resource_id.clone(),
            resource_data: record.attributes.clone(),
            vector,
            created_at: Utc::now(),
        });
        shard.by_id.insert(record.resource_id.clone(), position);
        Ok(UpsertOutcome::Inserted)
    }

    async fn get(
        &self,
        resource_type: &str,
        resource_id: &str,
    ) -> Result<Option<StoredEmbedding>> {
        Ok(self.shards.get(resource_type).and_then(|shard| {
            shard
                .by_id
                .get(resource_id)
                .map(|position| shard.entries[*position].clone())
        }))
    }

    async fn count_by(&self, resource_type: &str) -> Result<usize> {
        Ok(self
            .shards
            .get(resource_type)
            .map(|shard| shard.entries.len())
            .unwrap_or(0))
    }

    async fn list_by_type(&self, resource_type: &str) -> Result<Vec<StoredEmbedding>> {
        Ok(self
            .shards
            .get(resource_type)
            .map(|shard| shard.entries.clone())
            .unwrap_or_default())
    }

    async fn nearest(
        &self,
        resource_type: &str,
        reference: &[f32],
        k: usize,
    ) -> Result<Vec<SimilarityResult>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let Some(shard) = self.shards.get(resource_type) else {
            return Ok(Vec::new());
        };

        let mut scored: Vec<(f64, usize)> = Self::candidate_indices(shard.value(), reference, k)
            .into_iter()
            .map(|i| (self.metric.distance(reference, &shard.entries[i].vector), i))
            .collect();
        // Ascending distance, ties broken by ascending sequence id
        scored.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    shard.entries[a.1]
                        .sequence_id
                        .cmp(&shard.entries[b.1].sequence_id)
                })
        });
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(distance, i)| SimilarityResult {
                embedding: shard.entries[i].clone(),
                distance,
            })
            .collect())
    }

    async fn rebuild_index(&self, partitions: usize) -> Result<()> {
        if partitions == 0 {
            return Err(Error::invalid_argument(
                "index partition count must be positive",
            ));
        }

        for mut shard in self.shards.iter_mut() {
            let snapshot = IvfIndex::build(self.metric, partitions, &shard.value().entries);
            tracing::info!(
                resource_type = %shard.key(),
                entries = snapshot.covered(),
                partitions,
                "index rebuilt"
            );
            shard.value_mut().index = Some(snapshot);
        }
        Ok(())
    }

    fn metric(&self) -> DistanceMetric {
        self.metric
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn store_name(&self) -> &str {
        "in_memory"
    }
}
