//! Vector storage port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{
    DistanceMetric, ResourceRecord, SimilarityResult, StoredEmbedding, UpsertOutcome,
};

/// Vector Storage Interface
///
/// Persistent keyed collection of embeddings with an approximate
/// nearest-neighbor index. The store accepts precomputed vectors and never
/// computes embeddings itself; generation lives behind
/// [`EmbeddingGenerator`](crate::ports::EmbeddingGenerator).
///
/// Handles are passed explicitly to every component that needs one
/// (constructor injection), so isolated store instances can coexist in
/// tests.
///
/// ## Concurrency contract
///
/// - `upsert` is atomic per key; a reader never observes a partially
///   written embedding.
/// - Reads run concurrently with each other and with unrelated-key writes;
///   no snapshot isolation is promised.
/// - `rebuild_index` is the only operation taking exclusive access to the
///   index structure, and it is explicit maintenance, never implicit on
///   write. Queries fall back to the previous index snapshot (or an exact
///   scan) while a rebuild is in flight or after one fails.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert an embedding, or do nothing if the
    /// `(resource_type, resource_id)` key already exists.
    ///
    /// # Errors
    /// `DimensionMismatch` if `vector.len()` differs from the store's
    /// dimension; the store is left unchanged. A duplicate key is not an
    /// error and reports [`UpsertOutcome::AlreadyExists`].
    async fn upsert(&self, record: &ResourceRecord, vector: Vec<f32>) -> Result<UpsertOutcome>;

    /// Look up an embedding by key. `Ok(None)` for unknown keys.
    async fn get(&self, resource_type: &str, resource_id: &str)
    -> Result<Option<StoredEmbedding>>;

    /// Number of embeddings stored for a resource type (0 if unknown)
    async fn count_by(&self, resource_type: &str) -> Result<usize>;

    /// All embeddings of a resource type, ascending by sequence id.
    /// Empty for an unknown type, not an error.
    async fn list_by_type(&self, resource_type: &str) -> Result<Vec<StoredEmbedding>>;

    /// The `k` embeddings of `resource_type` nearest to `reference`,
    /// ascending by distance, ties broken by ascending sequence id.
    ///
    /// `k == 0` returns an empty sequence; `k` larger than the population
    /// returns every candidate. No self-exclusion happens here: the
    /// operation is purely vector-based and the caller filters out the
    /// reference's own resource when needed.
    async fn nearest(
        &self,
        resource_type: &str,
        reference: &[f32],
        k: usize,
    ) -> Result<Vec<SimilarityResult>>;

    /// Rebuild the ANN index with the given partition count ("lists").
    ///
    /// Offline maintenance: blocks concurrent writers per resource type
    /// while its partitions are rebuilt. A failed rebuild leaves the prior
    /// snapshot serving queries.
    async fn rebuild_index(&self, partitions: usize) -> Result<()>;

    /// The store-wide distance metric the index was built for
    fn metric(&self) -> DistanceMetric;

    /// The vector dimension every embedding in this store has
    fn dimensions(&self) -> usize;

    /// The name/identifier of this store implementation
    fn store_name(&self) -> &str;
}
