//! Similarity query engine

use std::sync::Arc;

use resem_domain::error::Result;
use resem_domain::ports::VectorStore;
use resem_domain::{Error, SimilarityResult};

/// Ranked nearest-neighbor queries over a vector store handle
pub struct SimilarityService {
    store: Arc<dyn VectorStore>,
}

impl SimilarityService {
    /// Create a similarity service over the given store
    pub fn new(store: Arc<dyn VectorStore>) -> Self {
        Self { store }
    }

    /// The `k` embeddings of `resource_type` nearest to a reference
    /// vector, ascending by distance
    pub async fn nearest(
        &self,
        resource_type: &str,
        reference: &[f32],
        k: usize,
    ) -> Result<Vec<SimilarityResult>> {
        tracing::debug!(resource_type, k, "nearest-neighbor query");
        self.store.nearest(resource_type, reference, k).await
    }

    /// The `k` embeddings nearest to an already-stored resource, with the
    /// resource itself excluded from its own results.
    ///
    /// The store port does no self-exclusion (it operates purely on
    /// vectors), so this query asks for one extra hit and filters here.
    ///
    /// # Errors
    /// `NotFound` if `(resource_type, resource_id)` has no embedding.
    pub async fn nearest_to_resource(
        &self,
        resource_type: &str,
        resource_id: &str,
        k: usize,
    ) -> Result<Vec<SimilarityResult>> {
        let own = self
            .store
            .get(resource_type, resource_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("{resource_type}/{resource_id}")))?;

        let mut results = self
            .store
            .nearest(resource_type, &own.vector, k.saturating_add(1))
            .await?;
        results.retain(|r| r.embedding.sequence_id != own.sequence_id);
        results.truncate(k);
        Ok(results)
    }
}
