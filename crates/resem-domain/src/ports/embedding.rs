//! Embedding generation port

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Embedding Generation Interface
///
/// Maps a resource's attribute mapping to a fixed-length vector. The
/// contract is total over well-formed attribute objects: missing or null
/// fields are treated as defaults before serialization, and generation
/// never fails because a key is absent.
///
/// Two implementations exist: a deterministic hash-based generator for
/// testing and offline use (identical attributes give bit-identical
/// vectors; no partial-similarity guarantee), and a semantic generator
/// delegating to an external encoder over HTTP. Non-determinism and model
/// versioning are the external model's concern.
///
/// # Example
///
/// ```ignore
/// use resem_domain::ports::EmbeddingGenerator;
///
/// let vector = generator.generate(&attributes).await?;
/// assert_eq!(vector.len(), generator.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingGenerator: Send + Sync {
    /// Generate an embedding vector for the given attribute mapping.
    ///
    /// # Errors
    /// `DimensionMismatch` if the external model returned a vector of the
    /// wrong length, `GenerationTimeout`/`ModelUnavailable` if the semantic
    /// call failed. Callers must not insert a vector from a failed call.
    async fn generate(&self, attributes: &Value) -> Result<Vec<f32>>;

    /// The dimensionality of vectors produced by this generator
    fn dimensions(&self) -> usize;

    /// The name/identifier of this generator (e.g., "deterministic", "http")
    fn generator_name(&self) -> &str;

    /// Health check for the generator (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.generate(&Value::Object(serde_json::Map::new())).await?;
        Ok(())
    }
}
