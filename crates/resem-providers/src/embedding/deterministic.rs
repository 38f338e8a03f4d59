//! Deterministic embedding generator
//!
//! Hash-based placeholder vectors for testing and offline use. No external
//! dependencies, always works without a model server.

use async_trait::async_trait;
use serde_json::Value;
use sha2::{Digest, Sha256};

use resem_domain::constants::DEFAULT_DIMENSIONS;
use resem_domain::error::Result;
use resem_domain::ports::EmbeddingGenerator;

use super::text::canonical_json;

/// Deterministic embedding generator
///
/// Hashes the canonical serialization of the attribute mapping and fills
/// the vector with `sin(hash + i) * 0.5 + 0.5`. Identical attributes give
/// bit-identical vectors; a small attribute change gives an uncorrelated
/// hash and therefore a large vector difference. There is no
/// partial-similarity guarantee under this mode, so do not read semantic
/// meaning into its distances.
///
/// # Example
///
/// ```rust
/// use resem_providers::embedding::DeterministicGenerator;
/// use resem_domain::ports::EmbeddingGenerator;
///
/// let generator = DeterministicGenerator::default();
/// assert_eq!(generator.dimensions(), 384);
/// assert_eq!(generator.generator_name(), "deterministic");
/// ```
pub struct DeterministicGenerator {
    dimensions: usize,
}

impl DeterministicGenerator {
    /// Create a generator producing vectors of the given dimension
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Stable integer hash of the canonical attribute serialization.
    ///
    /// SHA-256 rather than `DefaultHasher`: the output must not change
    /// across platforms or toolchain releases.
    fn attribute_hash(attributes: &Value) -> u64 {
        let canonical = canonical_json(attributes);
        let digest = Sha256::digest(canonical.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }

    fn vector_for(&self, attributes: &Value) -> Vec<f32> {
        let hash = Self::attribute_hash(attributes) as f64;
        (0..self.dimensions)
            .map(|i| ((hash + i as f64).sin() * 0.5 + 0.5) as f32)
            .collect()
    }
}

impl Default for DeterministicGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl EmbeddingGenerator for DeterministicGenerator {
    async fn generate(&self, attributes: &Value) -> Result<Vec<f32>> {
        Ok(self.vector_for(attributes))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn generator_name(&self) -> &str {
        "deterministic"
    }
}
