//! Provider implementations for the resource embedding engine
//!
//! ## Embedding generators
//!
//! | Generator | Mode | Use |
//! |-----------|------|-----|
//! | `DeterministicGenerator` | deterministic | tests, offline runs |
//! | `HttpEmbeddingGenerator` | semantic | external encoder endpoint |
//!
//! ## Vector stores
//!
//! `InMemoryVectorStore` is the reference implementation of the
//! [`VectorStore`](resem_domain::ports::VectorStore) port: concurrent
//! per-type shards with an IVF-partitioned index rebuilt on demand.

pub mod embedding;
pub mod store;

pub use embedding::{DeterministicGenerator, HttpEmbeddingGenerator};
pub use store::InMemoryVectorStore;
