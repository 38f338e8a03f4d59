//! Embedding generator implementations
//!
//! Converts resource attribute mappings into dense vectors. The
//! deterministic generator needs no external service and produces
//! reproducible vectors; the HTTP generator delegates to a local or remote
//! encoder for meaning-level similarity.

pub mod deterministic;
pub mod http;
pub mod text;

pub use deterministic::DeterministicGenerator;
pub use http::HttpEmbeddingGenerator;
