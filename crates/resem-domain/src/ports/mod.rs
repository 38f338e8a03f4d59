//! Provider ports implemented by the providers crate

pub mod embedding;
pub mod vector_store;

pub use embedding::EmbeddingGenerator;
pub use vector_store::VectorStore;
