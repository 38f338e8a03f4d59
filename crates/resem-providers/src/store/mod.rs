//! Vector store implementations

pub mod in_memory;
mod ivf;

pub use in_memory::InMemoryVectorStore;
