//! Stored embedding value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted resource embedding.
///
/// Owned exclusively by the vector store. At most one exists per
/// `(resource_type, resource_id)` key, every embedding in a store instance
/// has the same vector dimension, and an embedding is never mutated in
/// place after insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredEmbedding {
    /// Store-assigned, monotonically increasing id; used for tie-break
    /// and pair canonicalization
    pub sequence_id: u64,
    /// Resource category tag, part of the unique key
    pub resource_type: String,
    /// Stable identifier, part of the unique key
    pub resource_id: String,
    /// Denormalized attribute copy, for display only
    pub resource_data: Value,
    /// The embedding vector
    pub vector: Vec<f32>,
    /// Insert timestamp, never updated
    pub created_at: DateTime<Utc>,
}

/// Outcome of a store upsert.
///
/// The conflict policy is insert-or-ignore: a duplicate key is a visible
/// no-op, never an error and never a replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertOutcome {
    /// A new embedding was inserted
    Inserted,
    /// The key already existed; the store kept the first-inserted embedding
    AlreadyExists,
}
