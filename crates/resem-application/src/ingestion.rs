//! Ingestion pipeline: embed resource records and upsert them
//!
//! Embedding generation is stateless per resource, so batches run with
//! bounded concurrency; the store write is the only shared effect and is
//! atomic per key.

use std::sync::Arc;

use futures::StreamExt;
use serde_json::{Value, json};

use resem_domain::error::Result;
use resem_domain::ports::{EmbeddingGenerator, VectorStore};
use resem_domain::{Error, ResourceRecord, UpsertOutcome};

/// How many records embed concurrently during a batch
const BATCH_CONCURRENCY: usize = 8;

/// One record that failed to ingest
#[derive(Debug)]
pub struct IngestFailure {
    /// Resource category of the failed record
    pub resource_type: String,
    /// Identifier of the failed record
    pub resource_id: String,
    /// Why ingestion failed (generation or store error)
    pub error: Error,
}

/// Outcome of a batch ingest
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records embedded and inserted
    pub inserted: usize,
    /// Records whose key already existed; the stored embedding was kept
    pub skipped_existing: usize,
    /// Records that failed; never zero-filled or silently dropped
    pub failed: Vec<IngestFailure>,
}

/// Ingestion service: external feed -> generator -> store
pub struct IngestionService {
    generator: Arc<dyn EmbeddingGenerator>,
    store: Arc<dyn VectorStore>,
}

impl IngestionService {
    /// Create an ingestion service over the given generator and store
    pub fn new(generator: Arc<dyn EmbeddingGenerator>, store: Arc<dyn VectorStore>) -> Self {
        Self { generator, store }
    }

    /// Embed one record and upsert it.
    ///
    /// The identity fields join the attribute view handed to the
    /// generator, so two resources with identical attributes still embed
    /// distinctly. A generation failure (timeout, unavailable model,
    /// wrong dimension) surfaces to the caller and nothing reaches the
    /// store.
    pub async fn ingest(&self, record: &ResourceRecord) -> Result<UpsertOutcome> {
        let vector = self
            .generator
            .generate(&embedding_attributes(record))
            .await?;
        let outcome = self.store.upsert(record, vector).await?;
        tracing::debug!(
            resource_type = %record.resource_type,
            resource_id = %record.resource_id,
            ?outcome,
            "record ingested"
        );
        Ok(outcome)
    }

    /// Ingest a batch with bounded generation concurrency.
    ///
    /// Per-record failures land in the report instead of aborting the
    /// batch.
    pub async fn ingest_batch(&self, records: Vec<ResourceRecord>) -> IngestReport {
        let mut report = IngestReport::default();

        let mut outcomes = futures::stream::iter(records)
            .map(|record| async move {
                let outcome = self.ingest(&record).await;
                (record, outcome)
            })
            .buffer_unordered(BATCH_CONCURRENCY);

        while let Some((record, outcome)) = outcomes.next().await {
            match outcome {
                Ok(UpsertOutcome::Inserted) => report.inserted += 1,
                Ok(UpsertOutcome::AlreadyExists) => report.skipped_existing += 1,
                Err(error) => {
                    tracing::warn!(
                        resource_type = %record.resource_type,
                        resource_id = %record.resource_id,
                        %error,
                        "record skipped"
                    );
                    report.failed.push(IngestFailure {
                        resource_type: record.resource_type,
                        resource_id: record.resource_id,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped_existing,
            failed = report.failed.len(),
            "batch ingest finished"
        );
        report
    }
}

/// Attribute view handed to the generator: the record's attributes with
/// the identity fields merged in under reserved keys
fn embedding_attributes(record: &ResourceRecord) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        "resource_type".to_string(),
        Value::String(record.resource_type.clone()),
    );
    map.insert(
        "resource_id".to_string(),
        Value::String(record.resource_id.clone()),
    );
    match &record.attributes {
        Value::Object(attributes) => {
            for (key, value) in attributes {
                map.insert(key.clone(), value.clone());
            }
        }
        other => {
            map.insert("attributes".to_string(), other.clone());
        }
    }
    Value::Object(map)
}

/// The sample resources the demo feed seeds when no real records exist
pub fn sample_records() -> Vec<ResourceRecord> {
    vec![
        ResourceRecord::new(
            "ec2_instance",
            "i-sample-1",
            json!({
                "instance_type": "t3.micro",
                "state": "running",
                "environment": "production",
                "team": "backend",
                "region": "us-east-1",
                "has_public_ip": true
            }),
        ),
        ResourceRecord::new(
            "ec2_instance",
            "i-sample-2",
            json!({
                "instance_type": "t3.small",
                "state": "running",
                "environment": "production",
                "team": "data",
                "region": "us-east-1",
                "has_public_ip": false
            }),
        ),
        ResourceRecord::new(
            "ec2_instance",
            "i-sample-3",
            json!({
                "instance_type": "t3.medium",
                "state": "stopped",
                "environment": "development",
                "team": "frontend",
                "region": "us-west-2",
                "has_public_ip": true
            }),
        ),
    ]
}
