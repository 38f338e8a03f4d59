//! HTTP embedding generator
//!
//! Implements the semantic generation mode by delegating to an external
//! encoder over an Ollama-style embeddings API. The generator's own job is
//! only to render the attribute mapping into descriptive text before
//! encoding; model quality and versioning belong to the endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use resem_domain::error::{Error, Result};
use resem_domain::ports::EmbeddingGenerator;

use super::text::render_attribute_text;

/// Semantic-mode embedding generator backed by an HTTP encoder endpoint
///
/// Each call is timeout-bounded so a slow or unavailable model cannot stall
/// the store or degrade unrelated queries; on timeout the caller receives
/// `GenerationTimeout` and decides whether to retry, skip, or fall back to
/// the deterministic generator.
///
/// ## Example
///
/// ```rust,no_run
/// use resem_providers::embedding::HttpEmbeddingGenerator;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let generator = HttpEmbeddingGenerator::new(
///         "http://localhost:11434".to_string(),
///         "all-minilm".to_string(),
///         384,
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct HttpEmbeddingGenerator {
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl HttpEmbeddingGenerator {
    /// Create a new HTTP embedding generator
    ///
    /// # Arguments
    /// * `base_url` - Encoder server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "all-minilm")
    /// * `dimensions` - Expected vector dimension; responses of any other
    ///   length are rejected with `DimensionMismatch`
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Get the model name for this generator
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_embedding(&self, text: &str) -> Result<Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!(
                "{}/api/embeddings",
                self.base_url.trim_end_matches('/')
            ))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::generation_timeout(format!(
                        "encoder did not answer within {:?}",
                        self.timeout
                    ))
                } else if e.is_connect() {
                    Error::model_unavailable(format!("cannot reach {}: {}", self.base_url, e))
                } else {
                    Error::embedding(format!("HTTP request failed: {}", e))
                }
            })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(Error::model_unavailable(format!(
                "encoder returned {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "encoder returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("invalid JSON response: {}", e)))
    }

    fn parse_vector(&self, response: &Value) -> Result<Vec<f32>> {
        let vector: Vec<f32> = response["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding("response is missing the embedding array"))?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect();

        if vector.len() != self.dimensions {
            return Err(Error::dimension_mismatch(self.dimensions, vector.len()));
        }
        Ok(vector)
    }
}

#[async_trait]
impl EmbeddingGenerator for HttpEmbeddingGenerator {
    async fn generate(&self, attributes: &Value) -> Result<Vec<f32>> {
        let text = render_attribute_text(attributes);
        tracing::debug!(model = %self.model, chars = text.len(), "requesting embedding");
        let response = self.fetch_embedding(&text).await?;
        self.parse_vector(&response)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn generator_name(&self) -> &str {
        "http"
    }
}
