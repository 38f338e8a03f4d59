//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the resource embedding engine
#[derive(Error, Debug)]
pub enum Error {
    /// A vector's length does not match the store's configured dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension the store or generator is configured for
        expected: usize,
        /// The dimension actually observed
        actual: usize,
    },

    /// Semantic-mode embedding call exceeded its timeout
    #[error("embedding generation timed out: {message}")]
    GenerationTimeout {
        /// Description of the timed-out call
        message: String,
    },

    /// The external embedding model could not be reached
    #[error("embedding model unavailable: {message}")]
    ModelUnavailable {
        /// Description of the availability failure
        message: String,
    },

    /// Embedding generation error other than timeout/availability
    #[error("embedding error: {message}")]
    Embedding {
        /// Description of the embedding error
        message: String,
    },

    /// Vector store operation error
    #[error("vector store error: {message}")]
    VectorStore {
        /// Description of the vector store error
        message: String,
    },

    /// Resource not found error
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to an operation
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Unbounded pairwise scan requested over too many candidates
    #[error(
        "pairwise scan too large: {candidates} candidate pairs exceed the safety limit of {max}; \
         pass an explicit limit or pre-filter by group"
    )]
    PairwiseScanTooLarge {
        /// Number of candidate pairs the scan would enumerate
        candidates: usize,
        /// Configured safety limit
        max: usize,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create a generation timeout error
    pub fn generation_timeout<S: Into<String>>(message: S) -> Self {
        Self::GenerationTimeout {
            message: message.into(),
        }
    }

    /// Create a model unavailable error
    pub fn model_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ModelUnavailable {
            message: message.into(),
        }
    }

    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a vector store error
    pub fn vector_store<S: Into<String>>(message: S) -> Self {
        Self::VectorStore {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
