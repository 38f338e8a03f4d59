//! Use-case services for the resource embedding engine
//!
//! Each service takes explicit handles to the ports it consumes
//! (constructor injection, no global store), so isolated engine instances
//! can coexist in one process.

pub mod analysis;
pub mod ingestion;
pub mod similarity;

pub use analysis::{AnalysisService, AnalysisSettings};
pub use ingestion::{IngestFailure, IngestReport, IngestionService, sample_records};
pub use similarity::SimilarityService;
