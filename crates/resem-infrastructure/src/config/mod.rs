//! Configuration types and loader

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalysisConfig, AppConfig, EmbeddingConfig, GenerationMode, LoggingConfig, StoreConfig,
};
