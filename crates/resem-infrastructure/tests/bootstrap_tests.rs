//! Unit tests for provider bootstrap

use resem_domain::ports::{EmbeddingGenerator, VectorStore};
use resem_infrastructure::config::{AppConfig, GenerationMode};
use resem_infrastructure::{build_generator, build_store};

#[test]
fn test_deterministic_generator_matches_config() {
    let mut config = AppConfig::default();
    config.embedding.dimensions = 64;
    let generator = build_generator(&config).unwrap();
    assert_eq!(generator.generator_name(), "deterministic");
    assert_eq!(generator.dimensions(), 64);
}

#[test]
fn test_semantic_generator_is_constructed_offline() {
    // Construction must not touch the network
    let mut config = AppConfig::default();
    config.embedding.mode = GenerationMode::Semantic;
    let generator = build_generator(&config).unwrap();
    assert_eq!(generator.generator_name(), "http");
    assert_eq!(generator.dimensions(), 384);
}

#[test]
fn test_store_matches_config() {
    let config = AppConfig::default();
    let store = build_store(&config);
    assert_eq!(store.store_name(), "in_memory");
    assert_eq!(store.dimensions(), 384);
    assert_eq!(
        store.metric(),
        resem_domain::value_objects::DistanceMetric::L2
    );
}
