//! Unit tests for configuration loading and validation

use std::io::Write;

use resem_infrastructure::config::{AppConfig, ConfigLoader, GenerationMode};
use resem_domain::value_objects::DistanceMetric;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.embedding.mode, GenerationMode::Deterministic);
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.store.metric, DistanceMetric::L2);
    assert_eq!(config.store.ann_partitions, 100);
    assert_eq!(config.analysis.high_similarity_threshold, 0.1);
    assert_eq!(config.analysis.moderate_similarity_threshold, 0.3);
    assert_eq!(config.logging.level, "info");
    config.validate().unwrap();
}

#[test]
fn test_toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[embedding]
mode = "semantic"
dimensions = 768
model = "nomic-embed-text"

[store]
metric = "cosine"
ann_partitions = 32

[analysis]
high_similarity_threshold = 0.05
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();
    assert_eq!(config.embedding.mode, GenerationMode::Semantic);
    assert_eq!(config.embedding.dimensions, 768);
    assert_eq!(config.embedding.model, "nomic-embed-text");
    assert_eq!(config.store.metric, DistanceMetric::Cosine);
    assert_eq!(config.store.ann_partitions, 32);
    assert_eq!(config.analysis.high_similarity_threshold, 0.05);
    // Untouched sections keep their defaults
    assert_eq!(config.analysis.moderate_similarity_threshold, 0.3);
    assert_eq!(config.embedding.timeout_secs, 30);
}

#[test]
fn test_env_overrides_reach_multi_word_fields() {
    // Nested env keys use a double underscore, so underscores inside
    // field names pass through intact. Each env test uses its own prefix
    // to stay isolated from tests running in parallel.
    figment::Jail::expect_with(|jail| {
        jail.set_env("RESEM_MW_EMBEDDING__DIMENSIONS", "64");
        jail.set_env("RESEM_MW_EMBEDDING__TIMEOUT_SECS", "5");
        jail.set_env("RESEM_MW_STORE__ANN_PARTITIONS", "12");
        jail.set_env("RESEM_MW_ANALYSIS__MAX_UNBOUNDED_PAIRS", "7");

        let config = ConfigLoader::new()
            .with_env_prefix("RESEM_MW")
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        assert_eq!(config.embedding.dimensions, 64);
        assert_eq!(config.embedding.timeout_secs, 5);
        assert_eq!(config.store.ann_partitions, 12);
        assert_eq!(config.analysis.max_unbounded_pairs, 7);
        Ok(())
    });
}

#[test]
fn test_env_overrides_toml_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "layered.toml",
            "[embedding]\ndimensions = 768\ntimeout_secs = 10\n",
        )?;
        jail.set_env("RESEM_LAYERED_EMBEDDING__TIMEOUT_SECS", "3");

        let config = ConfigLoader::new()
            .with_config_path("layered.toml")
            .with_env_prefix("RESEM_LAYERED")
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))?;
        // Env wins over the file; untouched file values survive
        assert_eq!(config.embedding.timeout_secs, 3);
        assert_eq!(config.embedding.dimensions, 768);
        Ok(())
    });
}

#[test]
fn test_validation_rejects_zero_dimensions() {
    let mut config = AppConfig::default();
    config.embedding.dimensions = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("dimensions"));
}

#[test]
fn test_validation_rejects_inverted_thresholds() {
    let mut config = AppConfig::default();
    config.analysis.moderate_similarity_threshold = 0.05;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_zero_partitions() {
    let mut config = AppConfig::default();
    config.store.ann_partitions = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[embedding]\nmode = \"telepathic\"").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, resem_domain::Error::Config { .. }));
}
