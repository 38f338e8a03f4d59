//! Unit tests for the error hierarchy

use resem_domain::Error;

#[test]
fn test_dimension_mismatch_message() {
    let err = Error::dimension_mismatch(384, 512);
    assert_eq!(
        err.to_string(),
        "dimension mismatch: expected 384, got 512"
    );
}

#[test]
fn test_not_found_message() {
    let err = Error::not_found("ec2_instance/i-missing");
    assert_eq!(err.to_string(), "not found: ec2_instance/i-missing");
}

#[test]
fn test_pairwise_scan_too_large_mentions_limit() {
    let err = Error::PairwiseScanTooLarge {
        candidates: 1000,
        max: 500,
    };
    let msg = err.to_string();
    assert!(msg.contains("1000"));
    assert!(msg.contains("500"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_json_error_conversion() {
    let bad = serde_json::from_str::<serde_json::Value>("{not json");
    let err: Error = bad.unwrap_err().into();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_helper_constructors() {
    assert!(matches!(
        Error::generation_timeout("model call exceeded 30s"),
        Error::GenerationTimeout { .. }
    ));
    assert!(matches!(
        Error::model_unavailable("connection refused"),
        Error::ModelUnavailable { .. }
    ));
    assert!(matches!(
        Error::vector_store("shard poisoned"),
        Error::VectorStore { .. }
    ));
    assert!(matches!(Error::config("bad metric"), Error::Config { .. }));
}
