//! Unit tests for distance metrics

use resem_domain::DistanceMetric;

fn sample_vectors() -> (Vec<f32>, Vec<f32>) {
    let a: Vec<f32> = (0..16).map(|i| (i as f32 * 0.37).sin()).collect();
    let b: Vec<f32> = (0..16).map(|i| (i as f32 * 0.91).cos()).collect();
    (a, b)
}

#[test]
fn test_symmetry() {
    let (a, b) = sample_vectors();
    for metric in [DistanceMetric::L2, DistanceMetric::Cosine] {
        let ab = metric.distance(&a, &b);
        let ba = metric.distance(&b, &a);
        assert!((ab - ba).abs() < 1e-12, "{metric} asymmetric: {ab} vs {ba}");
    }
}

#[test]
fn test_self_distance_is_zero() {
    let (a, _) = sample_vectors();
    for metric in [DistanceMetric::L2, DistanceMetric::Cosine] {
        let d = metric.distance(&a, &a);
        assert!(d.abs() < 1e-9, "{metric} self-distance {d}");
    }
}

#[test]
fn test_distances_are_non_negative() {
    let (a, b) = sample_vectors();
    for metric in [DistanceMetric::L2, DistanceMetric::Cosine] {
        assert!(metric.distance(&a, &b) >= 0.0);
    }
}

#[test]
fn test_l2_known_value() {
    let a = [0.0_f32, 3.0];
    let b = [4.0_f32, 0.0];
    let d = DistanceMetric::L2.distance(&a, &b);
    assert!((d - 5.0).abs() < 1e-9);
}

#[test]
fn test_default_metric_is_l2() {
    assert_eq!(DistanceMetric::default(), DistanceMetric::L2);
}

#[test]
fn test_metric_serde_names() {
    let l2: DistanceMetric = serde_json::from_str("\"l2\"").unwrap();
    let cosine: DistanceMetric = serde_json::from_str("\"cosine\"").unwrap();
    assert_eq!(l2, DistanceMetric::L2);
    assert_eq!(cosine, DistanceMetric::Cosine);
}
