//! Distance metrics over embedding vectors
//!
//! The metric is a store-wide setting: the ANN index is built for one
//! metric and queries must use the same one, so it is configured on the
//! store rather than per query.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance metric used by the vector store and its index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance over unnormalized vectors (default)
    #[default]
    L2,
    /// Cosine distance (1 - cosine similarity)
    Cosine,
}

impl DistanceMetric {
    /// Compute the distance between two vectors under this metric.
    ///
    /// Both metrics are symmetric and yield zero self-distance. Vectors are
    /// not required to be unit-normalized.
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            Self::L2 => euclidean_distance(a, b),
            Self::Cosine => cosine_distance(a, b),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L2 => write!(f, "l2"),
            Self::Cosine => write!(f, "cosine"),
        }
    }
}

/// Euclidean (L2) distance, accumulated in f64
fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine distance: 1 - dot(a, b) / (|a| * |b|).
///
/// Zero-norm vectors have no direction; two zero vectors are treated as
/// identical (distance 0) and a zero vector against a nonzero one as
/// maximally dissimilar (distance 1).
fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| f64::from(*x) * f64::from(*y))
        .sum();
    let norm_a: f64 = a.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| f64::from(*x) * f64::from(*x)).sum::<f64>().sqrt();

    if norm_a == 0.0 && norm_b == 0.0 {
        0.0
    } else if norm_a == 0.0 || norm_b == 0.0 {
        1.0
    } else {
        1.0 - dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_of_axis_unit_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        let d = DistanceMetric::L2.distance(&a, &b);
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn cosine_of_orthogonal_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        let d = DistanceMetric::Cosine.distance(&a, &b);
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_ignores_magnitude() {
        let a = [1.0, 2.0, 3.0];
        let b = [2.0, 4.0, 6.0];
        let d = DistanceMetric::Cosine.distance(&a, &b);
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn zero_vector_cosine_cases() {
        let zero = [0.0, 0.0];
        let unit = [1.0, 0.0];
        assert_eq!(DistanceMetric::Cosine.distance(&zero, &zero), 0.0);
        assert_eq!(DistanceMetric::Cosine.distance(&zero, &unit), 1.0);
    }
}
