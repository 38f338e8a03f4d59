//! IVF-style partition index
//!
//! Partitions a resource type's vectors into "lists" around centroids so a
//! query can scan only the lists nearest the reference instead of the whole
//! corpus. Built offline by `rebuild_index`; queries probe a snapshot and
//! never mutate it.

use resem_domain::value_objects::{DistanceMetric, StoredEmbedding};

/// Lloyd iterations run during a rebuild. Centroids stabilize quickly for
/// the corpus sizes this index targets.
const KMEANS_ITERATIONS: usize = 8;

/// One partition: a centroid and the sequence ids assigned to it
struct Partition {
    centroid: Vec<f32>,
    members: Vec<u64>,
}

/// Immutable index snapshot over the first `covered` entries of a shard.
///
/// Entries appended after the snapshot was built are not in any list; the
/// store scans them in addition to the probed lists until the next rebuild.
pub(crate) struct IvfIndex {
    metric: DistanceMetric,
    partitions: Vec<Partition>,
    covered: usize,
}

impl IvfIndex {
    /// Build an index over `entries` with at most `lists` partitions.
    ///
    /// Centroid seeding is deterministic (evenly spaced sample over the
    /// insertion order), so rebuilds over the same corpus produce the same
    /// snapshot.
    pub(crate) fn build(metric: DistanceMetric, lists: usize, entries: &[StoredEmbedding]) -> Self {
        let k = lists.min(entries.len());
        if k == 0 {
            return Self {
                metric,
                partitions: Vec::new(),
                covered: 0,
            };
        }

        let mut centroids: Vec<Vec<f32>> = (0..k)
            .map(|i| entries[i * entries.len() / k].vector.clone())
            .collect();
        let mut assignment = vec![0usize; entries.len()];

        for _ in 0..KMEANS_ITERATIONS {
            let mut moved = false;
            for (idx, entry) in entries.iter().enumerate() {
                let best = nearest_centroid(metric, &centroids, &entry.vector);
                if assignment[idx] != best {
                    assignment[idx] = best;
                    moved = true;
                }
            }

            let dims = entries[0].vector.len();
            let mut sums = vec![vec![0.0f64; dims]; k];
            let mut counts = vec![0usize; k];
            for (idx, entry) in entries.iter().enumerate() {
                let c = assignment[idx];
                counts[c] += 1;
                for (acc, v) in sums[c].iter_mut().zip(&entry.vector) {
                    *acc += f64::from(*v);
                }
            }
            for (c, centroid) in centroids.iter_mut().enumerate() {
                // Empty lists keep their previous centroid
                if counts[c] > 0 {
                    *centroid = sums[c]
                        .iter()
                        .map(|s| (s / counts[c] as f64) as f32)
                        .collect();
                }
            }

            if !moved {
                break;
            }
        }

        let mut partitions: Vec<Partition> = centroids
            .into_iter()
            .map(|centroid| Partition {
                centroid,
                members: Vec::new(),
            })
            .collect();
        for (idx, entry) in entries.iter().enumerate() {
            partitions[assignment[idx]].members.push(entry.sequence_id);
        }

        Self {
            metric,
            partitions,
            covered: entries.len(),
        }
    }

    /// Number of entries this snapshot was built over
    pub(crate) fn covered(&self) -> usize {
        self.covered
    }

    /// Sequence ids in the `nprobe` lists whose centroids are nearest to
    /// `reference`
    pub(crate) fn probe(&self, reference: &[f32], nprobe: usize) -> Vec<u64> {
        let mut ranked: Vec<(f64, usize)> = self
            .partitions
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.members.is_empty())
            .map(|(i, p)| (self.metric.distance(reference, &p.centroid), i))
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .iter()
            .take(nprobe)
            .flat_map(|(_, i)| self.partitions[*i].members.iter().copied())
            .collect()
    }
}

fn nearest_centroid(metric: DistanceMetric, centroids: &[Vec<f32>], vector: &[f32]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = metric.distance(vector, centroid);
        if d < best_distance {
            best_distance = d;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn embedding(seq: u64, vector: Vec<f32>) -> StoredEmbedding {
        StoredEmbedding {
            sequence_id: seq,
            resource_type: "ec2_instance".into(),
            resource_id: format!("i-{seq}"),
            resource_data: json!({}),
            vector,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn build_over_empty_corpus() {
        let index = IvfIndex::build(DistanceMetric::L2, 4, &[]);
        assert_eq!(index.covered(), 0);
        assert!(index.probe(&[0.0, 0.0], 4).is_empty());
    }

    #[test]
    fn probe_prefers_the_nearby_cluster() {
        // Two well-separated clusters around (0,0) and (10,10)
        let mut entries = Vec::new();
        for i in 0..8u64 {
            let offset = i as f32 * 0.01;
            entries.push(embedding(i + 1, vec![offset, offset]));
            entries.push(embedding(i + 101, vec![10.0 + offset, 10.0 + offset]));
        }
        let index = IvfIndex::build(DistanceMetric::L2, 2, &entries);
        assert_eq!(index.covered(), 16);

        let members = index.probe(&[0.1, 0.1], 1);
        assert_eq!(members.len(), 8);
        assert!(members.iter().all(|seq| *seq <= 8));
    }

    #[test]
    fn probing_all_lists_covers_every_member() {
        let entries: Vec<_> = (0..20u64)
            .map(|i| embedding(i + 1, vec![(i as f32).sin(), (i as f32).cos()]))
            .collect();
        let index = IvfIndex::build(DistanceMetric::L2, 5, &entries);
        let members = index.probe(&[0.0, 0.0], 5);
        assert_eq!(members.len(), 20);
    }
}
