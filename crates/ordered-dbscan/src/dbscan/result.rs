//! The labeling produced by a clustering call.

use super::state::NOISE;

/// The labeling produced by a clustering call.
///
/// `labels()[i]` is `0` if record `i` is noise, and otherwise the id of its
/// cluster. Cluster ids start at `1` and are numbered in the order the sweep
/// discovered the clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    /// The cluster id of each record, or `0` for noise.
    labels: Vec<usize>,
    /// The number of label buckets, counting the noise bucket.
    k: usize,
}

impl Clustering {
    /// Builds a `Clustering` from the labels and the bucket count left by a
    /// sweep.
    pub(crate) fn new(labels: Vec<usize>, k: usize) -> Self {
        Self { labels, k: k.max(1) }
    }

    /// The cluster id of each record, or `0` for noise.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Consumes the clustering and returns the labels.
    #[must_use]
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    /// The number of label buckets, counting the noise bucket `0`.
    ///
    /// Every label lies in `0..k()`, and `k()` is at least `1`.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// The number of clusters reported to callers.
    ///
    /// This is at least `1` even when every record is noise, so that
    /// consumers can always rely on one bucket existing.
    #[must_use]
    pub fn num_clusters(&self) -> usize {
        (self.k - 1).max(1)
    }

    /// Whether a record is noise.
    #[must_use]
    pub fn is_noise(&self, i: usize) -> bool {
        self.labels[i] == NOISE
    }

    /// The indices of the noise records, in ascending order.
    #[must_use]
    pub fn noise(&self) -> Vec<usize> {
        self.members(NOISE)
    }

    /// The indices of the records with the given label, in ascending order.
    #[must_use]
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == id)
            .map(|(i, _)| i)
            .collect()
    }

    /// The number of records in each bucket. Entry `0` counts the noise.
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for &l in &self.labels {
            sizes[l] += 1;
        }
        sizes
    }

    /// The nominal label of each record: `cluster_<id>`, with `cluster_0`
    /// for noise.
    #[must_use]
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| format!("cluster_{l}")).collect()
    }
}
