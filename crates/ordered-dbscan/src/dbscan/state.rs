//! Per-record bookkeeping for one clustering sweep.

use crate::DbscanError;

/// The label of records that belong to no cluster.
pub const NOISE: usize = 0;

/// Visit flags, noise marks and cluster labels for every record, and the id
/// that the next cluster will receive.
///
/// Owned by the driver and lent to the expander. All operations are O(1).
#[derive(Debug, Clone)]
pub struct SweepState {
    /// Whether each record has been examined or adopted into a cluster.
    visited: Vec<bool>,
    /// Whether each record was found to be sparse when first examined.
    noise: Vec<bool>,
    /// The cluster id of each record, or `NOISE`.
    labels: Vec<usize>,
    /// The id that the next cluster will receive.
    next_cluster: usize,
}

impl SweepState {
    /// Creates the state for `cardinality` records, all unvisited and
    /// unlabelled.
    pub fn new(cardinality: usize) -> Self {
        Self {
            visited: vec![false; cardinality],
            noise: vec![false; cardinality],
            labels: vec![NOISE; cardinality],
            next_cluster: 1,
        }
    }

    /// Marks a record as visited.
    pub fn mark_visited(&mut self, i: usize) {
        self.visited[i] = true;
    }

    /// Whether a record has been visited.
    pub fn is_visited(&self, i: usize) -> bool {
        self.visited[i]
    }

    /// Marks a record as noise. The mark is advisory: a later expansion may
    /// still adopt the record as a border point.
    pub fn mark_noise(&mut self, i: usize) {
        self.noise[i] = true;
    }

    /// Whether a record was marked as noise.
    pub fn is_noise(&self, i: usize) -> bool {
        self.noise[i]
    }

    /// Assigns a record to a cluster.
    ///
    /// # Errors
    ///
    /// * `DbscanError::Internal` if the record already belongs to a different
    ///   cluster.
    pub fn assign(&mut self, i: usize, cluster: usize) -> Result<(), DbscanError> {
        match self.labels[i] {
            NOISE => {
                self.labels[i] = cluster;
                Ok(())
            }
            current if current == cluster => Ok(()),
            current => Err(DbscanError::Internal(format!(
                "record {i} is in cluster {current} and cannot move to cluster {cluster}"
            ))),
        }
    }

    /// The cluster id of a record, or `NOISE`.
    pub fn label(&self, i: usize) -> usize {
        self.labels[i]
    }

    /// Reserves the id for a new cluster.
    pub fn new_cluster(&mut self) -> usize {
        let k = self.next_cluster;
        self.next_cluster += 1;
        k
    }

    /// The id the next cluster would receive. After a sweep this is the number
    /// of label buckets, counting the noise bucket.
    pub const fn next_cluster(&self) -> usize {
        self.next_cluster
    }

    /// Whether every record has been visited.
    pub fn all_visited(&self) -> bool {
        self.visited.iter().all(|&v| v)
    }

    /// Consumes the state and returns the labels and the bucket count.
    pub fn into_parts(self) -> (Vec<usize>, usize) {
        (self.labels, self.next_cluster)
    }
}
