//! DBSCAN on records that are sorted along one axis.
//!
//! Both entry points sweep the records once in index order. Neighborhoods are
//! found by [`OrderedScan`], which walks outwards from a center and stops at
//! the first record on each side that is not strictly closer than `epsilon`.
//! This is only correct if, from any fixed center, the distance never
//! decreases as the index gap grows. Sorting scalar records, or sorting by the
//! single attribute the metric reads, is enough.
//!
//! A record is dense when its neighborhood, counting the record itself, has at
//! least `min_points` members. In the weighted variant the members' weights
//! are summed instead, again counting the center exactly once.

mod expand;
mod neighborhood;
mod result;
mod state;
mod sweep;

use distances::Number;

use crate::{CancelToken, Dataset, DbscanError, Metric, Precondition};

pub use neighborhood::{Neighborhood, OrderedScan, Uniform, Weighting, Weights};
pub use result::Clustering;

/// The parameters of a clustering call.
///
/// # Type Parameters
///
/// - `U`: The type of the distance values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params<U> {
    /// The neighborhood radius. Records strictly closer than this are
    /// neighbors.
    epsilon: U,
    /// The density threshold.
    min_points: usize,
    /// Whether having too few records to form any cluster is an error.
    require_cluster: bool,
}

impl<U: Number> Params<U> {
    /// Creates new parameters.
    ///
    /// # Errors
    ///
    /// * `Precondition::InvalidEpsilon` if `epsilon` is not finite and
    ///   positive.
    /// * `Precondition::InvalidMinPoints` if `min_points` is zero.
    pub fn new(epsilon: U, min_points: usize) -> Result<Self, DbscanError> {
        let e = epsilon.as_f64();
        if !(e.is_finite() && e > 0.0) {
            return Err(Precondition::InvalidEpsilon(e).into());
        }
        if min_points == 0 {
            return Err(Precondition::InvalidMinPoints(min_points).into());
        }
        Ok(Self {
            epsilon,
            min_points,
            require_cluster: false,
        })
    }

    /// Rejects datasets with fewer than `min_points` records, which can never
    /// contain a cluster.
    #[must_use]
    pub const fn with_required_cluster(mut self) -> Self {
        self.require_cluster = true;
        self
    }

    /// The neighborhood radius.
    pub const fn epsilon(&self) -> U {
        self.epsilon
    }

    /// The density threshold.
    pub const fn min_points(&self) -> usize {
        self.min_points
    }

    /// Checks the parameters against the number of records.
    fn check_cardinality(&self, cardinality: usize) -> Result<(), Precondition> {
        if self.require_cluster && cardinality < self.min_points {
            Err(Precondition::TooFewRecords {
                cardinality,
                min_points: self.min_points,
            })
        } else {
            Ok(())
        }
    }
}

/// Clusters the records of `data`, which must be sorted so that distances
/// from any center grow with the index gap.
///
/// # Arguments
///
/// * `data` - The records.
/// * `metric` - The distance function, used as is for the whole call.
/// * `params` - The neighborhood radius and density threshold.
/// * `cancel` - Checked before each record of the sweep.
///
/// # Errors
///
/// * `DbscanError::Precondition` if the parameters reject the dataset.
/// * `DbscanError::Cancelled` if `cancel` was triggered.
/// * `DbscanError::DistanceFault` if the metric failed.
///
/// # Example
///
/// ```rust
/// use ordered_dbscan::{cluster, metric::AbsoluteDifference, CancelToken, Params};
///
/// let data = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
/// let params = Params::new(1.5, 2).unwrap();
/// let clustering = cluster(&data, &AbsoluteDifference, &params, &CancelToken::new()).unwrap();
///
/// assert_eq!(clustering.labels(), &[1, 1, 1, 2, 2, 2]);
/// assert_eq!(clustering.k(), 3);
/// assert_eq!(clustering.num_clusters(), 2);
/// ```
pub fn cluster<I, U: Number, D: Dataset<I>, M: Metric<I, U>>(
    data: &D,
    metric: &M,
    params: &Params<U>,
    cancel: &CancelToken,
) -> Result<Clustering, DbscanError> {
    params.check_cardinality(data.cardinality())?;
    let scan = OrderedScan::new(data, metric, params.epsilon, Uniform);
    run(&scan, params, cancel, metric.name())
}

/// Clusters the records of `data` using the sum of the weights in a
/// neighborhood, rather than its size, as its density.
///
/// # Arguments
///
/// * `data` - The records, usually the values of a single feature.
/// * `metric` - The distance function, used as is for the whole call.
/// * `weights` - One finite, non-negative weight per record.
/// * `params` - The neighborhood radius and density threshold.
/// * `cancel` - Checked before each record of the sweep.
///
/// # Errors
///
/// * `DbscanError::Precondition` if the weights or parameters reject the
///   dataset.
/// * `DbscanError::Cancelled` if `cancel` was triggered.
/// * `DbscanError::DistanceFault` if the metric failed.
pub fn cluster_weighted<I, U: Number, D: Dataset<I>, M: Metric<I, U>>(
    data: &D,
    metric: &M,
    weights: &[f64],
    params: &Params<U>,
    cancel: &CancelToken,
) -> Result<Clustering, DbscanError> {
    if weights.len() != data.cardinality() {
        return Err(Precondition::WeightCount {
            expected: data.cardinality(),
            actual: weights.len(),
        }
        .into());
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
    {
        return Err(Precondition::InvalidWeight { index, value }.into());
    }
    params.check_cardinality(data.cardinality())?;

    let scan = OrderedScan::new(data, metric, params.epsilon, Weights(weights));
    run(&scan, params, cancel, metric.name())
}

/// Runs the sweep and logs its progress.
fn run<I, U: Number, D: Dataset<I>, M: Metric<I, U>, W: Weighting>(
    scan: &OrderedScan<'_, I, U, D, M, W>,
    params: &Params<U>,
    cancel: &CancelToken,
    metric_name: &str,
) -> Result<Clustering, DbscanError> {
    ftlog::info!(
        "Clustering {} records with {metric_name}, epsilon {} and min_points {} ...",
        scan.cardinality(),
        params.epsilon,
        params.min_points
    );
    let start = std::time::Instant::now();

    let (labels, k) = sweep::sweep(scan, params.min_points, cancel)?.into_parts();
    let clustering = Clustering::new(labels, k);

    let end = start.elapsed().as_secs_f32();
    ftlog::info!(
        "Finished clustering into {} clusters with {} noise records in {end:.2e} seconds.",
        clustering.k() - 1,
        clustering.noise().len()
    );
    Ok(clustering)
}

/// Finds the records whose ordered-axis neighborhood differs from the one a
/// full linear scan finds.
///
/// The result is empty exactly when the ordered scan is exact for this
/// dataset, metric and radius. Each mismatch is logged as a warning. This
/// costs a distance computation for every pair of records.
///
/// # Errors
///
/// * `DbscanError::Precondition` if `epsilon` is not finite and positive.
/// * `DbscanError::DistanceFault` if the metric failed.
pub fn audit_ordering<I, U: Number, D: Dataset<I>, M: Metric<I, U>>(
    data: &D,
    metric: &M,
    epsilon: U,
) -> Result<Vec<usize>, DbscanError> {
    let params = Params::new(epsilon, 1)?;
    let scan = OrderedScan::new(data, metric, params.epsilon, Uniform);

    let mut mismatches = Vec::new();
    for c in 0..scan.cardinality() {
        let ordered = scan.scan(c)?;
        let linear = scan.linear_scan(c)?;
        if ordered.neighbors != linear.neighbors {
            ftlog::warn!(
                "Ordered scan from record {c} found {} neighbors but a linear scan found {}.",
                ordered.neighbors.len(),
                linear.neighbors.len()
            );
            mismatches.push(c);
        }
    }
    Ok(mismatches)
}
