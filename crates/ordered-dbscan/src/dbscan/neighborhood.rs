//! Neighborhood search along the sorted axis.

use core::marker::PhantomData;

use distances::Number;

use crate::{Dataset, DbscanError, Metric};

/// How much a set of records counts towards the density threshold.
pub trait Weighting {
    /// The density of the neighborhood of `center`, including `center`
    /// itself exactly once.
    fn density(&self, center: usize, neighbors: &[usize]) -> f64;
}

/// Every record counts once.
pub struct Uniform;

impl Weighting for Uniform {
    fn density(&self, _: usize, neighbors: &[usize]) -> f64 {
        (neighbors.len() + 1).as_f64()
    }
}

/// Every record counts with its own weight.
pub struct Weights<'a>(pub &'a [f64]);

impl Weighting for Weights<'_> {
    fn density(&self, center: usize, neighbors: &[usize]) -> f64 {
        self.0[center] + neighbors.iter().map(|&j| self.0[j]).sum::<f64>()
    }
}

/// The records within `epsilon` of a center, and their density.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood {
    /// Indices of the neighbors in ascending order. The center is excluded.
    pub neighbors: Vec<usize>,
    /// The density of the neighborhood, counting the center.
    pub density: f64,
}

/// Finds neighborhoods in a dataset whose items are sorted along one axis.
///
/// From any center, the scan walks outwards one side at a time and stops at
/// the first item that is not strictly closer than `epsilon`. This is exact
/// as long as distances from a fixed center are non-decreasing in the index
/// gap, and costs one distance computation per neighbor plus at most two.
pub struct OrderedScan<'a, I, U, D, M, W> {
    /// The items.
    data: &'a D,
    /// The distance function.
    metric: &'a M,
    /// The neighborhood radius.
    epsilon: U,
    /// How neighbors count towards density.
    weighting: W,
    /// Phantom data to satisfy the compiler.
    _i: PhantomData<I>,
}

impl<'a, I, U: Number, D: Dataset<I>, M: Metric<I, U>, W: Weighting> OrderedScan<'a, I, U, D, M, W> {
    /// Creates a new scanner.
    pub const fn new(data: &'a D, metric: &'a M, epsilon: U, weighting: W) -> Self {
        Self {
            data,
            metric,
            epsilon,
            weighting,
            _i: PhantomData,
        }
    }

    /// The number of items being scanned.
    pub fn cardinality(&self) -> usize {
        self.data.cardinality()
    }

    /// The neighborhood of `center`, found by scanning outwards until the
    /// first out-of-range item on each side.
    ///
    /// # Errors
    ///
    /// * `DbscanError::DistanceFault` if the metric fails on any pair.
    pub fn scan(&self, center: usize) -> Result<Neighborhood, DbscanError> {
        let mut neighbors = Vec::new();

        for left in (0..center).rev() {
            if !self.in_range(center, left)? {
                break;
            }
            neighbors.push(left);
        }
        neighbors.reverse();

        for right in (center + 1)..self.cardinality() {
            if !self.in_range(center, right)? {
                break;
            }
            neighbors.push(right);
        }

        Ok(self.neighborhood(center, neighbors))
    }

    /// The neighborhood of `center`, found by measuring the distance to every
    /// other item.
    ///
    /// This does not rely on the items being sorted.
    ///
    /// # Errors
    ///
    /// * `DbscanError::DistanceFault` if the metric fails on any pair.
    pub fn linear_scan(&self, center: usize) -> Result<Neighborhood, DbscanError> {
        let mut neighbors = Vec::new();
        for j in (0..self.cardinality()).filter(|&j| j != center) {
            if self.in_range(center, j)? {
                neighbors.push(j);
            }
        }
        Ok(self.neighborhood(center, neighbors))
    }

    /// Whether the item at `other` is strictly closer than `epsilon` to the
    /// item at `center`.
    fn in_range(&self, center: usize, other: usize) -> Result<bool, DbscanError> {
        self.metric
            .try_distance(self.data.get(center), self.data.get(other))
            .map(|d| d < self.epsilon)
            .map_err(|reason| DbscanError::DistanceFault {
                a: center,
                b: other,
                reason,
            })
    }

    /// Attaches the density to a list of neighbors.
    fn neighborhood(&self, center: usize, neighbors: Vec<usize>) -> Neighborhood {
        let density = self.weighting.density(center, &neighbors);
        Neighborhood { neighbors, density }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use crate::{
        metric::{AbsoluteDifference, Euclidean, FnMetric},
        DbscanError, Metric,
    };

    use super::{OrderedScan, Uniform, Weights};

    #[test]
    fn ascending_and_strict() -> Result<(), DbscanError> {
        let data = vec![0.0, 1.0, 1.5, 2.0, 2.5, 3.0, 9.0];
        let scan = OrderedScan::new(&data, &AbsoluteDifference, 1.0, Uniform);

        // 1.0 and 3.0 are exactly at distance 1 from 2.0 and are excluded.
        let n = scan.scan(3)?;
        assert_eq!(n.neighbors, vec![2, 4]);
        assert!(approx_eq!(f64, n.density, 3.0));

        let n = scan.scan(2)?;
        assert_eq!(n.neighbors, vec![1, 3]);

        let n = scan.scan(6)?;
        assert!(n.neighbors.is_empty());
        assert!(approx_eq!(f64, n.density, 1.0));

        for c in 0..data.len() {
            assert_eq!(scan.scan(c)?, scan.linear_scan(c)?);
        }
        Ok(())
    }

    #[test]
    fn stops_at_first_out_of_range() -> Result<(), DbscanError> {
        // Unsorted on purpose: the scan must not look past the 5.0.
        let data = vec![0.0, 5.0, 0.1];
        let scan = OrderedScan::new(&data, &AbsoluteDifference, 1.0, Uniform);
        assert!(scan.scan(0)?.neighbors.is_empty());
        assert_eq!(scan.linear_scan(0)?.neighbors, vec![2]);
        Ok(())
    }

    #[test]
    fn counts_distance_calls() -> Result<(), DbscanError> {
        let calls = std::cell::Cell::new(0_usize);
        let metric = FnMetric::new("counting", |a: &f64, b: &f64| {
            calls.set(calls.get() + 1);
            (a - b).abs()
        });
        let data = (0..1000).map(f64::from).collect::<Vec<_>>();
        let scan = OrderedScan::new(&data, &metric, 2.5, Uniform);

        let n = scan.scan(500)?;
        assert_eq!(n.neighbors, vec![498, 499, 501, 502]);
        assert_eq!(calls.get(), 6);
        Ok(())
    }

    #[test]
    fn weighted_density_counts_center_once() -> Result<(), DbscanError> {
        let data = vec![1.0, 2.0, 3.0, 10.0];
        let weights = vec![3.0, 0.5, 2.0, 7.0];
        let scan = OrderedScan::new(&data, &AbsoluteDifference, 1.5, Weights(&weights));

        let n = scan.scan(1)?;
        assert_eq!(n.neighbors, vec![0, 2]);
        assert!(approx_eq!(f64, n.density, 5.5));

        let n = scan.scan(3)?;
        assert!(approx_eq!(f64, n.density, 7.0));
        Ok(())
    }

    #[test]
    fn distance_faults_name_the_pair() {
        let data = vec![vec![0.0, 0.0], vec![0.5, 0.5], vec![1.0]];
        let scan = OrderedScan::new(&data, &Euclidean, 1.0, Uniform);
        assert_eq!(Metric::<Vec<f64>, f64>::name(&Euclidean), "euclidean");

        match scan.scan(1) {
            Err(DbscanError::DistanceFault { a, b, .. }) => assert_eq!((a, b), (1, 2)),
            other => unreachable!("expected a distance fault, got {other:?}"),
        }
    }
}
