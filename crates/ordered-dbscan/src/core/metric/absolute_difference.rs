//! The `AbsoluteDifference` metric.

use distances::Number;

use super::Metric;

/// The `AbsoluteDifference` metric measures the absolute difference between two
/// values. It is meant to be used with scalars, and any sequence of scalars
/// sorted in non-decreasing order satisfies the ordering the clustering scan
/// relies on.
pub struct AbsoluteDifference;

impl<T: Number> Metric<T, T> for AbsoluteDifference {
    fn distance(&self, a: &T, b: &T) -> T {
        if a < b {
            *b - *a
        } else {
            *a - *b
        }
    }

    fn name(&self) -> &str {
        "absolute-difference"
    }
}
