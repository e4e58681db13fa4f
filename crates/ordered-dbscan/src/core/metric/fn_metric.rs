//! A `Metric` built from a closure.

use distances::Number;

use super::Metric;

/// Wraps a named closure so that it can be used wherever a `Metric` is
/// expected.
///
/// ```rust
/// use ordered_dbscan::{metric::FnMetric, Metric};
///
/// let metric = FnMetric::new("first-coordinate", |a: &(f64, f64), b: &(f64, f64)| (a.0 - b.0).abs());
/// assert_eq!(metric.name(), "first-coordinate");
/// assert_eq!(metric.distance(&(1.0, 5.0), &(3.5, -2.0)), 2.5);
/// ```
pub struct FnMetric<F> {
    /// The name of the metric.
    name: String,
    /// The distance function.
    function: F,
}

impl<F> FnMetric<F> {
    /// Creates a new `FnMetric`.
    pub fn new(name: &str, function: F) -> Self {
        Self {
            name: name.to_string(),
            function,
        }
    }
}

impl<I, T: Number, F: Fn(&I, &I) -> T> Metric<I, T> for FnMetric<F> {
    fn distance(&self, a: &I, b: &I) -> T {
        (self.function)(a, b)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
