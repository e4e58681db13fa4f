//! The `Chebyshev` distance metric.

use distances::Number;

use super::{check_dimensions, Metric};

/// The `Chebyshev` distance metric, the largest difference along any single
/// dimension.
pub struct Chebyshev;

impl<I: AsRef<[T]>, T: Number> Metric<I, T> for Chebyshev {
    fn distance(&self, a: &I, b: &I) -> T {
        distances::vectors::chebyshev(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &str {
        "chebyshev"
    }

    fn try_distance(&self, a: &I, b: &I) -> Result<T, String> {
        check_dimensions(a.as_ref(), b.as_ref())?;
        Ok(self.distance(a, b))
    }
}
