//! The `Manhattan` distance metric.

use distances::Number;

use super::{check_dimensions, Metric};

/// The `Manhattan` distance metric, also known as the L1 norm.
pub struct Manhattan;

impl<I: AsRef<[T]>, T: Number> Metric<I, T> for Manhattan {
    fn distance(&self, a: &I, b: &I) -> T {
        distances::vectors::manhattan(a.as_ref(), b.as_ref())
    }

    fn name(&self) -> &str {
        "manhattan"
    }

    fn try_distance(&self, a: &I, b: &I) -> Result<T, String> {
        check_dimensions(a.as_ref(), b.as_ref())?;
        Ok(self.distance(a, b))
    }
}
