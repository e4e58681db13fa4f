//! The `Metric` trait is used for all distance computations.

use distances::Number;

mod absolute_difference;
mod chebyshev;
mod euclidean;
mod fn_metric;
mod manhattan;

pub use absolute_difference::AbsoluteDifference;
pub use chebyshev::Chebyshev;
pub use euclidean::Euclidean;
pub use fn_metric::FnMetric;
pub use manhattan::Manhattan;

/// The `Metric` trait is used for all distance computations.
///
/// # Type Parameters
///
/// - `I`: The type of the items.
/// - `T`: The type of the distance values.
///
/// The clustering core only calls [`Metric::try_distance`], so a metric that
/// can fail on some pairs of items should override it and report the failure
/// instead of returning a bogus distance.
///
/// # Example
///
/// A metric on byte strings that refuses to compare strings of different
/// lengths.
///
/// ```rust
/// use ordered_dbscan::Metric;
///
/// struct Hamming;
///
/// impl<I: AsRef<[u8]>> Metric<I, usize> for Hamming {
///     fn distance(&self, a: &I, b: &I) -> usize {
///         a.as_ref().iter().zip(b.as_ref()).filter(|(x, y)| x != y).count()
///     }
///
///     fn name(&self) -> &str {
///         "hamming"
///     }
///
///     fn try_distance(&self, a: &I, b: &I) -> Result<usize, String> {
///         if a.as_ref().len() == b.as_ref().len() {
///             Ok(self.distance(a, b))
///         } else {
///             Err("lengths differ".to_string())
///         }
///     }
/// }
///
/// let metric = Hamming;
/// assert_eq!(metric.try_distance(b"hello", b"world"), Ok(4));
/// assert!(metric.try_distance(b"hello", b"hell!").is_ok());
/// assert!(metric.try_distance(&b"hello".as_slice(), &b"hi".as_slice()).is_err());
/// ```
pub trait Metric<I, T: Number> {
    /// Call the metric on two items.
    fn distance(&self, a: &I, b: &I) -> T;

    /// The name of the metric.
    fn name(&self) -> &str;

    /// Call the metric on two items, reporting pairs it cannot measure.
    ///
    /// The default implementation never fails.
    ///
    /// # Errors
    ///
    /// Implementors decide. The provided vector metrics fail when the items
    /// have different dimensionality.
    fn try_distance(&self, a: &I, b: &I) -> Result<T, String> {
        Ok(self.distance(a, b))
    }
}

impl<I, T: Number> Metric<I, T> for Box<dyn Metric<I, T>> {
    fn distance(&self, a: &I, b: &I) -> T {
        (**self).distance(a, b)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn try_distance(&self, a: &I, b: &I) -> Result<T, String> {
        (**self).try_distance(a, b)
    }
}

/// Checks that two vectors can be compared element by element.
fn check_dimensions<T>(a: &[T], b: &[T]) -> Result<(), String> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(format!("dimensionality mismatch: {} vs {}", a.len(), b.len()))
    }
}
