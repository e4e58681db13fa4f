//! Metrics for use with numeric tables

use ordered_dbscan::{
    metric::{Chebyshev, Euclidean, Manhattan},
    Metric,
};

/// The available metrics for numeric tables.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMetric {
    #[clap(name = "euclidean")]
    Euclidean,
    #[clap(name = "manhattan")]
    Manhattan,
    #[clap(name = "chebyshev")]
    Chebyshev,
}

impl ShellMetric {
    /// Get the `Metric` for records of the given type.
    pub fn metric<I: AsRef<[f64]>>(self) -> Box<dyn Metric<I, f64>> {
        match self {
            Self::Euclidean => Box::new(Euclidean),
            Self::Manhattan => Box::new(Manhattan),
            Self::Chebyshev => Box::new(Chebyshev),
        }
    }
}

#[cfg(test)]
mod tests {
    use ordered_dbscan::Metric;

    use super::ShellMetric;

    #[test]
    fn names_and_distances() {
        let (a, b) = (vec![0.0, 0.0], vec![3.0, 4.0]);
        for (shell_metric, name, expected) in [
            (ShellMetric::Euclidean, "euclidean", 5.0),
            (ShellMetric::Manhattan, "manhattan", 7.0),
            (ShellMetric::Chebyshev, "chebyshev", 4.0),
        ] {
            let metric = shell_metric.metric::<Vec<f64>>();
            assert_eq!(metric.name(), name);
            assert!((metric.distance(&a, &b) - expected).abs() < 1e-12);
        }
    }
}
