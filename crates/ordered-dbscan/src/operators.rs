//! Clustering operators that work on a [`Table`].
//!
//! These check the table once before the sweep: every record gets an
//! identifier, and no attribute that the distance reads may have a missing
//! value. The table must already be sorted so that the ordered-axis scan is
//! exact, e.g. with [`Table::sort_by_attribute`].

use distances::Number;

use crate::{cluster, cluster_weighted, CancelToken, Clustering, DbscanError, Metric, Params, Table};

/// Clusters the records of a table using all of its attributes.
///
/// # Errors
///
/// * `Precondition::MissingValues` if any attribute of any record is missing.
/// * Any error from [`cluster`].
pub fn dbscan<U: Number, M: Metric<Vec<f64>, U>>(
    table: &mut Table,
    metric: &M,
    params: &Params<U>,
    cancel: &CancelToken,
) -> Result<Clustering, DbscanError> {
    table.ensure_ids();
    let attributes = (0..table.attributes().len()).collect::<Vec<_>>();
    table.check_no_missing(&attributes)?;

    cluster(&*table, metric, params, cancel)
}

/// Clusters the records of a table along a single feature attribute, using
/// the sum of a weight attribute as the density.
///
/// The metric sees each record as a one-element vector holding its feature
/// value.
///
/// # Errors
///
/// * `Precondition::UnknownAttribute` if either attribute does not exist.
/// * `Precondition::MissingValues` if either attribute has a missing value.
/// * Any error from [`cluster_weighted`].
pub fn weighted_dbscan<U: Number, M: Metric<[f64; 1], U>>(
    table: &mut Table,
    metric: &M,
    weight_attribute: &str,
    feature_attribute: &str,
    params: &Params<U>,
    cancel: &CancelToken,
) -> Result<Clustering, DbscanError> {
    table.ensure_ids();
    let weight = table.require_attribute(weight_attribute)?;
    let feature = table.require_attribute(feature_attribute)?;
    table.check_no_missing(&[feature, weight])?;

    let features = table.column(feature).into_iter().map(|v| [v]).collect::<Vec<_>>();
    let weights = table.column(weight);
    ftlog::debug!(
        "Clustering {} along `{feature_attribute}` weighted by `{weight_attribute}`.",
        table.name()
    );

    cluster_weighted(&features, metric, &weights, params, cancel)
}
