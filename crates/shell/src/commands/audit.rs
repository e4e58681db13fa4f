//! Checking whether the ordered-axis scan is exact for a table.

use std::path::Path;

use ordered_dbscan::{audit_ordering, Table};

use crate::metrics::ShellMetric;

/// Reads a table and reports the records whose ordered-axis neighborhood
/// differs from the exact one.
///
/// Returns the number of such records.
pub fn run<P: AsRef<Path>>(
    inp_path: P,
    id_column: Option<&str>,
    sort_by: Option<&str>,
    epsilon: f64,
    metric: ShellMetric,
) -> Result<usize, String> {
    let mut table = Table::read_csv(&inp_path, id_column)?;
    if let Some(name) = sort_by {
        table.sort_by_attribute(name)?;
    }
    let attributes = (0..table.attributes().len()).collect::<Vec<_>>();
    table.check_no_missing(&attributes).map_err(|e| e.to_string())?;

    let metric = metric.metric::<Vec<f64>>();
    let mismatches = audit_ordering(&table, &metric, epsilon).map_err(|e| e.to_string())?;

    if mismatches.is_empty() {
        println!("The ordered scan is exact for all {} records.", table.rows().len());
    } else {
        let ids = table.ids();
        let names = mismatches
            .iter()
            .map(|&i| ids.map_or_else(|| table.permutation()[i].to_string(), |ids| ids[i].clone()))
            .collect::<Vec<_>>();
        println!(
            "The ordered scan misses neighbors of {} records: {}",
            mismatches.len(),
            names.join(", ")
        );
    }

    Ok(mismatches.len())
}
