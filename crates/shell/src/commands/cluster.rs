//! Clustering a table and writing the labelled records.

use std::path::Path;

use ordered_dbscan::{
    operators::{dbscan, weighted_dbscan},
    CancelToken, Clustering, Params, Table,
};

use super::ClusterOptions;

/// One row of the cluster summary file.
#[derive(Debug, serde::Serialize)]
struct ClusterSize {
    /// The nominal label of the cluster, `cluster_0` for noise.
    cluster: String,
    /// The number of records with that label.
    size: usize,
}

/// Reads a table, clusters it and writes the result.
///
/// # Arguments
///
/// * `options` - The shared clustering options.
/// * `weighted` - The weight and feature attributes, for the weighted variant.
pub fn run(options: &ClusterOptions, weighted: Option<(&str, &str)>) -> Result<(), String> {
    let mut table = Table::read_csv(&options.inp_path, options.id_column.as_deref())?;
    ftlog::info!(
        "Read {} records with {} attributes from {:?}.",
        table.rows().len(),
        table.attributes().len(),
        options.inp_path
    );

    if let Some(name) = &options.sort_by {
        table.sort_by_attribute(name)?;
    }

    let params = Params::new(options.epsilon, options.min_points).map_err(|e| e.to_string())?;
    let cancel = CancelToken::new();
    let clustering = match weighted {
        Some((weight, feature)) => {
            let metric = options.metric.metric::<[f64; 1]>();
            weighted_dbscan(&mut table, &metric, weight, feature, &params, &cancel)
        }
        None => {
            let metric = options.metric.metric::<Vec<f64>>();
            dbscan(&mut table, &metric, &params, &cancel)
        }
    }
    .map_err(|e| e.to_string())?;
    println!(
        "Found {} clusters and {} noise records.",
        clustering.k() - 1,
        clustering.noise().len()
    );

    write_output(&table, &clustering, options)?;
    ftlog::info!("Wrote clustered records to {:?}.", options.out_path);

    if let Some(path) = &options.summary_path {
        write_summary(path, &clustering)?;
        ftlog::info!("Wrote cluster sizes to {path:?}.");
    }

    Ok(())
}

/// Writes the records in their input order, optionally labelled and without
/// noise.
fn write_output(table: &Table, clustering: &Clustering, options: &ClusterOptions) -> Result<(), String> {
    let mut keep = (0..table.rows().len()).collect::<Vec<_>>();
    if options.sort_by.is_some() {
        keep = table.restore_order(&keep)?;
    }
    if options.remove_unlabeled {
        keep.retain(|&i| !clustering.is_noise(i));
    }

    let names = clustering.label_names();
    let labels = keep.iter().map(|&i| names[i].clone()).collect::<Vec<_>>();
    let extra = if options.add_label {
        vec![("cluster", labels.as_slice())]
    } else {
        Vec::new()
    };

    table.select(&keep).write_csv(&options.out_path, &extra)
}

/// Writes the number of records in each cluster, noise first.
fn write_summary<P: AsRef<Path>>(path: P, clustering: &Clustering) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| e.to_string())?;
    for (id, size) in clustering.cluster_sizes().into_iter().enumerate() {
        let row = ClusterSize {
            cluster: format!("cluster_{id}"),
            size,
        };
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}
