//! The commands under the `dbscan` CLI.

pub mod audit;
pub mod cluster;

use std::path::PathBuf;

use clap::Subcommand;

use crate::metrics::ShellMetric;

/// Options shared by the clustering subcommands.
#[derive(clap::Args, Debug)]
pub struct ClusterOptions {
    /// The path to the input `.csv` file.
    #[arg(short('i'), long)]
    pub inp_path: PathBuf,

    /// The path to the output `.csv` file.
    #[arg(short('o'), long)]
    pub out_path: PathBuf,

    /// The name of the column holding record identifiers.
    #[arg(long)]
    pub id_column: Option<String>,

    /// Sort the records by this attribute before clustering. The output keeps
    /// the input order.
    #[arg(short('s'), long)]
    pub sort_by: Option<String>,

    /// The neighborhood radius.
    #[arg(short('e'), long)]
    pub epsilon: f64,

    /// The density threshold.
    #[arg(short('m'), long)]
    pub min_points: usize,

    /// The name of the metric to use.
    #[arg(long, default_value = "euclidean")]
    pub metric: ShellMetric,

    /// Append a nominal `cluster` column to the output.
    #[arg(long, default_value_t = false)]
    pub add_label: bool,

    /// Leave noise records out of the output.
    #[arg(long, default_value_t = false)]
    pub remove_unlabeled: bool,

    /// Write the size of each cluster to this `.csv` file.
    #[arg(long)]
    pub summary_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cluster the records using all of their attributes.
    Cluster {
        #[command(flatten)]
        options: ClusterOptions,
    },
    /// Cluster the records along one feature, weighting each record.
    Weighted {
        #[command(flatten)]
        options: ClusterOptions,

        /// The attribute holding the weight of each record.
        #[arg(short('w'), long)]
        weight: String,

        /// The attribute to cluster along.
        #[arg(short('f'), long)]
        feature: String,
    },
    /// Report records whose ordered-axis neighborhood is not exact.
    Audit {
        /// The path to the input `.csv` file.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The name of the column holding record identifiers.
        #[arg(long)]
        id_column: Option<String>,

        /// Sort the records by this attribute before auditing.
        #[arg(short('s'), long)]
        sort_by: Option<String>,

        /// The neighborhood radius.
        #[arg(short('e'), long)]
        epsilon: f64,

        /// The name of the metric to use.
        #[arg(long, default_value = "euclidean")]
        metric: ShellMetric,
    },
}
