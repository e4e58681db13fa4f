#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
//! CLI for clustering CSV tables with ordered-axis DBSCAN.

mod commands;
mod metrics;
mod utils;

use clap::Parser;

use commands::Commands;

/// Cluster the records of a CSV table with DBSCAN.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The name of the log file, written under `./logs`.
    #[arg(short('l'), long, default_value = "dbscan")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    match args.command {
        Commands::Cluster { options } => commands::cluster::run(&options, None)?,
        Commands::Weighted {
            options,
            weight,
            feature,
        } => commands::cluster::run(&options, Some((weight.as_str(), feature.as_str())))?,
        Commands::Audit {
            inp_path,
            id_column,
            sort_by,
            epsilon,
            metric,
        } => {
            let mismatches = commands::audit::run(&inp_path, id_column.as_deref(), sort_by.as_deref(), epsilon, metric)?;
            ftlog::info!("Audit found {mismatches} records with inexact neighborhoods.");
        }
    }

    Ok(())
}
