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
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod cancel;
mod core;
pub mod dbscan;
mod error;
pub mod operators;

pub use cancel::CancelToken;
pub use core::{dataset, metric, Dataset, Metric, Table};
pub use dbscan::{audit_ordering, cluster, cluster_weighted, Clustering, Params};
pub use error::{DbscanError, Precondition};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
