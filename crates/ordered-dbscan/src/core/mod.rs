//! The core traits and structs for density-based clustering.

pub mod dataset;
pub mod metric;

pub use dataset::{Dataset, Table};
pub use metric::Metric;
