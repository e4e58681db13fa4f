//! Errors raised by the clustering operators.

/// A violated precondition on the inputs of a clustering call.
///
/// Preconditions are checked once, before the sweep starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Precondition {
    /// A record has a missing value on an attribute the distance reads.
    #[error("record {record} has a missing value for attribute `{attribute}`")]
    MissingValues {
        /// Index of the offending record.
        record: usize,
        /// Name of the attribute with the missing value.
        attribute: String,
    },

    /// The neighborhood radius is not a finite positive number.
    #[error("epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    /// The density threshold is zero.
    #[error("min_points must be at least 1, got {0}")]
    InvalidMinPoints(usize),

    /// A weight is negative, infinite or NaN.
    #[error("weight of record {index} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Index of the offending record.
        index: usize,
        /// The weight that was supplied.
        value: f64,
    },

    /// The weight vector does not have one entry per record.
    #[error("expected {expected} weights, got {actual}")]
    WeightCount {
        /// Number of records.
        expected: usize,
        /// Number of weights supplied.
        actual: usize,
    },

    /// A named attribute does not exist in the table.
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    /// The caller asked for at least one cluster but there are fewer than
    /// `min_points` records.
    #[error("{cardinality} records cannot form a cluster with min_points = {min_points}")]
    TooFewRecords {
        /// Number of records.
        cardinality: usize,
        /// The density threshold.
        min_points: usize,
    },
}

/// Errors that abort a clustering call. No partial labeling survives any of
/// them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DbscanError {
    /// The inputs were rejected before the sweep started.
    #[error("precondition violated: {0}")]
    Precondition(#[from] Precondition),

    /// Cancellation was observed before the driver examined `next_index`.
    #[error("clustering cancelled before record {next_index}")]
    Cancelled {
        /// The index the driver would have examined next.
        next_index: usize,
    },

    /// The distance function failed on a pair of records.
    #[error("distance between records {a} and {b} failed: {reason}")]
    DistanceFault {
        /// Index of the first record.
        a: usize,
        /// Index of the second record.
        b: usize,
        /// The message reported by the distance function.
        reason: String,
    },

    /// An internal invariant was broken. This is a bug.
    #[error("internal error: {0}")]
    Internal(String),
}
