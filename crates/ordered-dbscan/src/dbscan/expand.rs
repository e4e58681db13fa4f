//! Growing one cluster from a dense seed.

use std::collections::VecDeque;

use distances::Number;

use crate::{Dataset, DbscanError, Metric};

use super::{
    neighborhood::{OrderedScan, Weighting},
    state::{SweepState, NOISE},
};

/// Grows cluster `cluster` to every record density-reachable from `seed`.
///
/// `seeds` is the already computed neighborhood of `seed`, whose density
/// reached `min_density`. Records are taken from a FIFO queue. Every popped
/// record joins the cluster, but only the dense ones pull their own neighbors
/// in. A neighbor that was marked as noise joins as a border point and is not
/// queued. A record that an earlier cluster already claimed as a border point
/// keeps its label.
///
/// Returns the number of records in the cluster.
///
/// # Errors
///
/// * `DbscanError::DistanceFault` if the metric fails.
/// * `DbscanError::Internal` if a labelled record would be moved to another
///   cluster.
pub fn expand_cluster<I, U: Number, D: Dataset<I>, M: Metric<I, U>, W: Weighting>(
    scan: &OrderedScan<'_, I, U, D, M, W>,
    state: &mut SweepState,
    seed: usize,
    seeds: Vec<usize>,
    cluster: usize,
    min_density: f64,
) -> Result<usize, DbscanError> {
    state.assign(seed, cluster)?;
    let mut size = 1;

    let mut queue = VecDeque::from(seeds);
    while let Some(x) = queue.pop_front() {
        match state.label(x) {
            NOISE => size += 1,
            k if k == cluster => (),
            _ => continue,
        }
        state.mark_visited(x);
        state.assign(x, cluster)?;

        let neighborhood = scan.scan(x)?;
        if neighborhood.density < min_density {
            continue;
        }

        for y in neighborhood.neighbors {
            if state.is_noise(y) && state.label(y) == NOISE {
                state.assign(y, cluster)?;
                state.mark_visited(y);
                size += 1;
            } else if !state.is_visited(y) {
                state.assign(y, cluster)?;
                state.mark_visited(y);
                queue.push_back(y);
                size += 1;
            }
        }
    }

    Ok(size)
}
