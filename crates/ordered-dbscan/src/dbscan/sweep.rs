//! The driver that sweeps every record once.

use distances::Number;

use crate::{CancelToken, Dataset, DbscanError, Metric};

use super::{
    expand::expand_cluster,
    neighborhood::{OrderedScan, Weighting},
    state::SweepState,
};

/// Runs one full clustering sweep and returns the final state.
///
/// Records are examined in index order. An unvisited record whose
/// neighborhood is not dense enough is marked as noise, and an unvisited
/// dense record seeds a new cluster that is expanded before the sweep moves
/// on. The cancellation token is checked before each record.
///
/// # Errors
///
/// * `DbscanError::Cancelled` if the token was cancelled.
/// * Any error from neighborhood search or cluster expansion.
pub fn sweep<I, U: Number, D: Dataset<I>, M: Metric<I, U>, W: Weighting>(
    scan: &OrderedScan<'_, I, U, D, M, W>,
    min_points: usize,
    cancel: &CancelToken,
) -> Result<SweepState, DbscanError> {
    let min_density = min_points.as_f64();
    let mut state = SweepState::new(scan.cardinality());

    for i in 0..scan.cardinality() {
        if cancel.is_cancelled() {
            ftlog::info!("Clustering cancelled before record {i}.");
            return Err(DbscanError::Cancelled { next_index: i });
        }
        if state.is_visited(i) {
            continue;
        }
        state.mark_visited(i);

        let neighborhood = scan.scan(i)?;
        if neighborhood.density < min_density {
            state.mark_noise(i);
            continue;
        }

        let k = state.new_cluster();
        let size = expand_cluster(scan, &mut state, i, neighborhood.neighbors, k, min_density)?;
        ftlog::debug!("Formed cluster {k} with {size} records from seed {i}.");
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{metric::AbsoluteDifference, CancelToken, DbscanError};

    use super::{
        super::neighborhood::{OrderedScan, Uniform, Weights},
        sweep,
    };

    fn check_state(
        data: &[f64],
        epsilon: f64,
        min_points: usize,
        labels: &[usize],
        k: usize,
    ) -> Result<(), DbscanError> {
        let scan = OrderedScan::new(&data, &AbsoluteDifference, epsilon, Uniform);
        let state = sweep(&scan, min_points, &CancelToken::new())?;

        assert!(state.all_visited());
        for (i, &label) in labels.iter().enumerate() {
            assert_eq!(state.label(i), label, "record {i}");
            if label == 0 {
                assert!(state.is_noise(i), "record {i} should be marked as noise");
            }
        }
        assert_eq!(state.into_parts(), (labels.to_vec(), k));
        Ok(())
    }

    #[test_case(&[1., 2., 3., 10., 11., 12.], 1.5, 2, &[1, 1, 1, 2, 2, 2], 3; "two_runs")]
    #[test_case(&[1., 2., 3., 10., 11., 12.], 1.5, 4, &[0, 0, 0, 0, 0, 0], 1; "all_sparse")]
    #[test_case(&[0., 1., 2., 8., 20., 21., 22.], 1.5, 2, &[1, 1, 1, 0, 2, 2, 2], 3; "isolated_middle")]
    #[test_case(&[], 1.0, 2, &[], 1; "empty")]
    #[test_case(&[0., 0., 0., 0.], 0.5, 2, &[1, 1, 1, 1], 2; "duplicates")]
    #[test_case(&[0., 5., 10.], 1.0, 1, &[1, 2, 3], 4; "singletons")]
    fn seed_scenarios(data: &[f64], epsilon: f64, min_points: usize, labels: &[usize], k: usize) -> Result<(), DbscanError> {
        check_state(data, epsilon, min_points, labels, k)
    }

    #[test]
    fn weighted_seed_scenario() -> Result<(), DbscanError> {
        let data = [1., 2., 3., 10., 11., 12.];
        let weights = [3., 3., 3., 1., 1., 1.];
        let scan = OrderedScan::new(&data, &AbsoluteDifference, 1.5, Weights(&weights));
        let state = sweep(&scan, 5, &CancelToken::new())?;

        assert!(state.all_visited());
        for i in 3..6 {
            assert!(state.is_noise(i));
        }
        assert_eq!(state.into_parts(), (vec![1, 1, 1, 0, 0, 0], 2));
        Ok(())
    }

    #[test]
    fn cancelled_before_start() {
        let data = [1., 2., 3.];
        let scan = OrderedScan::new(&data, &AbsoluteDifference, 1.5, Uniform);
        let cancel = CancelToken::new();
        cancel.cancel();

        assert_eq!(
            sweep(&scan, 2, &cancel).map(|s| s.into_parts()),
            Err(DbscanError::Cancelled { next_index: 0 })
        );
    }
}
