//! Data generation utilities for testing.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sorted points scattered uniformly within `spread` of each center.
pub fn runs(centers: &[f64], per_run: usize, spread: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut line = centers
        .iter()
        .flat_map(|&c| (0..per_run).map(move |_| c).collect::<Vec<_>>())
        .map(|c| c + rng.gen_range(-spread..spread))
        .collect::<Vec<_>>();
    line.sort_by(f64::total_cmp);
    line
}

/// Sorted points drawn uniformly from `[0, max)`.
pub fn uniform_line(car: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut line = (0..car).map(|_| rng.gen_range(0.0..max)).collect::<Vec<_>>();
    line.sort_by(f64::total_cmp);
    line
}

/// Weights drawn uniformly from `[0, max)`.
pub fn weights(car: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car).map(|_| rng.gen_range(0.0..max)).collect()
}
