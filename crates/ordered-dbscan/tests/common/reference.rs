//! A brute-force reference for checking clusterings of points on a line.

use std::collections::HashMap;

use ordered_dbscan::Clustering;

/// Indices of all points strictly closer than `epsilon` to point `i`.
fn neighbors(data: &[f64], epsilon: f64, i: usize) -> Vec<usize> {
    (0..data.len())
        .filter(|&j| j != i && (data[i] - data[j]).abs() < epsilon)
        .collect()
}

/// Whether each point is a core point, counting itself once.
pub fn core_points(data: &[f64], epsilon: f64, min_points: usize, weights: Option<&[f64]>) -> Vec<bool> {
    let w = |i: usize| weights.map_or(1.0, |w| w[i]);
    (0..data.len())
        .map(|i| {
            let density = w(i) + neighbors(data, epsilon, i).into_iter().map(w).sum::<f64>();
            density >= min_points as f64
        })
        .collect()
}

/// Checks a clustering against the definition of DBSCAN.
///
/// Core points that are connected through core points share a non-zero label,
/// and different core components have different labels. A border point
/// carries the label of one of its core neighbors. Noise has no core
/// neighbor.
pub fn check(data: &[f64], epsilon: f64, min_points: usize, weights: Option<&[f64]>, clustering: &Clustering) {
    let labels = clustering.labels();
    let core = core_points(data, epsilon, min_points, weights);
    assert_eq!(labels.len(), data.len());

    for (i, &l) in labels.iter().enumerate() {
        assert!(l < clustering.k(), "label {l} of point {i} is out of range");
    }

    let mut component = vec![usize::MAX; data.len()];
    let mut n_components = 0;
    for start in (0..data.len()).filter(|&i| core[i]) {
        if component[start] != usize::MAX {
            continue;
        }
        let mut stack = vec![start];
        component[start] = n_components;
        while let Some(i) = stack.pop() {
            for j in neighbors(data, epsilon, i) {
                if core[j] && component[j] == usize::MAX {
                    component[j] = n_components;
                    stack.push(j);
                }
            }
        }
        n_components += 1;
    }

    let mut label_of_component = HashMap::new();
    let mut component_of_label = HashMap::new();
    for i in (0..data.len()).filter(|&i| core[i]) {
        assert_ne!(labels[i], 0, "core point {i} is labelled as noise");
        let l = *label_of_component.entry(component[i]).or_insert(labels[i]);
        assert_eq!(labels[i], l, "core point {i} is split from its component");
        let c = *component_of_label.entry(labels[i]).or_insert(component[i]);
        assert_eq!(component[i], c, "label {l} spans two core components");
    }
    assert_eq!(n_components, clustering.k() - 1, "wrong number of clusters");

    for i in (0..data.len()).filter(|&i| !core[i]) {
        let core_neighbors = neighbors(data, epsilon, i)
            .into_iter()
            .filter(|&j| core[j])
            .collect::<Vec<_>>();
        if labels[i] == 0 {
            assert!(core_neighbors.is_empty(), "noise point {i} has core neighbors {core_neighbors:?}");
        } else {
            assert!(
                core_neighbors.iter().any(|&j| labels[j] == labels[i]),
                "border point {i} has no core neighbor in cluster {}",
                labels[i]
            );
        }
    }
}

/// Whether two labelings describe the same partition, up to renaming of the
/// non-zero labels.
pub fn same_partition(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut forward = HashMap::new();
    let mut backward = HashMap::new();
    a.iter().zip(b).all(|(&x, &y)| {
        (x == 0) == (y == 0) && *forward.entry(x).or_insert(y) == y && *backward.entry(y).or_insert(x) == x
    })
}
