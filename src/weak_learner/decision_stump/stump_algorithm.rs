//! The threshold sweep over one sorted attribute.
use crate::InstanceTable;
use crate::constants::VALUE_TOLERANCE;


/// The best split of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Split {
    /// Instances with a value `> threshold` get `phi = +1`.
    pub(super) threshold: f64,
    /// One vote in `{-1, +1}` per class.
    pub(super) votes: Vec<f64>,
    /// `gamma / 2` of the stump.
    pub(super) half_edge: f64,
}


/// Returns `half_edge0[k] = 0.5 * Σ_i w[i][k] * y[i][k]`,
/// the per-class half edge of the stump that puts every instance
/// on the positive side.
pub(super) fn initial_half_edges(table: &InstanceTable) -> Vec<f64> {
    let mut half_edges = vec![0f64; table.n_class()];
    for i in 0..table.n_instance() {
        let y = table.labels(i);
        let w = table.weights(i);
        half_edges.iter_mut()
            .zip(y.iter().zip(w))
            .for_each(|(h, (&yk, &wk))| { *h += 0.5 * wk * yk as f64; });
    }
    half_edges
}


/// Sweeps the sorted view of attribute `j` from left to right.
/// At position `p` the first `p` instances are on the negative side.
///
/// A position is a candidate only if the value changes there
/// by more than `VALUE_TOLERANCE`,
/// and it replaces the current best only if it improves
/// `Σ_k |half_edge[k]|` by more than `VALUE_TOLERANCE`.
/// Position `0` is the threshold `-∞`, position `n` is `+∞`.
pub(super) fn best_split(
    table: &InstanceTable,
    j: usize,
    half_edges: &[f64],
) -> Split
{
    let column = table.sorted_column(j);
    let indices = column.indices();
    let values = column.values();
    let n_instance = indices.len();

    let mut current = half_edges.to_vec();
    let mut best_half_edge = abs_sum(&current[..]);
    let mut best_position = 0_usize;
    let mut best_signs = current.clone();

    for p in 1..=n_instance {
        let i = indices[p - 1];
        let y = table.labels(i);
        let w = table.weights(i);
        current.iter_mut()
            .zip(y.iter().zip(w))
            .for_each(|(c, (&yk, &wk))| { *c -= wk * yk as f64; });

        let previous_value = values[p - 1];
        let current_value = if p == n_instance {
            f64::INFINITY
        } else {
            values[p]
        };

        if (current_value - previous_value).abs() <= VALUE_TOLERANCE {
            continue;
        }

        let half_edge = abs_sum(&current[..]);
        if half_edge > best_half_edge + VALUE_TOLERANCE {
            best_half_edge = half_edge;
            best_position = p;
            best_signs.copy_from_slice(&current[..]);
        }
    }

    let threshold = if best_position == 0 {
        f64::NEG_INFINITY
    } else if best_position == n_instance {
        f64::INFINITY
    } else {
        (values[best_position - 1] + values[best_position]) / 2f64
    };

    let votes = best_signs.into_iter()
        .map(|s| if s > 0f64 { 1f64 } else { -1f64 })
        .collect();

    Split { threshold, votes, half_edge: best_half_edge, }
}


#[inline(always)]
fn abs_sum(slice: &[f64]) -> f64 {
    slice.iter()
        .map(|v| v.abs())
        .sum::<f64>()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    fn table(xs: &[f64], labels: &[&str]) -> InstanceTable {
        let rows = xs.iter()
            .map(|&x| vec![x])
            .collect::<Vec<_>>();
        let sample = Sample::from_rows(&rows, labels).unwrap();
        InstanceTable::new(&sample).unwrap()
    }

    #[test]
    fn separable_split() {
        let t = table(
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            &["A", "A", "A", "B", "B", "B"],
        );
        let half_edges = initial_half_edges(&t);
        assert!(half_edges.iter().all(|h| h.abs() < 1e-12));

        let split = best_split(&t, 0, &half_edges);
        assert_eq!(split.threshold, 2.5);
        assert_eq!(split.votes, vec![-1.0, 1.0]);
        assert!((split.half_edge - 0.5).abs() < 1e-12);
    }

    #[test]
    fn no_threshold_inside_ties() {
        // A perfect split would cut between the two `1.0`s.
        let t = table(&[0.0, 1.0, 1.0, 2.0], &["A", "A", "B", "B"]);
        let half_edges = initial_half_edges(&t);
        let split = best_split(&t, 0, &half_edges);
        assert!(split.threshold == 0.5 || split.threshold == 1.5);
        assert!(split.half_edge < 0.5);
    }

    #[test]
    fn constant_attribute_gives_infinite_threshold() {
        let t = table(&[7.0; 5], &["A", "B", "C", "A", "A"]);
        let half_edges = initial_half_edges(&t);
        let split = best_split(&t, 0, &half_edges);
        assert_eq!(split.threshold, f64::NEG_INFINITY);

        let expected = half_edges.iter().map(|h| h.abs()).sum::<f64>();
        assert!((split.half_edge - expected).abs() < 1e-12);
        for (v, h) in split.votes.iter().zip(&half_edges) {
            assert_eq!(*v, if *h > 0.0 { 1.0 } else { -1.0 });
        }
    }

    #[test]
    fn zero_labels_do_not_count() {
        let mut t = table(&[0.0, 1.0, 2.0, 3.0], &["A", "A", "B", "B"]);
        let mut scope = t.virtual_labels();
        for i in 0..4 {
            scope.labels_mut(i).iter_mut().for_each(|y| { *y = 0; });
        }
        let half_edges = initial_half_edges(&scope);
        let split = best_split(&scope, 0, &half_edges);
        assert_eq!(split.half_edge, 0.0);
        assert_eq!(split.threshold, f64::NEG_INFINITY);
        assert_eq!(split.votes, vec![-1.0, -1.0]);
    }
}
