//! Provides the decision stump learner.
use std::fmt;

use crate::{InstanceTable, WeakLearner};
use crate::common::helpers;
use crate::constants::{DEFAULT_SMOOTHING, ENERGY_TOLERANCE};

use super::stump_algorithm;
use super::StumpClassifier;


/// The struct `DecisionStump` generates a [`StumpClassifier`]
/// for each call of [`WeakLearner::produce`].
///
/// Every attribute is swept for its best threshold,
/// and the attribute with the smallest energy `Z` wins.
/// An attribute replaces the current best only if it lowers `Z`
/// by more than `1e-8`, so ties go to the smaller attribute index.
///
/// ```no_run
/// use mhboost::prelude::*;
/// let stump = DecisionStump::new()
///     .smoothing(0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionStump {
    smoothing: f64,
}


impl DecisionStump {
    /// Construct a decision stump learner
    /// with the default smoothing coefficient `0.01`.
    pub fn new() -> Self {
        Self { smoothing: DEFAULT_SMOOTHING }
    }


    /// Set the smoothing coefficient `c`.
    /// `s = c / n` is added to both sides of the `alpha` ratio,
    /// which keeps `alpha` finite for a perfect stump.
    pub fn smoothing(mut self, coef: f64) -> Self {
        assert!(
            coef.is_finite() && coef > 0f64,
            "smoothing coefficient must be positive. got {coef}."
        );
        self.smoothing = coef;
        self
    }
}


impl Default for DecisionStump {
    fn default() -> Self {
        Self::new()
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = StumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Smoothing", format!("{}", self.smoothing)),
        ]);
        Some(info)
    }


    /// Panics if `table` has no attribute.
    fn produce(&self, table: &mut InstanceTable) -> Self::Hypothesis {
        assert!(
            table.n_feature() > 0,
            "cannot train a decision stump without attributes"
        );

        let half_edges = stump_algorithm::initial_half_edges(table);

        let mut feature = 0_usize;
        let mut split = stump_algorithm::best_split(table, 0, &half_edges);
        let mut best_energy = helpers::energy(split.half_edge);
        for j in 1..table.n_feature() {
            let candidate = stump_algorithm::best_split(table, j, &half_edges);
            let energy = helpers::energy(candidate.half_edge);
            if best_energy - energy > ENERGY_TOLERANCE {
                best_energy = energy;
                feature = j;
                split = candidate;
            }
        }

        let alpha = helpers::alpha(
            split.half_edge, self.smoothing, table.n_instance()
        );

        StumpClassifier {
            feature,
            threshold: split.threshold,
            votes: split.votes,
            alpha,
            energy: best_energy,
        }
    }
}


impl fmt::Display for DecisionStump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Stump Weak Learner\n\n\
            - Smoothing: {}\n\
            ----------\
            ",
            self.smoothing,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sample, Classifier, BaseHypothesis};

    #[test]
    fn picks_the_informative_attribute() {
        // Attribute 0 is noise, attribute 1 separates the classes.
        let rows = vec![
            vec![0.3, 0.0],
            vec![0.1, 1.0],
            vec![0.2, 2.0],
            vec![0.3, 3.0],
            vec![0.1, 4.0],
            vec![0.2, 5.0],
        ];
        let labels = ["A", "A", "A", "B", "B", "B"];
        let sample = Sample::from_rows(&rows, &labels).unwrap();
        let mut table = InstanceTable::new(&sample).unwrap();

        let h = DecisionStump::new().produce(&mut table);
        assert_eq!(h.feature(), 1);
        assert_eq!(h.threshold(), 2.5);
        assert_eq!(h.votes(), [-1.0, 1.0]);
        assert!(h.energy() < 1e-6);
        assert!(h.alpha() > 0.0 && h.alpha().is_finite());

        for (i, label) in labels.iter().enumerate() {
            let k = if *label == "A" { 0 } else { 1 };
            assert_eq!(h.confidence(&rows[i], k), 1.0);
        }
    }

    #[test]
    fn alpha_uses_smoothing() {
        let rows = vec![vec![0.0], vec![1.0]];
        let sample = Sample::from_rows(&rows, &["A", "B"]).unwrap();
        let mut table = InstanceTable::new(&sample).unwrap();

        let h = DecisionStump::new().smoothing(0.01).produce(&mut table);
        // 0.5 * ln((1 + 0.005) / 0.005)
        let expected = 0.5 * (1.005_f64 / 0.005).ln();
        assert!((h.alpha() - expected).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn zero_smoothing_is_rejected() {
        let _ = DecisionStump::new().smoothing(0.0);
    }
}
