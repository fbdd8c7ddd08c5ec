//! Defines the decision stump classifier.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, BaseHypothesis};
use crate::common::infinity;


/// A decision stump with one vote per class:
/// ```txt
/// h_k(x) = votes[k] * phi(x),   phi(x) = +1 if x[feature] > threshold,
///                                         -1 otherwise.
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StumpClassifier {
    pub(crate) feature: usize,
    #[serde(with = "infinity")]
    pub(crate) threshold: f64,
    pub(crate) votes: Vec<f64>,
    #[serde(with = "infinity")]
    pub(crate) alpha: f64,
    pub(crate) energy: f64,
}


impl StumpClassifier {
    /// Index of the selected attribute.
    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// The split threshold. May be `±∞`.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The vote vector `V`.
    #[inline]
    pub fn votes(&self) -> &[f64] {
        &self.votes[..]
    }


    /// Returns `+1` if `x[feature] > threshold`, `-1` otherwise.
    #[inline]
    pub fn phi(&self, x: &[f64]) -> f64 {
        if x[self.feature] > self.threshold { 1f64 } else { -1f64 }
    }
}


impl Classifier for StumpClassifier {
    #[inline]
    fn confidence(&self, x: &[f64], k: usize) -> f64 {
        self.votes[k] * self.phi(x)
    }


    fn n_class(&self) -> usize {
        self.votes.len()
    }
}


impl BaseHypothesis for StumpClassifier {
    #[inline]
    fn alpha(&self) -> f64 {
        self.alpha
    }


    #[inline]
    fn energy(&self) -> f64 {
        self.energy
    }
}


impl fmt::Display for StumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let votes = self.votes.iter()
            .map(|v| if *v > 0f64 { "+" } else { "-" })
            .collect::<String>();
        write!(
            f,
            "[attr: {}, threshold: {}, votes: {votes}, alpha: {:.6}, energy: {:.6}]",
            self.feature,
            self.threshold,
            self.alpha,
            self.energy,
        )
    }
}
