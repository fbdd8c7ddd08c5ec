//! Defines the product of base classifiers.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, BaseHypothesis};
use crate::common::infinity;


/// The componentwise product of base classifiers:
/// ```txt
/// h_k(x) = Π_b h_{b,k}(x).
/// ```
/// `alpha` and `energy` are those of the last accepted factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductClassifier<H> {
    pub(crate) hypotheses: Vec<H>,
    #[serde(with = "infinity")]
    pub(crate) alpha: f64,
    pub(crate) energy: f64,
}


impl<H> ProductClassifier<H> {
    /// The factors of this product.
    pub fn hypotheses(&self) -> &[H] {
        &self.hypotheses[..]
    }


    /// Number of factors `m'`.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}


impl<H: Classifier> Classifier for ProductClassifier<H> {
    fn confidence(&self, x: &[f64], k: usize) -> f64 {
        self.hypotheses.iter()
            .map(|h| h.confidence(x, k))
            .product::<f64>()
    }


    fn n_class(&self) -> usize {
        self.hypotheses.first()
            .map_or(0, |h| h.n_class())
    }
}


impl<H: Classifier + Clone> BaseHypothesis for ProductClassifier<H> {
    fn alpha(&self) -> f64 {
        self.alpha
    }


    fn energy(&self) -> f64 {
        self.energy
    }
}


impl<H: fmt::Display> fmt::Display for ProductClassifier<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Product of {} (alpha: {:.6}, energy: {:.6})",
            self.hypotheses.len(),
            self.alpha,
            self.energy,
        )?;
        for (b, h) in self.hypotheses.iter().enumerate() {
            writeln!(f, "  {b:>3}: {h}")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StumpClassifier;

    fn stump(feature: usize, threshold: f64, votes: Vec<f64>)
        -> StumpClassifier
    {
        StumpClassifier { feature, threshold, votes, alpha: 1.0, energy: 1.0 }
    }

    #[test]
    fn product_of_signs() {
        let h = ProductClassifier {
            hypotheses: vec![
                stump(0, 0.0, vec![1.0, -1.0, 1.0]),
                stump(1, 0.0, vec![1.0, 1.0, -1.0]),
            ],
            alpha: 0.4,
            energy: 0.7,
        };
        assert_eq!(h.n_class(), 3);
        assert_eq!(h.confidence_all(&[1.0, 1.0]), vec![1.0, -1.0, -1.0]);
        assert_eq!(h.confidence_all(&[1.0, -1.0]), vec![-1.0, 1.0, 1.0]);
        assert_eq!(h.confidence_all(&[-1.0, -1.0]), vec![1.0, -1.0, 1.0]);
        assert!(h.to_string().starts_with("Product of 2"));
    }
}
