/// A trait that defines the behavior of a multi-class classifier
/// in the AdaBoost.MH sense.
/// You only need to implement `confidence` and `n_class`.
pub trait Classifier {
    /// Computes `h_k(x)`, the vote of class `k` on the instance `x`.
    /// Base classifiers return `-1.0` or `+1.0`.
    fn confidence(&self, x: &[f64], k: usize) -> f64;


    /// Returns the number of classes `K`.
    fn n_class(&self) -> usize;


    /// Computes `[h_0(x), ..., h_{K-1}(x)]`.
    fn confidence_all(&self, x: &[f64]) -> Vec<f64> {
        (0..self.n_class()).map(|k| self.confidence(x, k))
            .collect::<Vec<_>>()
    }
}


/// A classifier produced by a weak learner in one boosting round.
/// It carries its own coefficient `alpha`
/// and the energy `Z` it was selected by.
pub trait BaseHypothesis: Classifier + Clone {
    /// The coefficient of this hypothesis in the ensemble.
    fn alpha(&self) -> f64;

    /// The energy `Z` of this hypothesis.
    /// Smaller is better; `Z` lies in `[0, 1]`.
    fn energy(&self) -> f64;
}
