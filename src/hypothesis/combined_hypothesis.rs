use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::{Sample, Classifier, BaseHypothesis};
use crate::common::helpers;
use crate::error::{Result, MhError};


/// The ensemble that [`AdaBoostMH`](crate::AdaBoostMH) returns.
/// For an instance `x` the score of class `k` is
/// ```txt
/// out[k] = Σ_t alpha_t * h_{t,k}(x),
/// ```
/// and [`CombinedHypothesis::distribution`] turns the scores
/// into probabilities with a softmax.
///
/// You can read/write this struct by `serde` trait,
/// or with [`CombinedHypothesis::save`] / [`CombinedHypothesis::load`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombinedHypothesis<H> {
    /// Base hypotheses in the order they were trained.
    pub hypotheses: Vec<H>,
    classes: Vec<String>,
    n_feature: usize,
}


impl<H> CombinedHypothesis<H> {
    /// Construct an empty ensemble over the given classes
    /// for instances with `n_feature` attributes.
    pub fn new<S: ToString>(classes: &[S], n_feature: usize) -> Self {
        let classes = classes.iter()
            .map(|c| c.to_string())
            .collect();
        Self { hypotheses: Vec::new(), classes, n_feature, }
    }


    /// Append a base hypothesis.
    #[inline]
    pub fn push(&mut self, hypothesis: H) {
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of base hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns the declared class names.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the number of attributes an instance must have.
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }
}


impl<H: BaseHypothesis> CombinedHypothesis<H> {
    /// Decompose the ensemble
    /// into the two vectors `Vec<f64>` of coefficients and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        let alphas = self.hypotheses.iter()
            .map(|h| h.alpha())
            .collect();
        (alphas, self.hypotheses)
    }


    /// Returns the probability of each class for `x`.
    /// The result has length `K`, is non-negative, and sums to `1`.
    pub fn distribution(&self, x: &[f64]) -> Result<Vec<f64>> {
        if self.hypotheses.is_empty() {
            return Err(MhError::NoModel);
        }
        if x.len() != self.n_feature {
            return Err(MhError::DimensionMismatch {
                expected: self.n_feature,
                got: x.len(),
            });
        }

        let scores = self.confidence_all(x);
        Ok(helpers::exp_normalize(&scores[..]))
    }


    /// Returns the index of the most probable class for `x`.
    /// Ties go to the class declared first.
    pub fn predict(&self, x: &[f64]) -> Result<usize> {
        let dist = self.distribution(x)?;
        Ok(helpers::argmax(&dist[..]))
    }


    /// Returns the name of the most probable class for `x`.
    pub fn predict_label(&self, x: &[f64]) -> Result<&str> {
        let k = self.predict(x)?;
        Ok(self.classes[k].as_str())
    }


    /// Predicts the class index of every row of `sample`.
    pub fn predict_all(&self, sample: &Sample) -> Result<Vec<usize>> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| {
                let (x, _) = sample.at(row);
                self.predict(&x[..])
            })
            .collect()
    }
}


impl<H: Serialize> CombinedHypothesis<H> {
    /// Write the ensemble to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}


impl<H: DeserializeOwned> CombinedHypothesis<H> {
    /// Read an ensemble written by [`CombinedHypothesis::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let model = serde_json::from_reader(BufReader::new(file))?;
        Ok(model)
    }
}


impl<H> Classifier for CombinedHypothesis<H>
    where H: BaseHypothesis,
{
    fn confidence(&self, x: &[f64], k: usize) -> f64 {
        self.hypotheses.iter()
            .map(|h| h.alpha() * h.confidence(x, k))
            .sum::<f64>()
    }


    fn n_class(&self) -> usize {
        self.classes.len()
    }
}
