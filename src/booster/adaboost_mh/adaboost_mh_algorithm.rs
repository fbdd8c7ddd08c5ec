//! Provides [`AdaBoostMH`] by Schapire & Singer, 1999.
use rayon::prelude::*;

use crate::{
    Booster,
    WeakLearner,
    BaseHypothesis,
    CombinedHypothesis,
    InstanceTable,
    Sample,
    DecisionStump,
    ProductLearner,

    research::{dump, CurrentHypothesis},
};
use crate::common::checkers;
use crate::constants::{
    DEFAULT_ITERATIONS,
    DEFAULT_PRODUCT_SIZE,
    DEFAULT_SMOOTHING,
};
use crate::error::Result;

use super::Params;

use std::fmt;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};


/// Defines `AdaBoostMH`,
/// the multi-class boosting algorithm that reduces
/// a `K`-class problem to `K` binary problems sharing one weight matrix.
///
/// In round `t`, the weak learner returns a base hypothesis `h_t`
/// with coefficient `alpha_t`, and the weights are updated as
/// ```txt
/// w[i][k] <- w[i][k] * exp(-alpha_t * h_{t,k}(x_i) * y[i][k]) / Z,
/// ```
/// where `Z` normalizes the weights to sum to one.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoostMH`].
/// See also:
/// - [`ProductLearner`]
/// - [`DecisionStump`]
/// - [`CombinedHypothesis<H>`]
/// - [`Sample`]
///
/// ```no_run
/// use mhboost::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::default()
///     .file("/path/to/iris.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Initialize `AdaBoostMH` with 50 rounds of products of 3 stumps.
/// let mut booster = AdaBoostMH::init(&sample)
///     .iterations(50)
///     .product_size(3);
///
/// // Set the weak learner.
/// let weak_learner = booster.default_weak_learner();
///
/// // Run `AdaBoostMH` and obtain the resulting hypothesis `f`.
/// let f = booster.run(&weak_learner).unwrap();
///
/// // Get the predictions on the training set.
/// let predictions: Vec<usize> = f.predict_all(&sample).unwrap();
/// ```
pub struct AdaBoostMH<'a, H> {
    // Training sample
    sample: &'a Sample,

    // Instances with labels and weights.
    // Built by `preprocess`.
    table: Option<InstanceTable>,

    // Number of rounds `T`.
    iterations: usize,

    // Number of factors of the default weak learner.
    product_size: usize,

    // Smoothing coefficient of the default weak learner.
    smoothing: f64,

    // Directory of the label/weight dumps.
    debug_dir: Option<PathBuf>,

    // Hypotheses obtained by the weak-learner.
    hypotheses: Vec<H>,
}


impl<'a, H> AdaBoostMH<'a, H> {
    /// Initialize the `AdaBoostMH`.
    /// This method sets some parameters `AdaBoostMH` holds.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            table: None,

            iterations: DEFAULT_ITERATIONS,
            product_size: DEFAULT_PRODUCT_SIZE,
            smoothing: DEFAULT_SMOOTHING,
            debug_dir: None,

            hypotheses: Vec::new(),
        }
    }


    /// Set the number of boosting rounds `T`.
    /// Default is `100`.
    pub fn iterations(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "`iterations` must be positive.");
        self.iterations = iterations;
        self
    }


    /// Set the number of stumps per base learner `M`
    /// used by [`AdaBoostMH::default_weak_learner`].
    /// Default is `3`.
    pub fn product_size(mut self, size: usize) -> Self {
        assert!(size > 0, "`product_size` must be positive.");
        self.product_size = size;
        self
    }


    /// Set every parameter from `params`.
    pub fn with_params(mut self, params: &Params) -> Result<Self> {
        params.validate()?;
        self.iterations = params.iterations;
        self.product_size = params.product_size;
        self.smoothing = params.smoothing;
        Ok(self)
    }


    /// Write the label matrix after initialization to `dir/labels.txt`
    /// and the weight matrix before every round to `dir/weights.txt`.
    /// Both files are appended to.
    pub fn debug_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.debug_dir = Some(dir.as_ref().to_path_buf());
        self
    }


    /// Returns the weak learner configured by this booster:
    /// products of at most `M` decision stumps.
    pub fn default_weak_learner(&self) -> ProductLearner<DecisionStump> {
        let stump = DecisionStump::new()
            .smoothing(self.smoothing);
        ProductLearner::new(stump)
            .size(self.product_size)
    }


    /// Returns the instance table.
    /// This is `None` before [`Booster::preprocess`] is called.
    pub fn table(&self) -> Option<&InstanceTable> {
        self.table.as_ref()
    }


    /// Returns the number of hypotheses trained so far.
    pub fn n_hypotheses(&self) -> usize {
        self.hypotheses.len()
    }
}


impl<H: BaseHypothesis + Sync> AdaBoostMH<'_, H> {
    /// Multiplies each weight by `exp(-alpha * h_k(x_i) * y[i][k])`
    /// and normalizes. Returns the normalizer `Z`.
    /// If `Z` is zero or not finite, the weights are left unchanged.
    #[inline]
    fn update_params(table: &mut InstanceTable, h: &H) -> f64 {
        let alpha = h.alpha();
        let view: &InstanceTable = table;

        let factors = (0..view.n_instance()).into_par_iter()
            .map(|i| {
                let x = view.attributes(i);
                view.labels(i).iter()
                    .enumerate()
                    .map(|(k, &y)| {
                        let hy = h.confidence(x, k) * y as f64;
                        (-alpha * hy).exp()
                    })
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>();

        // Summed in a fixed order so that the result is reproducible.
        let z = view.weight_matrix().iter()
            .zip(&factors)
            .map(|(w, f)| {
                w.iter().zip(f).map(|(wk, fk)| wk * fk).sum::<f64>()
            })
            .sum::<f64>();

        if z <= 0f64 || !z.is_finite() {
            tracing::warn!(z, "weight normalizer is degenerate, weights kept");
            return z;
        }

        table.weight_matrix_mut()
            .par_iter_mut()
            .zip(factors)
            .for_each(|(w, f)| {
                w.iter_mut()
                    .zip(f)
                    .for_each(|(wk, fk)| { *wk = *wk * fk / z; });
            });
        z
    }
}


impl<H> Booster<H> for AdaBoostMH<'_, H>
    where H: BaseHypothesis + Sync + fmt::Display,
{
    type Output = CombinedHypothesis<H>;


    fn name(&self) -> &str {
        "AdaBoost.MH"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of classes", format!("{}", self.sample.n_class())),
            ("Iterations", format!("{}", self.iterations)),
            ("Product size", format!("{}", self.product_size)),
            ("Smoothing", format!("{}", self.smoothing)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checkers::iterations(self.iterations)?;
        checkers::product_size(self.product_size)?;
        checkers::smoothing(self.smoothing)?;

        let table = InstanceTable::new(self.sample)?;

        if let Some(dir) = &self.debug_dir {
            if let Err(e) = dump::labels(dir, &table) {
                tracing::warn!(error = %e, "failed to write the label dump");
            }
        }

        self.table = Some(table);
        self.hypotheses = Vec::new();
        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>,
    {
        // `iteration` only labels logs and dumps.
        let n_hypotheses = self.hypotheses.len();
        if n_hypotheses >= self.iterations {
            return ControlFlow::Break(n_hypotheses);
        }

        let Some(table) = self.table.as_mut() else {
            return ControlFlow::Break(n_hypotheses);
        };
        if table.n_instance() == 0 || table.n_feature() == 0 {
            return ControlFlow::Break(n_hypotheses);
        }

        tracing::debug!(iteration, "boosting round");
        if let Some(dir) = &self.debug_dir {
            if let Err(e) = dump::weights(dir, iteration, table) {
                tracing::warn!(error = %e, "failed to write the weight dump");
            }
        }

        // Get a new hypothesis
        let h = weak_learner.produce(table);

        let z = Self::update_params(table, &h);
        tracing::debug!(iteration, z, "weights updated");
        tracing::info!(
            iteration,
            alpha = h.alpha(),
            energy = h.energy(),
            "new hypothesis: {h}"
        );

        self.hypotheses.push(h);

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        self.current_hypothesis()
    }
}


impl<H> CurrentHypothesis for AdaBoostMH<'_, H>
    where H: Clone,
{
    type Output = CombinedHypothesis<H>;
    fn current_hypothesis(&self) -> Self::Output {
        let n_feature = self.sample.shape().1;
        let mut f = CombinedHypothesis::new(self.sample.classes(), n_feature);
        self.hypotheses.iter()
            .cloned()
            .for_each(|h| f.push(h));
        f
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::StumpClassifier;

    fn toy_sample() -> Sample {
        let rows = vec![
            vec![0.0, 5.0],
            vec![1.0, 4.0],
            vec![2.0, 3.0],
            vec![3.0, 2.0],
            vec![4.0, 1.0],
            vec![5.0, 0.0],
        ];
        Sample::from_rows(&rows, &["a", "a", "b", "b", "c", "c"]).unwrap()
    }

    #[test]
    fn weights_stay_normalized() {
        let sample = toy_sample();
        let mut booster = AdaBoostMH::init(&sample)
            .iterations(5)
            .product_size(2);
        let wl = booster.default_weak_learner();
        booster.preprocess().unwrap();
        for it in 1..=5 {
            assert!(booster.boost(&wl, it).is_continue());
            let sum = booster.table().unwrap().weight_sum();
            assert!((sum - 1.0).abs() < 1e-6, "sum = {sum}");
        }
        assert_eq!(booster.boost(&wl, 6), ControlFlow::Break(5));
        assert_eq!(booster.postprocess().len(), 5);
    }

    #[test]
    fn repeated_steps_stop_after_the_round_budget() {
        let sample = toy_sample();
        let mut booster = AdaBoostMH::init(&sample)
            .iterations(3)
            .product_size(1);
        let wl = booster.default_weak_learner();
        booster.preprocess().unwrap();

        let flows = (0..10)
            .map(|_| booster.boost(&wl, 1))
            .collect::<Vec<_>>();
        assert!(flows[..3].iter().all(|flow| flow.is_continue()));
        assert!(flows[3..].iter().all(|flow| *flow == ControlFlow::Break(3)));
        assert_eq!(booster.n_hypotheses(), 3);
        assert_eq!(booster.postprocess().len(), 3);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let sample = toy_sample();
        let params = Params { iterations: 0, ..Params::default() };
        assert!(AdaBoostMH::<StumpClassifier>::init(&sample)
            .with_params(&params)
            .is_err());

        for smoothing in [-1.0, 0.0] {
            let params = Params { smoothing, ..Params::default() };
            assert!(AdaBoostMH::<StumpClassifier>::init(&sample)
                .with_params(&params)
                .is_err());
        }
    }

    #[test]
    fn no_attributes_means_no_rounds() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        let sample = Sample::from_rows(&rows, &["a", "b"]).unwrap();
        let mut booster = AdaBoostMH::init(&sample).iterations(3);
        let wl = booster.default_weak_learner();
        let f = booster.run(&wl).unwrap();
        assert!(f.is_empty());
    }

    #[test]
    fn debug_dumps_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let sample = toy_sample();
        let mut booster = AdaBoostMH::init(&sample)
            .iterations(2)
            .product_size(1)
            .debug_dir(dir.path());
        let wl = booster.default_weak_learner();
        let _ = booster.run(&wl).unwrap();

        let labels = std::fs::read_to_string(dir.path().join("labels.txt"))
            .unwrap();
        assert_eq!(labels.lines().filter(|l| l.starts_with("1 ") || l.starts_with("-1 ")).count(), 6);

        let weights = std::fs::read_to_string(dir.path().join("weights.txt"))
            .unwrap();
        assert!(weights.contains("Iteration 1"));
        assert!(weights.contains("Iteration 2"));
    }
}
