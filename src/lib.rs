#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost.MH,
//! the multi-class boosting algorithm of Schapire & Singer,
//! with products of decision stumps as base learners.
//!
//! A `K`-class problem is turned into `K` binary problems:
//! every instance `x_i` carries a label `y[i][k] ∈ {-1, +1}` and
//! a weight `w[i][k]` for each class `k`.
//! In each round the weak learner returns a hypothesis
//! `h(x) = (h_0(x), ..., h_{K-1}(x))` and its coefficient `alpha`,
//! and the booster reweights the (instance, class) pairs
//! that `h` gets wrong.
//! For a query `x`, the resulting [`CombinedHypothesis`] returns
//! the softmax of `Σ_t alpha_t * h_t(x)`.
//!
//! # Example
//! ```no_run
//! use mhboost::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/iris.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! let params = Params { iterations: 10, product_size: 3, ..Params::default() };
//! let f = mhboost::train(&sample, &params).unwrap();
//!
//! let dist = f.distribution(&[5.1, 3.5, 1.4, 0.2]).unwrap();
//! println!("{dist:?}");
//! ```

/// Numeric constants.
pub mod constants;

/// Error type of this crate.
pub mod error;

/// Sample, the training data, and its training view.
pub mod sample;

/// Some helper functions.
pub mod common;

/// Defines `Classifier` traits and the ensemble.
pub mod hypothesis;

/// Defines weak learners.
pub mod weak_learner;

/// Defines the booster.
pub mod booster;

/// Logging and loss functions for experiments.
pub mod research;

/// Exports the structs and traits needed to train a model.
pub mod prelude;


pub use error::{MhError, Result};

pub use sample::{
    Sample,
    SampleReader,
    Feature,
    NominalTarget,
    InstanceTable,
    VirtualLabels,
};

pub use hypothesis::{
    Classifier,
    BaseHypothesis,
    CombinedHypothesis,
};

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    StumpClassifier,
    ProductLearner,
    ProductClassifier,
};

pub use booster::{
    Booster,
    AdaBoostMH,
    Params,
};


/// Train AdaBoost.MH on `sample` with products of decision stumps.
/// This is [`Booster::run`] with the weak learner
/// [`AdaBoostMH::default_weak_learner`].
pub fn train(sample: &Sample, params: &Params)
    -> Result<CombinedHypothesis<ProductClassifier<StumpClassifier>>>
{
    let mut booster = AdaBoostMH::init(sample)
        .with_params(params)?;
    let weak_learner = booster.default_weak_learner();
    booster.run(&weak_learner)
}
