//! The core library for `Hypothesis` traits
//! and the ensemble returned by the boosting algorithms.

pub(crate) mod hypothesis_traits;
pub(crate) mod combined_hypothesis;


pub use hypothesis_traits::{
    Classifier,
    BaseHypothesis,
};

pub use combined_hypothesis::CombinedHypothesis;
