//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines the decision stump for multi-class labels.
pub mod decision_stump;

/// Defines products of weak learners.
pub mod product;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DecisionStump,
    StumpClassifier,
};

pub use self::product::{
    ProductLearner,
    ProductClassifier,
};
