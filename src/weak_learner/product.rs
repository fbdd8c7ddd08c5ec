//! Products of weak learners.

mod product_learner;
mod product_classifier;

pub use product_learner::ProductLearner;
pub use product_classifier::ProductClassifier;
