//! Decision stumps with one vote per class.

mod stump_algorithm;
mod dstump;
mod dstump_classifier;

pub use dstump::DecisionStump;
pub use dstump_classifier::StumpClassifier;
