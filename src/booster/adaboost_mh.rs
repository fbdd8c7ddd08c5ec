//! Defines `AdaBoostMH`.
//! This struct is based on the paper:
//! [Improved Boosting Algorithms Using Confidence-rated Predictions](https://doi.org/10.1023/A:1007614523901)
//! by Robert E. Schapire and Yoram Singer,
//! with the product base learners of
//! [The return of AdaBoost.MH: multi-class Hamming trees](https://arxiv.org/abs/1312.6086)
//! by Balázs Kégl.
mod adaboost_mh_algorithm;
mod params;

pub use adaboost_mh_algorithm::AdaBoostMH;
pub use params::Params;
