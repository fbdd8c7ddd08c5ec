//! Provides the boosting algorithms.

mod core;
mod adaboost_mh;

pub use self::core::Booster;
pub use self::adaboost_mh::{
    AdaBoostMH,
    Params,
};
