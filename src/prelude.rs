//! Exports the standard structs and traits.
//!
pub use crate::booster::{
    Booster,
    AdaBoostMH,
    Params,
};


pub use crate::weak_learner::{
    WeakLearner,
    DecisionStump,
    StumpClassifier,
    ProductLearner,
    ProductClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    BaseHypothesis,
    CombinedHypothesis,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    InstanceTable,
};


pub use crate::research::{
    Logger,
    CurrentHypothesis,
    zero_one_loss,
};


pub use crate::error::{MhError, Result};
