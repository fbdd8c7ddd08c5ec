//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - `alpha` and energy of the newest hypothesis
//! - Training loss
//! - Test loss

/// Defines the logger and the trait it needs from a booster.
pub mod logger;

/// Defines loss functions.
pub mod loss_functions;

/// Text dumps of the label and weight matrices.
pub mod dump;

pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use loss_functions::zero_one_loss;
