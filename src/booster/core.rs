//! The `Booster` trait: the driver side of a boosting run.

use crate::WeakLearner;
use crate::error::Result;

use std::ops::ControlFlow;


/// A booster drives training round by round.
/// Each round it hands its current weights over
/// (instance, class) pairs to a [`WeakLearner`],
/// takes back one base hypothesis, and reweights.
///
/// Training is split into three steps so that a caller
/// (e.g., [`Logger`](crate::research::Logger)) can observe
/// the state between rounds:
/// 1. [`Booster::preprocess`] validates the input and builds the state,
/// 2. [`Booster::boost`] runs one round,
/// 3. [`Booster::postprocess`] assembles the ensemble.
///
/// [`Booster::run`] performs the three steps in order.
/// Stopping between two calls of `boost` leaves a valid model.
pub trait Booster<H> {
    /// The ensemble type this booster returns.
    type Output;

    /// Name of the algorithm, for logs.
    fn name(&self) -> &str;

    /// Key/value pairs describing the configuration, for logs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Trains until [`Booster::boost`] breaks and returns the ensemble.
    fn run<W>(&mut self, weak_learner: &W) -> Result<Self::Output>
        where W: WeakLearner<Hypothesis = H>
    {
        self.preprocess()?;

        let _ = (1..).try_for_each(|iteration|
            self.boost(weak_learner, iteration)
        );

        Ok(self.postprocess())
    }

    /// Validates the configuration and the sample
    /// and resets the training state.
    fn preprocess(&mut self) -> Result<()>;

    /// Runs round `iteration` (starting from `1`).
    /// Returns `ControlFlow::Break(n)` with the number of hypotheses
    /// once there is nothing left to do.
    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<usize>
        where W: WeakLearner<Hypothesis = H>;

    /// Returns the ensemble of every hypothesis trained so far.
    fn postprocess(&mut self) -> Self::Output;
}
