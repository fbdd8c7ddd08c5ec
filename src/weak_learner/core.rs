//! Provides `WeakLearner` trait.
use crate::InstanceTable;


/// An interface for the weak learners of AdaBoost.MH.
///
/// A weak learner reads the current weights and labels of an
/// [`InstanceTable`] and returns a hypothesis.
/// It may rewrite labels through
/// [`InstanceTable::virtual_labels`],
/// so the table it returns is observably unchanged.
///
/// # Required Methods
/// - [`WeakLearner::name`]
/// - [`WeakLearner::produce`]
/// - [`WeakLearner::info`] ... optional.
pub trait WeakLearner {
    /// The hypothesis type produced by this weak learner.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Returns a hypothesis for the current weights of `table`.
    fn produce(&self, table: &mut InstanceTable) -> Self::Hypothesis;
}
