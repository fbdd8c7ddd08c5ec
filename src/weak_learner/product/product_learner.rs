//! Provides the product learner.
use std::fmt;

use crate::{
    InstanceTable,
    WeakLearner,
    BaseHypothesis,
    DecisionStump,
};
use crate::constants::{DEFAULT_PRODUCT_SIZE, ENERGY_TOLERANCE};

use super::ProductClassifier;


/// `ProductLearner` trains up to `size` base hypotheses
/// whose product is one base hypothesis.
///
/// Slots are trained in turn, cycling `0, 1, ..., size - 1, 0, 1, ...`.
/// After slot `b` is trained, every nonzero label `y[i][k]` is
/// multiplied by the sign of slot `b` on `(x_i, k)`
/// (and set to `0` where the slot answers `0`),
/// so that the next slot fits what the others get wrong.
/// From the second cycle on, a slot first applies its old hypothesis
/// to the labels once more before it is retrained.
///
/// Training stops at the first slot whose energy does not decrease
/// by more than `1e-8`; that slot is rolled back
/// (or dropped, during the first cycle).
/// The labels of the table are restored before `produce` returns.
///
/// ```no_run
/// use mhboost::prelude::*;
/// let learner = ProductLearner::new(DecisionStump::new())
///     .size(3);
/// ```
#[derive(Debug, Clone)]
pub struct ProductLearner<W> {
    base: W,
    size: usize,
}


impl<W> ProductLearner<W> {
    /// Construct a product learner over `base`
    /// with the default size `3`.
    pub fn new(base: W) -> Self {
        Self { base, size: DEFAULT_PRODUCT_SIZE }
    }


    /// Set the maximal number of factors.
    pub fn size(mut self, size: usize) -> Self {
        assert!(size > 0, "product size must be positive. got {size}.");
        self.size = size;
        self
    }


    /// Returns the maximal number of factors.
    pub fn product_size(&self) -> usize {
        self.size
    }
}


impl Default for ProductLearner<DecisionStump> {
    fn default() -> Self {
        Self::new(DecisionStump::new())
    }
}


impl<W, H> ProductLearner<W>
    where W: WeakLearner<Hypothesis = H>,
          H: BaseHypothesis,
{
    /// Same as [`WeakLearner::produce`], but also returns the energy
    /// of every accepted slot in training order.
    pub fn produce_with_trace(&self, table: &mut InstanceTable)
        -> (ProductClassifier<H>, Vec<f64>)
    {
        let mut scope = table.virtual_labels();

        let mut slots: Vec<H> = Vec::with_capacity(self.size);
        let mut energy = f64::MAX;
        let mut alpha = 0f64;
        let mut trace = Vec::new();

        for round in 0.. {
            let ib = round % self.size;
            let first_pass = round < self.size;
            let (prev_energy, prev_alpha) = (energy, alpha);

            if !first_pass {
                let old = &slots[ib];
                scope.relabel_by(|x, k| old.confidence(x, k));
            }
            let snapshot = slots.get(ib).cloned();

            let h = self.base.produce(&mut scope);
            energy = h.energy();
            alpha = h.alpha();
            scope.relabel_by(|x, k| h.confidence(x, k));
            tracing::debug!(slot = ib, energy, alpha, "product slot trained");

            if first_pass {
                slots.push(h);
            } else {
                slots[ib] = h;
            }

            if energy - prev_energy > -ENERGY_TOLERANCE {
                energy = prev_energy;
                alpha = prev_alpha;
                if first_pass {
                    slots.truncate(ib);
                } else if let Some(old) = snapshot {
                    slots[ib] = old;
                }
                break;
            }
            trace.push(energy);
        }

        let product = ProductClassifier { hypotheses: slots, alpha, energy };
        (product, trace)
    }
}


impl<W, H> WeakLearner for ProductLearner<W>
    where W: WeakLearner<Hypothesis = H>,
          H: BaseHypothesis,
{
    type Hypothesis = ProductClassifier<H>;


    fn name(&self) -> &str {
        "Product Learner"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Product size", format!("{}", self.size)),
            ("Base learner", self.base.name().to_string()),
        ]);
        Some(info)
    }


    fn produce(&self, table: &mut InstanceTable) -> Self::Hypothesis {
        self.produce_with_trace(table).0
    }
}


impl<W: fmt::Display> fmt::Display for ProductLearner<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Product Weak Learner\n\n\
            - Product size: {}\n\
            - Base learner:\
            ",
            self.size,
        )?;
        write!(f, "{}", self.base)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sample, Classifier, StumpClassifier};
    use crate::sample::Label;

    use std::cell::{Cell, RefCell};

    /// Hands out a fixed sequence of stumps
    /// and records the labels it was trained on.
    struct Scripted {
        script: Vec<StumpClassifier>,
        calls: Cell<usize>,
        seen: RefCell<Vec<Vec<Vec<Label>>>>,
    }

    impl Scripted {
        fn new(script: Vec<StumpClassifier>) -> Self {
            Self { script, calls: Cell::new(0), seen: RefCell::new(Vec::new()) }
        }
    }

    impl WeakLearner for Scripted {
        type Hypothesis = StumpClassifier;

        fn name(&self) -> &str {
            "Scripted"
        }

        fn produce(&self, table: &mut InstanceTable) -> StumpClassifier {
            self.seen.borrow_mut().push(table.label_matrix().to_vec());
            let call = self.calls.get();
            self.calls.set(call + 1);
            self.script[call].clone()
        }
    }

    fn stump(feature: usize, votes: [f64; 3], energy: f64) -> StumpClassifier {
        StumpClassifier {
            feature,
            threshold: 0.0,
            votes: votes.to_vec(),
            alpha: 1.0 - energy,
            energy,
        }
    }

    /// `labels[i][k] * h_k(x_i)` for a stump `h`.
    fn times(table: &InstanceTable, labels: &[Vec<Label>], h: &StumpClassifier)
        -> Vec<Vec<Label>>
    {
        labels.iter()
            .enumerate()
            .map(|(i, y)| {
                let x = table.attributes(i);
                y.iter()
                    .enumerate()
                    .map(|(k, &yk)| yk * h.confidence(x, k) as Label)
                    .collect()
            })
            .collect()
    }

    /// Four clusters, ten copies each.
    /// `(+,+)` and `(-,-)` are `C0`, `(+,-)` is `C1`, `(-,+)` is `C2`.
    fn xor_table() -> InstanceTable {
        let corners = [
            ([1.0, 1.0], "C0"),
            ([-1.0, -1.0], "C0"),
            ([1.0, -1.0], "C1"),
            ([-1.0, 1.0], "C2"),
        ];
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for (x, y) in corners {
            for _ in 0..10 {
                rows.push(x.to_vec());
                labels.push(y);
            }
        }
        let sample = Sample::from_rows(&rows, &labels).unwrap();
        InstanceTable::new(&sample).unwrap()
    }

    #[test]
    fn labels_are_restored() {
        let mut table = xor_table();
        let before = table.label_matrix().to_vec();
        let _ = ProductLearner::new(DecisionStump::new()).size(3).produce(&mut table);
        assert_eq!(table.label_matrix(), &before[..]);
    }

    #[test]
    fn energy_strictly_decreases_until_stop() {
        let mut table = xor_table();
        let (h, trace) = ProductLearner::new(DecisionStump::new())
            .size(3)
            .produce_with_trace(&mut table);

        assert!(!trace.is_empty());
        for pair in trace.windows(2) {
            assert!(pair[1] - pair[0] <= -ENERGY_TOLERANCE);
        }
        assert_eq!(h.energy(), *trace.last().unwrap());
        assert!(h.len() >= 1 && h.len() <= 3);
    }

    #[test]
    fn product_beats_single_stump() {
        let mut table = xor_table();
        let single = ProductLearner::new(DecisionStump::new()).size(1).produce(&mut table);
        let product = ProductLearner::new(DecisionStump::new()).size(3).produce(&mut table);

        assert_eq!(single.len(), 1);
        assert!(product.len() >= 2);
        assert!(product.energy() < single.energy());
    }

    #[test]
    fn size_one_is_a_single_stump() {
        let mut table = xor_table();
        let stump = DecisionStump::new().produce(&mut table);
        let product = ProductLearner::new(DecisionStump::new()).size(1).produce(&mut table);

        assert_eq!(product.hypotheses(), [stump.clone()]);
        assert_eq!(product.alpha(), stump.alpha());
        let x = [1.0, -1.0];
        assert_eq!(product.confidence_all(&x), stump.confidence_all(&x));
    }

    #[test]
    fn second_pass_without_gain_restores_the_old_slot() {
        let mut table = xor_table();
        let a = stump(0, [1.0, 1.0, -1.0], 0.8);
        let b = stump(1, [1.0, -1.0, 1.0], 0.6);
        // Retraining slot 0 does not beat `b`.
        let c = stump(0, [-1.0, 1.0, 1.0], 0.7);

        let learner = ProductLearner::new(
            Scripted::new(vec![a.clone(), b.clone(), c])
        ).size(2);
        let (h, trace) = learner.produce_with_trace(&mut table);

        assert_eq!(learner.base.calls.get(), 3);
        assert_eq!(h.hypotheses(), [a, b.clone()]);
        assert_eq!(h.energy(), b.energy());
        assert_eq!(h.alpha(), b.alpha());
        assert_eq!(trace, vec![0.8, 0.6]);
    }

    #[test]
    fn first_pass_trains_without_undoing_the_slot() {
        let mut table = xor_table();
        let l0 = table.label_matrix().to_vec();

        let a = stump(0, [1.0, 1.0, -1.0], 0.8);
        let b = stump(1, [1.0, -1.0, 1.0], 0.6);
        let c = stump(0, [-1.0, 1.0, 1.0], 0.5);
        let d = stump(1, [1.0, 1.0, 1.0], 0.55);

        let learner = ProductLearner::new(
            Scripted::new(vec![a.clone(), b.clone(), c.clone(), d])
        ).size(2);
        let (h, trace) = learner.produce_with_trace(&mut table);

        // Slot 0 on the first pass sees the raw labels,
        // slot 1 sees them multiplied by `a` only.
        // On the second pass each slot first removes its own old factor.
        let seen = learner.base.seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], l0);
        assert_eq!(seen[1], times(&table, &l0, &a));
        assert_eq!(seen[2], times(&table, &l0, &b));
        assert_eq!(seen[3], times(&table, &l0, &c));

        assert_eq!(h.hypotheses(), [c, b]);
        assert_eq!(h.energy(), 0.5);
        assert_eq!(trace, vec![0.8, 0.6, 0.5]);
        assert_eq!(table.label_matrix(), &l0[..]);
    }
}
