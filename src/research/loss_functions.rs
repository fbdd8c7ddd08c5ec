use crate::{Sample, BaseHypothesis, CombinedHypothesis};


/// Zero-one loss of `f` on `sample`:
/// the fraction of rows whose predicted class is not the true class.
/// Rows with a missing class are skipped.
/// A row that `f` cannot classify (e.g., `f` is empty) counts as an error.
pub fn zero_one_loss<H>(sample: &Sample, f: &CombinedHypothesis<H>) -> f64
    where H: BaseHypothesis,
{
    let n_sample = sample.shape().0;
    let (n_error, n_labeled) = (0..n_sample)
        .filter_map(|row| {
            let (x, y) = sample.at(row);
            y.map(|y| (x, y))
        })
        .fold((0_usize, 0_usize), |(err, tot), (x, y)| {
            let wrong = f.predict(&x[..]).map_or(true, |p| p != y);
            (err + usize::from(wrong), tot + 1)
        });

    if n_labeled == 0 {
        return 0f64;
    }
    n_error as f64 / n_labeled as f64
}
