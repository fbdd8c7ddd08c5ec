//! Provides some helper functions.

/// Returns the coefficient of a base classifier with half edge sum `half_edge`:
/// ```txt
/// gamma = 2 * half_edge,
/// eps+  = (1 + gamma) / 2,
/// eps-  = (1 - gamma) / 2,
/// alpha = 0.5 * ln( (eps+ + s) / (eps- + s) ),
/// ```
/// where `s = smoothing / n_instance`.
/// With `smoothing = 0` and `gamma = 1` the result is infinite.
#[inline(always)]
pub fn alpha(half_edge: f64, smoothing: f64, n_instance: usize) -> f64 {
    let (eps_plus, eps_minus) = eps_pair(half_edge);
    let s = smoothing / n_instance.max(1) as f64;
    0.5 * ((eps_plus + s) / (eps_minus + s)).ln()
}


/// Returns the normalization factor `Z` of the weight update
/// for a base classifier with half edge sum `half_edge`:
/// ```txt
/// Z = 2 * sqrt(eps+ * eps-) + (1 - eps+ - eps-).
/// ```
/// `Z` lies in `[0, 1]` whenever `gamma` does.
#[inline(always)]
pub fn energy(half_edge: f64) -> f64 {
    let (eps_plus, eps_minus) = eps_pair(half_edge);
    2f64 * (eps_plus * eps_minus).max(0f64).sqrt()
        + (1f64 - eps_plus - eps_minus)
}


#[inline(always)]
fn eps_pair(half_edge: f64) -> (f64, f64) {
    let gamma = 2f64 * half_edge;
    ((1f64 + gamma) / 2f64, (1f64 - gamma) / 2f64)
}


/// Turns a score vector into a probability vector
/// with a max-shifted softmax.
/// Falls back to the uniform distribution when the scores
/// are not finite or the normalizer vanishes.
pub fn exp_normalize(scores: &[f64]) -> Vec<f64> {
    let k = scores.len();
    let max = scores.iter()
        .copied()
        .fold(f64::MIN, f64::max);

    let mut dist = scores.iter()
        .map(|s| (s - max).exp())
        .collect::<Vec<f64>>();
    let sum = dist.iter().sum::<f64>();

    if sum == 0f64 || !sum.is_finite() {
        return vec![1f64 / k as f64; k];
    }
    dist.iter_mut().for_each(|d| { *d /= sum; });
    dist
}


/// Returns the index of the largest entry.
/// Ties go to the smallest index.
pub fn argmax(slice: &[f64]) -> usize {
    slice.iter()
        .enumerate()
        .fold((0, f64::MIN), |(ix, best), (i, &v)| {
            if v > best { (i, v) } else { (ix, best) }
        })
        .0
}
