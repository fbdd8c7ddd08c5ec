//! Numeric constants shared by the learners.

/// Two attribute values closer than this are treated as equal,
/// and a split must beat the current best half edge by this much.
pub const VALUE_TOLERANCE:  f64 = 1e-6;
/// Tolerance on energies when comparing attributes and product slots.
pub const ENERGY_TOLERANCE: f64 = 1e-8;
/// Tolerance of the initial weight-sum check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// `s = DEFAULT_SMOOTHING / n` is added to both sides of the `alpha` ratio.
pub const DEFAULT_SMOOTHING: f64 = 0.01;

/// Default number of boosting rounds.
pub const DEFAULT_ITERATIONS:   usize = 100;
/// Default number of factors in a product learner.
pub const DEFAULT_PRODUCT_SIZE: usize =   3;

/// Initial capacity of a feature column while reading.
pub const BUFFER_SIZE: usize = 256;
