//! Defines some common functions used in this library.

/// Defines some useful functions such as `alpha` and energy calculation.
pub mod helpers;

/// Defines some checker functions.
pub(crate) mod checkers;

/// Serde helpers for floats that may be infinite.
pub(crate) mod infinity;
