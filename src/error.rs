//! Error types in MhBoost.
//!

use thiserror::Error;

use polars::prelude::PolarsError;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, MhError>;

/// Errors raised at the training and classification boundary.
#[derive(Error, Debug)]
pub enum MhError {
    #[error("no model built")]
    NoModel,
    #[error(
        "feature `{name}` is not numeric: got `{value}` at line {line}"
    )]
    NonNumericFeature {
        name: String,
        value: String,
        line: usize,
    },
    #[error("feature `{name}` has a missing value at row {row}")]
    MissingFeatureValue {
        name: String,
        row: usize,
    },
    #[error(
        "the target class is not specified. \
        use `SampleReader::target_feature(\"column name\")`"
    )]
    TargetNotSpecified,
    #[error("the column `{0}` does not exist")]
    UnknownColumn(String),
    #[error("the class `{0}` is not declared")]
    UndeclaredClass(String),
    #[error("at least two classes are required, got {0}")]
    TooFewClasses(usize),
    #[error("expected {expected} attribute values, got {got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    #[error("invalid parameter {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
