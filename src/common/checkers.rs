//! This file defines some functions that check some pre-conditions.
//! E.g., every attribute value is present.
use crate::Sample;
use crate::error::{Result, MhError};


/// Check whether the training sample is valid or not.
/// Every attribute value must be a finite number.
pub fn sample(sample: &Sample) -> Result<()> {
    for feature in sample.features() {
        if let Some(row) = feature.first_missing() {
            return Err(MhError::MissingFeatureValue {
                name: feature.name().to_string(),
                row,
            });
        }
    }
    Ok(())
}


/// Check the number of boosting rounds.
#[inline(always)]
pub fn iterations(n: usize) -> Result<()> {
    if n == 0 {
        return Err(MhError::InvalidParameter(
            "`iterations` must be at least 1, got 0".to_string()
        ));
    }
    Ok(())
}


/// Check the number of factors in a product.
#[inline(always)]
pub fn product_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(MhError::InvalidParameter(
            "`product_size` must be at least 1, got 0".to_string()
        ));
    }
    Ok(())
}


/// Check the smoothing coefficient of `alpha`.
#[inline(always)]
pub fn smoothing(coef: f64) -> Result<()> {
    if !coef.is_finite() || coef <= 0f64 {
        return Err(MhError::InvalidParameter(format!(
            "`smoothing` must be a positive number, got {coef}"
        )));
    }
    Ok(())
}
