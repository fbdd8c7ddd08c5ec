use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::checkers;
use crate::constants::{
    DEFAULT_ITERATIONS,
    DEFAULT_PRODUCT_SIZE,
    DEFAULT_SMOOTHING,
};
use crate::error::Result;


/// Training parameters of [`AdaBoostMH`](super::AdaBoostMH).
///
/// Missing fields take their default values,
/// so `{"iterations": 20}` is a valid configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of boosting rounds `T`. Default `100`.
    pub iterations: usize,
    /// Maximal number of stumps per base learner `M`. Default `3`.
    pub product_size: usize,
    /// Smoothing coefficient of `alpha`. Default `0.01`.
    pub smoothing: f64,
}


impl Default for Params {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            product_size: DEFAULT_PRODUCT_SIZE,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}


impl Params {
    /// Read parameters from a JSON file and validate them.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let params: Self = serde_json::from_reader(BufReader::new(file))?;
        params.validate()?;
        Ok(params)
    }


    /// Returns an error if some parameter is out of range.
    pub fn validate(&self) -> Result<()> {
        checkers::iterations(self.iterations)?;
        checkers::product_size(self.product_size)?;
        checkers::smoothing(self.smoothing)?;
        Ok(())
    }
}
