use std::mem;
use std::ops::Index;

use crate::constants::BUFFER_SIZE;

/// A named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    vals: Vec<f64>,
}

impl Feature {
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }

    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn append(&mut self, val: f64) {
        self.vals.push(val);
    }

    pub(crate) fn replace_name<T>(&mut self, name: T) -> String
        where T: ToString,
    {
        mem::replace(&mut self.name, name.to_string())
    }

    /// Returns the first row whose value is not finite.
    pub(crate) fn first_missing(&self) -> Option<usize> {
        self.vals.iter()
            .position(|v| !v.is_finite())
    }
}

impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
