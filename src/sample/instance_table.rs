//! The training view of a [`Sample`].
//!
//! [`InstanceTable`] is the only copy of the training data used while
//! boosting. It holds, for every instance `i`,
//! - the attribute vector `x_i`,
//! - the label vector `y_i ∈ {-1, +1}^K`, and
//! - the weight vector `w_i ∈ [0, ∞)^K`,
//!
//! together with one ascending sorted view per attribute.
//! Weights are updated by the booster after every round.
//! Labels change only inside a [`VirtualLabels`] scope,
//! which restores them when it is dropped.
use rayon::prelude::*;

use std::ops::{Deref, DerefMut};

use super::Sample;
use crate::common::checkers;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::error::{Result, MhError};


/// A label `y[i][k]`. Outside of [`VirtualLabels`] it is `-1` or `+1`.
pub type Label = i8;


/// Instance indices of one attribute sorted by value,
/// with the values in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedColumn {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SortedColumn {
    fn new(data: &[Vec<f64>], j: usize) -> Self {
        let mut indices = (0..data.len()).collect::<Vec<usize>>();
        // Stable, so equal values keep the ascending instance order.
        indices.sort_by(|&a, &b| data[a][j].total_cmp(&data[b][j]));
        let values = indices.iter()
            .map(|&i| data[i][j])
            .collect();

        Self { indices, values }
    }

    /// Instance indices in ascending order of the attribute value.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices[..]
    }

    /// Attribute values in ascending order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}


/// Instances extended with multi-class labels, weights,
/// and per-attribute sorted views.
#[derive(Debug, Clone)]
pub struct InstanceTable {
    data: Vec<Vec<f64>>,
    labels: Vec<Vec<Label>>,
    weights: Vec<Vec<f64>>,
    sorted: Vec<SortedColumn>,
    classes: Vec<String>,
    n_instance: usize,
    n_feature: usize,
    n_class: usize,
}


impl InstanceTable {
    /// Build the table from `sample`.
    /// Rows whose class is missing are dropped.
    ///
    /// For the true class `k` of `x_i`, `y[i][k] = +1` and
    /// `w[i][k] = 1 / (2n)`; for the other classes `y[i][l] = -1` and
    /// `w[i][l] = 1 / (2n(K-1))`, so the weights sum to one.
    pub fn new(sample: &Sample) -> Result<Self> {
        checkers::sample(sample)?;

        let (n_sample, n_feature) = sample.shape();
        let n_class = sample.n_class();

        let rows = (0..n_sample)
            .filter_map(|i| {
                let (x, y) = sample.at(i);
                y.map(|k| (x, k))
            })
            .collect::<Vec<_>>();
        let n_instance = rows.len();

        if n_instance > 0 && n_class < 2 {
            return Err(MhError::TooFewClasses(n_class));
        }

        let pos_weight = 1f64 / (2 * n_instance) as f64;
        let neg_weight = 1f64 / (2 * n_instance * n_class.saturating_sub(1).max(1)) as f64;

        let mut data = Vec::with_capacity(n_instance);
        let mut labels = Vec::with_capacity(n_instance);
        let mut weights = Vec::with_capacity(n_instance);
        for (x, k) in rows {
            let mut y = vec![-1 as Label; n_class];
            y[k] = 1;
            let w = y.iter()
                .map(|&yl| if yl > 0 { pos_weight } else { neg_weight })
                .collect::<Vec<f64>>();
            data.push(x);
            labels.push(y);
            weights.push(w);
        }

        let sorted = (0..n_feature).into_par_iter()
            .map(|j| SortedColumn::new(&data, j))
            .collect::<Vec<_>>();

        let table = Self {
            data,
            labels,
            weights,
            sorted,
            classes: sample.classes().to_vec(),
            n_instance,
            n_feature,
            n_class,
        };

        if n_instance > 0 {
            let sum = table.weight_sum();
            if (sum - 1f64).abs() > WEIGHT_SUM_TOLERANCE {
                tracing::warn!(sum, "sum of initial weights is not 1");
            }
        }

        Ok(table)
    }


    /// Returns the number of instances `n`.
    #[inline]
    pub fn n_instance(&self) -> usize {
        self.n_instance
    }


    /// Returns the number of attributes `d`.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }


    /// Returns the number of classes `K`.
    #[inline]
    pub fn n_class(&self) -> usize {
        self.n_class
    }


    /// Returns the declared class names.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the attribute vector of the `i`-th instance.
    #[inline]
    pub fn attributes(&self, i: usize) -> &[f64] {
        &self.data[i][..]
    }


    /// Returns the label vector of the `i`-th instance.
    #[inline]
    pub fn labels(&self, i: usize) -> &[Label] {
        &self.labels[i][..]
    }


    /// Returns the weight vector of the `i`-th instance.
    #[inline]
    pub fn weights(&self, i: usize) -> &[f64] {
        &self.weights[i][..]
    }


    /// Returns the whole weight matrix, one row per instance.
    pub fn weight_matrix(&self) -> &[Vec<f64>] {
        &self.weights[..]
    }


    /// Returns the whole mutable weight matrix, one row per instance.
    pub fn weight_matrix_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.weights[..]
    }


    /// Returns the whole label matrix, one row per instance.
    pub fn label_matrix(&self) -> &[Vec<Label>] {
        &self.labels[..]
    }


    /// Returns the sorted view of the `j`-th attribute.
    #[inline]
    pub fn sorted_column(&self, j: usize) -> &SortedColumn {
        &self.sorted[j]
    }


    /// Returns `Σ_{i,k} w[i][k]`.
    pub fn weight_sum(&self) -> f64 {
        self.weights.iter()
            .map(|w| w.iter().sum::<f64>())
            .sum::<f64>()
    }


    /// Opens a scope in which labels may be modified.
    /// The labels are restored when the returned guard is dropped.
    pub fn virtual_labels(&mut self) -> VirtualLabels<'_> {
        let saved = self.labels.clone();
        VirtualLabels { table: self, saved }
    }
}


/// A mutable handle on an [`InstanceTable`] whose labels
/// can be rewritten. Dropping it restores the labels it started from.
pub struct VirtualLabels<'t> {
    table: &'t mut InstanceTable,
    saved: Vec<Vec<Label>>,
}


impl VirtualLabels<'_> {
    /// Returns the mutable label vector of the `i`-th instance.
    #[inline]
    pub fn labels_mut(&mut self, i: usize) -> &mut [Label] {
        &mut self.table.labels[i][..]
    }


    /// Rewrites the labels with a hypothesis `h(x, k)`.
    /// A nonzero label flips where `h` is negative
    /// and becomes `0` where `h` is zero.
    pub fn relabel_by<F>(&mut self, h: F)
        where F: Fn(&[f64], usize) -> f64
    {
        let table = &mut *self.table;
        table.data.iter()
            .zip(table.labels.iter_mut())
            .for_each(|(x, y)| {
                y.iter_mut()
                    .enumerate()
                    .filter(|(_, yk)| **yk != 0)
                    .for_each(|(k, yk)| {
                        let hx = h(x, k);
                        if hx < 0f64 {
                            *yk = -*yk;
                        } else if hx == 0f64 {
                            *yk = 0;
                        }
                    });
            });
    }
}


impl Deref for VirtualLabels<'_> {
    type Target = InstanceTable;
    fn deref(&self) -> &Self::Target {
        &*self.table
    }
}


impl DerefMut for VirtualLabels<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.table
    }
}


impl Drop for VirtualLabels<'_> {
    fn drop(&mut self) {
        self.table.labels.clone_from_slice(&self.saved[..]);
    }
}
