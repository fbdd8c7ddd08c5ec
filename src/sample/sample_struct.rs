use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;

use super::feature::Feature;
use super::target::{NominalTarget, MISSING_TOKENS};
use crate::error::{Result, MhError};


/// Struct `Sample` holds a batch sample:
/// numeric features (columns) and one nominal target column.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: NominalTarget,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Read a CSV format file to [`Sample`] type.
    /// The column named `target` is read as the nominal class.
    pub(crate) fn from_csv<P, S>(file: P, has_header: bool, target: S)
        -> Result<Self>
        where P: AsRef<Path>,
              S: AsRef<str>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header, target)
    }


    /// Read a CSV from [`BufReader`].
    ///
    /// If the CSV has no header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`,
    /// so `target` must be one of these names.
    ///
    /// Every non-target cell must be a number.
    /// A target cell `?` or an empty target cell is a missing class.
    pub fn from_reader<R, S>(
        reader: BufReader<R>,
        has_header: bool,
        target: S,
    ) -> Result<Self>
        where R: Read,
              S: AsRef<str>,
    {
        let target = target.as_ref();
        let mut lines = reader.lines()
            .enumerate()
            .filter_map(|(i, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                other => Some((i + 1, other)),
            })
            .peekable();

        let names = if has_header {
            match lines.next() {
                Some((_, line)) => line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect::<Vec<_>>(),
                None => return Err(MhError::UnknownColumn(target.into())),
            }
        } else {
            let n_column = match lines.peek() {
                Some((_, Ok(line))) => line.split(',').count(),
                _ => 0,
            };
            (1..=n_column).map(|i| format!("Feat. [{i}]"))
                .collect::<Vec<_>>()
        };

        let pos = names.iter()
            .position(|name| name == target)
            .ok_or_else(|| MhError::UnknownColumn(target.into()))?;

        let mut features = names.iter()
            .enumerate()
            .filter(|&(i, _)| i != pos)
            .map(|(_, name)| Feature::new(name))
            .collect::<Vec<_>>();
        let mut nominal = NominalTarget::from_tokens(target, [""; 0]);

        let mut n_sample = 0_usize;
        for (lineno, line) in lines {
            let line = line?;
            let cells = line.split(',').collect::<Vec<_>>();
            if cells.len() != names.len() {
                return Err(MhError::DimensionMismatch {
                    expected: names.len(),
                    got: cells.len(),
                });
            }

            for (i, cell) in cells.into_iter().enumerate() {
                if i == pos {
                    nominal.push_token(cell);
                    continue;
                }
                let cell = cell.trim();
                // The target column is not a feature.
                let feat = &mut features[if i < pos { i } else { i - 1 }];
                if MISSING_TOKENS.contains(&cell) {
                    return Err(MhError::MissingFeatureValue {
                        name: feat.name().to_string(),
                        row: n_sample,
                    });
                }
                let x = cell.parse::<f64>()
                    .map_err(|_| MhError::NonNumericFeature {
                        name: feat.name().to_string(),
                        value: cell.to_string(),
                        line: lineno,
                    })?;
                feat.append(x);
            }
            n_sample += 1;
        }

        Self::from_parts(features, nominal, n_sample)
    }


    /// Construct a sample from in-memory rows.
    /// Each label is a class token; `"?"` marks a missing class.
    /// Features are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_rows<T, S>(rows: T, labels: &[S]) -> Result<Self>
        where T: AsRef<[Vec<f64>]>,
              S: AsRef<str>,
    {
        let rows = rows.as_ref();
        if rows.len() != labels.len() {
            return Err(MhError::DimensionMismatch {
                expected: rows.len(),
                got: labels.len(),
            });
        }
        let n_feature = rows.first()
            .map(|row| row.len())
            .unwrap_or(0);

        let mut features = (1..=n_feature)
            .map(|i| Feature::new(format!("Feat. [{i}]")))
            .collect::<Vec<_>>();
        for row in rows {
            if row.len() != n_feature {
                return Err(MhError::DimensionMismatch {
                    expected: n_feature,
                    got: row.len(),
                });
            }
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, &x)| { feat.append(x); });
        }
        let nominal = NominalTarget::from_tokens("class", labels);

        Self::from_parts(features, nominal, rows.len())
    }


    /// Convert a `polars::DataFrame` into `Sample`.
    /// Every column other than `target` is cast to `f64`;
    /// `target` is cast to string and read as the nominal class.
    /// A value that does not convert to `f64` is
    /// a `NonNumericFeature` error (`line` counts rows from `1`).
    pub fn from_dataframe<S: AsRef<str>>(data: &DataFrame, target: S)
        -> Result<Self>
    {
        let target = target.as_ref();
        let column = data.column(target)
            .map_err(|_| MhError::UnknownColumn(target.into()))?
            .cast(&DataType::Utf8)?;
        let tokens = column.utf8()?
            .into_iter()
            .map(|token| token.unwrap_or("?").to_string())
            .collect::<Vec<_>>();
        let nominal = NominalTarget::from_tokens(target, &tokens);

        let features = data.get_columns()
            .iter()
            .filter(|series| series.name() != target)
            .map(|series| {
                let name = series.name().to_string();
                let casted = series.strict_cast(&DataType::Float64)
                    .map_err(|_| non_numeric(series))?;
                let vals = casted.f64()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, x)| {
                        x.ok_or_else(|| MhError::MissingFeatureValue {
                            name: name.clone(),
                            row,
                        })
                    })
                    .collect::<Result<Vec<f64>>>()?;
                Ok(Feature::from_vals(name, vals))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_parts(features, nominal, data.height())
    }


    fn from_parts(
        features: Vec<Feature>,
        target: NominalTarget,
        n_sample: usize,
    ) -> Result<Self>
    {
        if target.len() != n_sample {
            return Err(MhError::TargetNotSpecified);
        }
        let n_feature = features.len();
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(Self { name_to_index, features, target, n_sample, n_feature, })
    }


    /// Re-declare the class list of the target.
    /// Use this when some declared classes never appear in the data.
    pub fn with_classes<S: ToString>(mut self, classes: &[S])
        -> Result<Self>
    {
        self.target.redeclare(classes)?;
        Ok(self)
    }


    /// Returns the nominal target.
    pub fn target(&self) -> &NominalTarget {
        &self.target
    }


    /// Returns the declared class names.
    pub fn classes(&self) -> &[String] {
        self.target.classes()
    }


    /// Returns the number of declared classes.
    pub fn n_class(&self) -> usize {
        self.target.n_class()
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter()
            .map(|feat| feat.name())
            .collect()
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Set the feature (column) names.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();
        if names.len() != self.n_feature {
            return Err(MhError::DimensionMismatch {
                expected: self.n_feature,
                got: names.len(),
            });
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = self.features.iter()
            .map(|feature| feature.name().to_string())
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();
        Ok(old_names)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, Option<usize>) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target.labels()[idx];

        (x, y)
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;
    fn index(&self, name: S) -> &Self::Output {
        let name = name.as_ref();
        let idx = self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("The feature named `{name}` does not exist"));
        &self.features[*idx]
    }
}


/// Locates the first value of `series` lost by a cast to `f64`.
fn non_numeric(series: &Series) -> MhError {
    let name = series.name().to_string();
    let lossy = series.cast(&DataType::Float64).ok();
    let row = (0..series.len()).find(|&i| {
        let before = series.get(i).map_or(false, |v| !matches!(v, AnyValue::Null));
        let after = lossy.as_ref()
            .and_then(|s| s.get(i).ok())
            .map_or(true, |v| matches!(v, AnyValue::Null));
        before && after
    });

    match row {
        Some(row) => {
            let value = series.get(row)
                .map(|v| v.to_string().trim_matches('"').to_string())
                .unwrap_or_default();
            MhError::NonNumericFeature { name, value, line: row + 1 }
        },
        None => MhError::NonNumericFeature {
            name,
            value: series.dtype().to_string(),
            line: 0,
        },
    }
}
