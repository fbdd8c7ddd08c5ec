use serde::{Serialize, Deserialize};

use crate::error::{Result, MhError};

/// Tokens treated as a missing class value.
pub(crate) const MISSING_TOKENS: [&str; 2] = ["?", ""];

/// A nominal column: the declared class names
/// and the class index of each row.
/// `None` marks a row whose class is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominalTarget {
    pub(crate) name: String,
    pub(crate) classes: Vec<String>,
    pub(crate) labels: Vec<Option<usize>>,
}

impl NominalTarget {
    /// Builds a target from raw tokens.
    /// Classes are declared in the order of first appearance.
    pub fn from_tokens<S, T>(name: S, tokens: T) -> Self
        where S: ToString,
              T: IntoIterator,
              T::Item: AsRef<str>,
    {
        let mut classes: Vec<String> = Vec::new();
        let labels = tokens.into_iter()
            .map(|token| {
                let token = token.as_ref().trim();
                if MISSING_TOKENS.contains(&token) {
                    return None;
                }
                let k = match classes.iter().position(|c| c == token) {
                    Some(k) => k,
                    None => {
                        classes.push(token.to_string());
                        classes.len() - 1
                    },
                };
                Some(k)
            })
            .collect();

        Self { name: name.to_string(), classes, labels, }
    }

    /// Re-declares the class list.
    /// Every class that appears in `self` must be in `classes`.
    pub fn redeclare<S: ToString>(&mut self, classes: &[S]) -> Result<()> {
        let classes = classes.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        let remap = self.classes.iter()
            .map(|old| {
                classes.iter()
                    .position(|c| c == old)
                    .ok_or_else(|| MhError::UndeclaredClass(old.clone()))
            })
            .collect::<Result<Vec<usize>>>()?;

        self.labels.iter_mut()
            .flatten()
            .for_each(|k| { *k = remap[*k]; });
        self.classes = classes;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }

    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels[..]
    }

    pub fn n_class(&self) -> usize {
        self.classes.len()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn push_token(&mut self, token: &str) {
        let token = token.trim();
        if MISSING_TOKENS.contains(&token) {
            self.labels.push(None);
            return;
        }
        let k = match self.classes.iter().position(|c| c == token) {
            Some(k) => k,
            None => {
                self.classes.push(token.to_string());
                self.classes.len() - 1
            },
        };
        self.labels.push(Some(k));
    }
}
