use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{Result, MhError};

/// A builder that reads a CSV file into [`Sample`].
///
/// # Example
/// ```no_run
/// use mhboost::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/iris.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}

impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self { file: None, has_header: false, target: None, }
    }
}

impl<P, S> SampleReader<P, S> {
    /// Whether the first non-empty line holds the column names.
    /// Without a header, columns are named `Feat. [1]`, `Feat. [2]`, ...
    /// Defaults to `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Path of the CSV file to read.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Name of the nominal class column.
    /// Every other column must be numeric.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file.
    /// Fails if the path or the class column was never given.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| MhError::InvalidParameter(
                "the file name for csv is not set".into()
            ))?;
        let target = self.target.ok_or(MhError::TargetNotSpecified)?;

        Sample::from_csv(file, self.has_header, target)
    }
}
