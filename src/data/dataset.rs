//! In-memory dataset of categorical records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DataConfig;
use crate::data::DataError;

/// An ordered collection of label-first records.
///
/// All rows have the same number of columns; column 0 is always the class
/// label. Row order is preserved from the input, which matters downstream:
/// tie-breaking and partition order are defined in terms of first-seen order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Load a dataset from a file.
    pub fn from_path(path: &Path, config: &DataConfig) -> Result<Self, DataError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Load a dataset from any line-oriented reader.
    ///
    /// Skips the header line if configured, splits each line on the
    /// delimiter, resolves the label column (negative indices count from the
    /// end) and moves the label field to the front. Fails fast on the first
    /// row whose width disagrees with the rest.
    pub fn from_reader<R: BufRead>(reader: R, config: &DataConfig) -> Result<Self, DataError> {
        let mut rows = Vec::new();
        let mut expected_width = None;

        let skip = usize::from(config.has_header);
        for (idx, line) in reader.lines().enumerate().skip(skip) {
            let line = line?;
            let row = normalize_record(&line, config, idx + 1)?;

            let width = *expected_width.get_or_insert(row.len());
            if row.len() != width {
                return Err(DataError::InconsistentWidth {
                    line: idx + 1,
                    expected: width,
                    got: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Build a dataset directly from label-first rows. Intended for tests
    /// and programmatic use; no normalization is applied.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns per row (label included), or 0 for an empty set.
    pub fn n_columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split one line into fields and move the class label to column 0.
fn normalize_record(
    line: &str,
    config: &DataConfig,
    lineno: usize,
) -> Result<Vec<String>, DataError> {
    let mut fields: Vec<String> = line
        .split(config.delimiter.as_str())
        .map(String::from)
        .collect();

    let label_idx = config
        .resolve_label(fields.len())
        .ok_or(DataError::LabelOutOfBounds {
            line: lineno,
            column: config.label_column,
            width: fields.len(),
        })?;

    let label = fields.remove(label_idx);
    fields.insert(0, label);
    Ok(fields)
}
