//! Run configuration shared by the loaders and classifiers.

/// Configuration for parsing delimited records.
///
/// Built once at startup and passed by reference wherever records are read.
/// The defaults match the classic format: space-separated fields, no header,
/// class label in the first column.
#[derive(Clone, Debug)]
pub struct DataConfig {
    /// Field separator within a record line.
    pub delimiter: String,
    /// Skip the first line of every input file.
    pub has_header: bool,
    /// Class-label column. Negative values count from the end of the row
    /// (`-1` is the last column).
    pub label_column: isize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
            has_header: false,
            label_column: 0,
        }
    }
}

impl DataConfig {
    /// Resolve the label column against a row of `width` fields.
    ///
    /// Returns `None` when the index falls outside the row.
    pub fn resolve_label(&self, width: usize) -> Option<usize> {
        let idx = if self.label_column < 0 {
            self.label_column + width as isize
        } else {
            self.label_column
        };
        if idx < 0 || idx as usize >= width {
            None
        } else {
            Some(idx as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_positive_index() {
        let config = DataConfig::default();
        assert_eq!(config.resolve_label(4), Some(0));
    }

    #[test]
    fn resolves_negative_index_from_end() {
        let config = DataConfig {
            label_column: -1,
            ..Default::default()
        };
        assert_eq!(config.resolve_label(4), Some(3));

        let config = DataConfig {
            label_column: -4,
            ..Default::default()
        };
        assert_eq!(config.resolve_label(4), Some(0));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let config = DataConfig {
            label_column: 4,
            ..Default::default()
        };
        assert_eq!(config.resolve_label(4), None);

        let config = DataConfig {
            label_column: -5,
            ..Default::default()
        };
        assert_eq!(config.resolve_label(4), None);
    }
}
