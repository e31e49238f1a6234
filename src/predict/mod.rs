//! Classification over trained models and accuracy aggregation.

use std::io::{self, Write};

use tracing::warn;

use crate::tree::{DecisionTree, NodeKind};

/// Outcome of classifying a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class, or the best-effort fallback on failure.
    pub label: String,
    /// True when traversal found no branch for an attribute value and the
    /// label is the fallback taken at the point of failure.
    pub no_branch: bool,
}

impl Prediction {
    fn hit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            no_branch: false,
        }
    }

    fn fallback(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            no_branch: true,
        }
    }
}

/// Anything that can predict a class for a label-first record.
///
/// `record` carries the actual class in column 0, mirroring the training
/// layout; implementations must not read it when predicting.
pub trait Classifier {
    fn classify(&self, record: &[String]) -> Prediction;

    /// Classify every record and tally accuracy against column 0.
    fn evaluate(&self, records: &[Vec<String>]) -> Evaluation {
        let mut predictions = Vec::with_capacity(records.len());
        let mut errors = 0;

        for record in records {
            let prediction = self.classify(record);
            if prediction.label != record[0] {
                errors += 1;
            }
            predictions.push(prediction.label);
        }

        Evaluation {
            predictions,
            errors,
            total: records.len(),
        }
    }
}

/// Read-only tree walker implementing [`Classifier`].
pub struct TreeClassifier<'t> {
    tree: &'t DecisionTree,
}

impl<'t> TreeClassifier<'t> {
    pub fn new(tree: &'t DecisionTree) -> Self {
        Self { tree }
    }
}

impl Classifier for TreeClassifier<'_> {
    /// Walk from the root, consuming one record field per decision.
    ///
    /// Each decision node's column is relative to the fields the record has
    /// left, so the tested field is removed from the working copy exactly as
    /// training removed it from the slice. An attribute value with no
    /// matching branch stops traversal with the current node's label as the
    /// fallback prediction.
    fn classify(&self, record: &[String]) -> Prediction {
        let mut fields: Vec<String> = record.to_vec();
        let mut node = self.tree.root();

        loop {
            match node.kind() {
                NodeKind::Leaf => return Prediction::hit(node.label()),
                NodeKind::Root | NodeKind::Branch => {
                    // A non-decision interior node has exactly one child,
                    // the leaf that settles the prediction; none at all
                    // means the tree was built from no data.
                    let Some(child) = node.children().first() else {
                        warn!("decision tree has no branch at all; was it trained on an empty set?");
                        return Prediction::fallback(node.label());
                    };
                    return Prediction::hit(child.label());
                }
                NodeKind::Decision { column } => {
                    if column >= fields.len() {
                        warn!(column, width = fields.len(), "record too short for tree");
                        return Prediction::fallback(node.label());
                    }
                    let value = fields.remove(column);

                    match node.child_for(&value) {
                        Some(next) => node = next,
                        None => {
                            warn!(value = %value, "no branch in the decision tree for attribute value");
                            return Prediction::fallback(node.label());
                        }
                    }
                }
            }
        }
    }
}

/// Per-record predictions plus the aggregate accuracy statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub predictions: Vec<String>,
    pub errors: usize,
    pub total: usize,
}

impl Evaluation {
    /// `(1 - errors/total) * 100`; an empty test set counts as 100%.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (1.0 - self.errors as f64 / self.total as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!("Accuracy: {:.3}%", self.accuracy())
    }

    /// Write one prediction per line followed by the accuracy summary.
    pub fn write_to<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for prediction in &self.predictions {
            writeln!(sink, "{prediction}")?;
        }
        writeln!(sink, "{}", self.summary())
    }
}
