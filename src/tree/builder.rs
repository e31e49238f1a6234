//! Recursive tree induction by information gain.

use tracing::debug;

use crate::data::Dataset;
use crate::tree::entropy::{class_entropy, expected_information};
use crate::tree::{DecisionTree, Node};

/// Builds a [`DecisionTree`] by recursive partitioning.
///
/// Every column of the current slice except the label (column 0) is a split
/// candidate; the one with the greatest information gain wins, first column
/// winning ties. The chosen column is physically removed from each
/// partition's rows before recursing, so child indices are relative to the
/// shrunken layout. There is no minimum-gain threshold: recursion only stops
/// on the base cases (empty slice, pure class, attributes exhausted).
pub struct TreeBuilder;

impl TreeBuilder {
    /// Consume a dataset and grow the full tree under a synthetic root.
    ///
    /// An empty dataset yields a root with no children; classification then
    /// fails per record instead of at build time.
    pub fn build(dataset: Dataset) -> DecisionTree {
        let mut root = Node::root();
        Self::grow(dataset.into_rows(), &mut root);
        DecisionTree::new(root)
    }

    fn grow(rows: Vec<Vec<String>>, parent: &mut Node) {
        if rows.is_empty() {
            return;
        }

        // Pure class: a single leaf covers the whole slice.
        let first_class = rows[0][0].as_str();
        if rows.iter().all(|r| r[0] == first_class) {
            parent.push_child(Node::leaf(first_class));
            return;
        }

        // Only the label column left: majority vote.
        if rows[0].len() == 1 {
            parent.push_child(Node::leaf(majority_class(&rows)));
            return;
        }

        let entropy = class_entropy(&rows);

        let mut best_column = 0;
        let mut best_gain = f64::NEG_INFINITY;
        for column in 1..rows[0].len() {
            let gain = entropy - expected_information(&rows, column);
            // Strictly greater: the first column encountered keeps ties.
            if gain > best_gain {
                best_gain = gain;
                best_column = column;
            }
        }
        debug!(column = best_column, gain = best_gain, "selected split");

        // The node being partitioned records its own test; the routing
        // values live on the children it is about to receive.
        parent.finalize_split(best_column);

        for (value, mut group) in partition(rows, best_column) {
            for row in &mut group {
                row.remove(best_column);
            }

            let mut child = Node::branch(value);
            Self::grow(group, &mut child);
            parent.push_child(child);
        }
    }
}

/// Group rows by their value at `column`, first-seen order.
fn partition(rows: Vec<Vec<String>>, column: usize) -> Vec<(String, Vec<Vec<String>>)> {
    let mut groups: Vec<(String, Vec<Vec<String>>)> = Vec::new();
    for row in rows {
        match groups.iter().position(|(v, _)| *v == row[column]) {
            Some(i) => groups[i].1.push(row),
            None => {
                let value = row[column].clone();
                groups.push((value, vec![row]));
            }
        }
    }
    groups
}

/// Most frequent class value (column 0); ties keep the first-seen class.
fn majority_class(rows: &[Vec<String>]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for row in rows {
        let class = row[0].as_str();
        match counts.iter().position(|(c, _)| *c == class) {
            Some(i) => counts[i].1 += 1,
            None => counts.push((class, 1)),
        }
    }

    let mut majority = "";
    let mut majority_count = 0;
    for (class, count) in counts {
        if count > majority_count {
            majority_count = count;
            majority = class;
        }
    }
    majority.to_string()
}
