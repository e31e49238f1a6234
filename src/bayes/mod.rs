//! Naive-Bayes counting classifier for categorical records.
//!
//! Shares the label-first record convention and the [`Classifier`] seam with
//! the decision tree, but trains by counting alone: class priors plus
//! per-class, per-attribute-position value counts, with Laplace smoothing to
//! keep unseen values from zeroing out a class score.

use std::collections::HashMap;

use tracing::debug;

use crate::data::Dataset;
use crate::predict::{Classifier, Prediction};

/// Training parameters.
#[derive(Clone, Debug)]
pub struct BayesParams {
    /// Laplace smoothing constant added to every value count.
    pub laplace: u32,
}

impl Default for BayesParams {
    fn default() -> Self {
        Self { laplace: 1 }
    }
}

/// Per-class counting state.
#[derive(Debug, Clone)]
struct ClassStats {
    label: String,
    count: usize,
    prior: f64,
    /// Value counts per attribute position (record columns 1..).
    value_counts: Vec<HashMap<String, usize>>,
}

/// A trained naive-Bayes model.
///
/// Classes are kept in first-seen training order; argmax selection replaces
/// the running best only on a strictly greater score, so ties resolve to the
/// earlier class deterministically.
#[derive(Debug, Clone)]
pub struct BayesClassifier {
    laplace: u32,
    n_attributes: usize,
    classes: Vec<ClassStats>,
}

impl BayesClassifier {
    /// Count priors and per-attribute value frequencies from the dataset.
    pub fn train(dataset: &Dataset, params: &BayesParams) -> Self {
        let n_attributes = dataset.n_columns().saturating_sub(1);
        let mut classes: Vec<ClassStats> = Vec::new();

        for row in dataset.rows() {
            let class = row[0].as_str();
            let idx = match classes.iter().position(|s| s.label == class) {
                Some(idx) => idx,
                None => {
                    classes.push(ClassStats {
                        label: class.to_string(),
                        count: 0,
                        prior: 0.0,
                        value_counts: vec![HashMap::new(); n_attributes],
                    });
                    classes.len() - 1
                }
            };

            let stats = &mut classes[idx];
            stats.count += 1;
            for (k, value) in row[1..].iter().enumerate() {
                *stats.value_counts[k].entry(value.clone()).or_insert(0) += 1;
            }
        }

        let total = dataset.n_rows();
        for stats in &mut classes {
            stats.prior = stats.count as f64 / total as f64;
            debug!(class = %stats.label, prior = stats.prior, "class prior");
        }

        Self {
            laplace: params.laplace,
            n_attributes,
            classes,
        }
    }
}

impl Classifier for BayesClassifier {
    /// `argmax_y P(y) · Π_k P(x_k | y)` with smoothed counts.
    fn classify(&self, record: &[String]) -> Prediction {
        let mut best_score = 0.0;
        let mut best: Option<&str> = None;

        for stats in &self.classes {
            let mut score = stats.prior;
            for k in 0..self.n_attributes {
                let count = record
                    .get(k + 1)
                    .and_then(|value| stats.value_counts[k].get(value))
                    .copied()
                    .unwrap_or(0)
                    + self.laplace as usize;
                score *= count as f64 / stats.count as f64;
            }

            if score > best_score {
                best_score = score;
                best = Some(&stats.label);
            }
        }

        match best {
            Some(label) => Prediction {
                label: label.to_string(),
                no_branch: false,
            },
            // Empty model: no class can be scored at all.
            None => Prediction {
                label: String::new(),
                no_branch: true,
            },
        }
    }
}
