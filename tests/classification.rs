//! End-to-end training and classification runs.

mod common;

use std::fs;
use std::io::Write;

use approx::assert_relative_eq;

use common::{load, tennis, TENNIS};
use treeclass::bayes::{BayesClassifier, BayesParams};
use treeclass::config::DataConfig;
use treeclass::data::Dataset;
use treeclass::predict::{Classifier, TreeClassifier};
use treeclass::tree::TreeBuilder;

#[test]
fn tree_memorizes_its_training_set() {
    let train = tennis();
    let records = train.rows().to_vec();

    let tree = TreeBuilder::build(train);
    let eval = TreeClassifier::new(&tree).evaluate(&records);

    assert_eq!(eval.errors, 0);
    assert_relative_eq!(eval.accuracy(), 100.0);
    assert_eq!(eval.predictions.len(), 14);
}

#[test]
fn unseen_test_value_degrades_gracefully() {
    let tree = TreeBuilder::build(tennis());
    // "snow" never occurs in the outlook column of the training set.
    let test = load("yes snow hot high weak\nno sunny hot high strong\n", &DataConfig::default());

    let eval = TreeClassifier::new(&tree).evaluate(test.rows());

    // Still one prediction per record, and the run completes.
    assert_eq!(eval.predictions.len(), 2);
    assert_eq!(eval.total, 2);
    // The well-formed second record classifies normally.
    assert_eq!(eval.predictions[1], "no");
}

#[test]
fn trailing_label_and_tab_delimiter() {
    // Same corpus with the label moved to the last column and tabs.
    let text: String = TENNIS
        .lines()
        .map(|line| {
            let mut fields: Vec<&str> = line.split(' ').collect();
            let label = fields.remove(0);
            fields.push(label);
            fields.join("\t") + "\n"
        })
        .collect();

    let config = DataConfig {
        delimiter: "\t".to_string(),
        label_column: -1,
        ..Default::default()
    };
    let train = load(&text, &config);
    assert_eq!(train.rows()[0][0], "no");

    let records = train.rows().to_vec();
    let tree = TreeBuilder::build(train);
    let eval = TreeClassifier::new(&tree).evaluate(&records);
    assert_relative_eq!(eval.accuracy(), 100.0);
}

#[test]
fn file_round_trip_writes_predictions_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let train_path = dir.path().join("train.txt");
    let test_path = dir.path().join("test.txt");
    let out_path = dir.path().join("out.txt");

    fs::write(&train_path, TENNIS).unwrap();
    fs::write(&test_path, TENNIS).unwrap();

    let config = DataConfig::default();
    let train = Dataset::from_path(&train_path, &config).unwrap();
    let test = Dataset::from_path(&test_path, &config).unwrap();

    let tree = TreeBuilder::build(train);
    let eval = TreeClassifier::new(&tree).evaluate(test.rows());

    let mut out = fs::File::create(&out_path).unwrap();
    eval.write_to(&mut out).unwrap();
    out.flush().unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "no");
    assert_eq!(lines[14], "Accuracy: 100.000%");
}

#[test]
fn header_line_is_skipped_on_both_files() {
    let with_header = format!("play outlook temperature humidity wind\n{TENNIS}");
    let config = DataConfig {
        has_header: true,
        ..Default::default()
    };

    let train = load(&with_header, &config);
    assert_eq!(train.n_rows(), 14);

    let tree = TreeBuilder::build(train.clone());
    let eval = TreeClassifier::new(&tree).evaluate(train.rows());
    assert_relative_eq!(eval.accuracy(), 100.0);
}

#[test]
fn bayes_separates_a_clean_corpus() {
    let text = "\
spam cheap pills
spam cheap watches
spam free pills
ham project meeting
ham project pills
ham lunch meeting
";
    let train = load(text, &DataConfig::default());
    let model = BayesClassifier::train(&train, &BayesParams::default());
    let eval = model.evaluate(train.rows());

    assert_eq!(eval.predictions.len(), 6);
    assert!(eval.accuracy() >= 100.0 - 1e-9, "accuracy was {}", eval.accuracy());
}

#[test]
fn tree_and_bayes_share_the_output_contract() {
    let train = tennis();
    let tree = TreeBuilder::build(train.clone());
    let model = BayesClassifier::train(&train, &BayesParams::default());

    for eval in [
        TreeClassifier::new(&tree).evaluate(train.rows()),
        model.evaluate(train.rows()),
    ] {
        let mut out = Vec::new();
        eval.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 15);
        assert!(text.lines().last().unwrap().starts_with("Accuracy: "));
    }
}
