//! treeclass: classification of labeled categorical tabular data.
//!
//! This crate provides an information-gain decision tree with multi-way
//! categorical splits, plus a naive-Bayes counting classifier, over delimited
//! text records.

pub mod bayes;
pub mod config;
pub mod data;
pub mod predict;
pub mod tree;
