//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use treeclass::config::DataConfig;
use treeclass::data::Dataset;

/// The classic play-tennis corpus, label first:
/// `play outlook temperature humidity wind`.
///
/// No two rows share an attribute vector, so a fully grown tree memorizes
/// the set exactly.
pub const TENNIS: &str = "\
no sunny hot high weak
no sunny hot high strong
yes overcast hot high weak
yes rain mild high weak
yes rain cool normal weak
no rain cool normal strong
yes overcast cool normal strong
no sunny mild high weak
yes sunny cool normal weak
yes rain mild normal weak
yes sunny mild normal strong
yes overcast mild high strong
yes overcast hot normal weak
no rain mild high strong
";

pub fn load(text: &str, config: &DataConfig) -> Dataset {
    Dataset::from_reader(Cursor::new(text), config).expect("fixture should parse")
}

pub fn tennis() -> Dataset {
    load(TENNIS, &DataConfig::default())
}
