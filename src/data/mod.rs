//! Record parsing and dataset storage.
//!
//! Input is line-oriented delimited text: one record per line, fields split
//! on a configurable delimiter, one field holding the class label. The
//! loader normalizes every row so the label sits in column 0; the rest of
//! the crate relies on that layout.

mod dataset;
mod error;

pub use dataset::Dataset;
pub use error::DataError;
