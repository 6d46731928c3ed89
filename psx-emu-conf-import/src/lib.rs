//! Getting PlayStation title records in, and combining them.
//!
//! This crate owns every data source (JSON and CSV data files, the Echoj2
//! spreadsheet) and the multi-source merge with its disagreement report.

pub mod csv_file;
pub mod echoj2;
pub mod error;
pub mod json;
pub mod merge;
pub mod source;

pub use csv_file::CsvFileSource;
pub use echoj2::Echoj2Sheet;
pub use error::SourceError;
pub use json::{JsonFileSource, parse_apps, write_apps};
pub use merge::{Disagreement, MergeResult, Merger, find_disagreements, merge, merge_collections};
pub use source::{Source, source_for_path};
