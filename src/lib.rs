//! sheetmerge library
//!
//! Combines a folder of spreadsheet reports that share one layout into a
//! single cleaned, de-duplicated CSV file.

pub mod cli;
pub mod collect;
pub mod combine;
pub mod config;
pub mod error;
pub mod merge;
pub mod pipeline;
pub mod table;
pub mod transforms;

pub use combine::{combine, CombineOptions, CombineOutcome, CombineReport};
pub use config::Config;
pub use error::MergeError;
pub use merge::{MergeStats, Merger};
pub use table::{CsvOptions, Table, Transform, TransformChain};
